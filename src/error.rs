//! Error types surfaced by the public API.

use thiserror::Error;

/// Failure while spelling a value.
///
/// Spelling is a pure function: neither variant is transient, so callers
/// should never retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// The value could not be coerced to a finite number.
    #[error("invalid input '{input}': expected a number or numeric string")]
    InvalidInput { input: String },

    /// The integer part is at or beyond the lexicon's magnitude ceiling.
    #[error("magnitude {magnitude} is out of range (must be below {limit})")]
    MagnitudeOutOfRange { magnitude: u128, limit: u64 },
}

impl SpellError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        SpellError::InvalidInput { input: input.into() }
    }
}

/// A [`crate::Lexicon`] definition that violates a table invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("tier values must be strictly increasing and non-zero (found {value} after {previous})")]
    UnorderedTiers { previous: u64, value: u64 },

    #[error("required tier {0} is missing")]
    MissingTier(u64),

    #[error("digit word for {value} ('{digit}') disagrees with its tier word ('{tier}')")]
    DigitTierMismatch { value: u64, digit: String, tier: String },

    #[error("empty word for {0}")]
    EmptyWord(&'static str),

    #[error("magnitude ceiling overflows: largest tier {0} times ten exceeds u64")]
    CeilingOverflow(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            SpellError::invalid("abc").to_string(),
            "invalid input 'abc': expected a number or numeric string"
        );
        assert_eq!(
            SpellError::MagnitudeOutOfRange { magnitude: 10_000_000_000, limit: 10_000_000_000 }.to_string(),
            "magnitude 10000000000 is out of range (must be below 10000000000)"
        );
        assert_eq!(LexiconError::MissingTier(20).to_string(), "required tier 20 is missing");
    }
}
