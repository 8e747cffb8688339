//! Tier-based decomposition of an integer magnitude into words.
//!
//! A magnitude `n` that is not itself a tier is split around its scale (the
//! tightest tier not exceeding it):
//!
//! ```text
//! n = quotient × base + remainder
//!
//! 12345 ──▶ [ 12 ]      [ ሽሕን ]      [ 345 ]
//!            pending     tier word    pending (or remainder word + ን
//!                        (+ ን if      when 345 were a tier)
//!                        remainder)
//! ```
//!
//! Pending magnitudes sit on an explicit worklist. Popping one either
//! resolves it (tier values map straight to their word) or expands it into
//! up to three tokens pushed back in reverse order, so the output comes out
//! most significant first. Each expansion yields parts strictly smaller than
//! the magnitude it replaced, which bounds the loop.

use crate::error::SpellError;
use crate::lexicon::Lexicon;

/// One cell of the working sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WordToken {
    Pending(u64),
    Resolved(String),
}

/// A single expansion step, recorded for verbose output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub magnitude: u64,
    pub base: u64,
    pub quotient: u64,
    pub remainder: u64,
}

/// Decompose `n` into its raw (unsanitized) word sequence.
///
/// Zero is spelled as the zero word; it never occurs as a quotient or a
/// remainder, both of which are emitted only when non-zero.
pub(crate) fn decompose(
    n: u64,
    lexicon: &Lexicon,
    mut trace: Option<&mut Vec<Expansion>>,
) -> Result<Vec<String>, SpellError> {
    if n == 0 {
        return Ok(vec![lexicon.zero().to_string()]);
    }

    let mut worklist = vec![WordToken::Pending(n)];
    let mut words = Vec::new();

    while let Some(token) = worklist.pop() {
        let magnitude = match token {
            WordToken::Resolved(word) => {
                words.push(word);
                continue;
            }
            WordToken::Pending(m) => m,
        };

        if let Some(word) = lexicon.tier_word(magnitude) {
            words.push(word.to_string());
            continue;
        }

        let tier = lexicon.scale_of(magnitude).ok_or(SpellError::MagnitudeOutOfRange {
            magnitude: u128::from(magnitude),
            limit: lexicon.limit(),
        })?;
        let quotient = magnitude / tier.value;
        let remainder = magnitude % tier.value;

        tracing::trace!(magnitude, base = tier.value, quotient, remainder, "expand");
        if let Some(trace) = trace.as_mut() {
            trace.push(Expansion { magnitude, base: tier.value, quotient, remainder });
        }

        if remainder == 0 {
            worklist.push(WordToken::Resolved(tier.word.clone()));
        } else {
            let rest = match lexicon.tier_word(remainder) {
                Some(word) => WordToken::Resolved(lexicon.with_connective(word)),
                None => WordToken::Pending(remainder),
            };
            worklist.push(rest);
            worklist.push(WordToken::Resolved(lexicon.with_connective(&tier.word)));
        }
        worklist.push(WordToken::Pending(quotient));
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(n: u64) -> Vec<String> {
        decompose(n, Lexicon::tigrinya(), None).unwrap()
    }

    #[test]
    fn tier_values_resolve_directly() {
        assert_eq!(raw(7), ["ሸዋዕተ"]);
        assert_eq!(raw(10), ["ዓሰርተ"]);
        assert_eq!(raw(60), ["ስሳ"]);
        assert_eq!(raw(100), ["ሚእቲ"]);
        assert_eq!(raw(1_000_000_000), ["ቢሊዮን"]);
    }

    #[test]
    fn raw_sequence_keeps_leading_unit() {
        assert_eq!(raw(11), ["ሓደ", "ዓሰርተን", "ሓደን"]);
        assert_eq!(raw(21), ["ሓደ", "ዒስራን", "ሓደን"]);
        assert_eq!(raw(123), ["ሓደ", "ሚእቲን", "ሓደ", "ዒስራን", "ሰለስተን"]);
    }

    #[test]
    fn zero_remainder_emits_no_token() {
        assert_eq!(raw(200), ["ክልተ", "ሚእቲ"]);
        assert_eq!(raw(3_000_000), ["ሰለስተ", "ሚሊዮን"]);
    }

    #[test]
    fn quotients_are_decomposed_recursively() {
        assert_eq!(
            raw(12_345),
            ["ሓደ", "ዓሰርተን", "ክልተን", "ሽሕን", "ሰለስተ", "ሚእቲን", "ሓደ", "ኣርብዓን", "ሓሙሽስተን"]
        );
    }

    #[test]
    fn records_expansions_in_order() {
        let mut trace = Vec::new();
        decompose(230, Lexicon::tigrinya(), Some(&mut trace)).unwrap();
        assert_eq!(trace, [Expansion { magnitude: 230, base: 100, quotient: 2, remainder: 30 }]);

        trace.clear();
        decompose(1_021, Lexicon::tigrinya(), Some(&mut trace)).unwrap();
        let magnitudes: Vec<u64> = trace.iter().map(|e| e.magnitude).collect();
        assert_eq!(magnitudes, [1_021, 21]);
    }

    #[test]
    fn out_of_range_fails() {
        let err = decompose(10_000_000_000, Lexicon::tigrinya(), None).unwrap_err();
        assert_eq!(err, SpellError::MagnitudeOutOfRange { magnitude: 10_000_000_000, limit: 10_000_000_000 });
    }

    #[test]
    fn largest_supported_magnitude() {
        let words = raw(9_999_999_999);
        assert_eq!(words.first().map(String::as_str), Some("ትሽዓተ"));
        assert_eq!(words[1], "ቢሊዮንን");
    }
}
