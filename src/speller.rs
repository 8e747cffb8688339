//! The spelling core.
//!
//! ```text
//! integer magnitude ──▶ decompose  (decompose.rs)  raw words
//!                       │  worklist of pending magnitudes, expanded
//!                       │  into [quotient, tier word, remainder]
//!                       ▼
//!                       sanitize   (sanitize.rs)   drop "one" before tens
//!
//! fraction digits   ──▶ spell_fraction (fraction.rs) one word per digit
//!                       └─ digit_count (digits.rs)
//! ```
//!
//! Everything here borrows a [`Lexicon`] and owns only its per-call buffers,
//! so the functions are reentrant and need no synchronization.
//!
//! ## Tracing
//!
//! Expansions and sanitizer removals are emitted as `tracing` events at
//! `TRACE` level; callers that want them as data pass a trace buffer.

#[path = "speller/decompose.rs"]
mod decompose;
#[path = "speller/digits.rs"]
mod digits;
#[path = "speller/fraction.rs"]
mod fraction;
#[path = "speller/sanitize.rs"]
mod sanitize;
#[cfg(test)]
#[path = "speller/tests.rs"]
mod tests;

pub use decompose::Expansion;
pub use digits::digit_count;

pub(crate) use decompose::decompose;
pub(crate) use fraction::spell_fraction;
pub(crate) use sanitize::sanitize;

use crate::error::SpellError;
use crate::lexicon::Lexicon;

/// Integer-part spelling, before and after sanitizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IntegerSpelling {
    pub raw: Vec<String>,
    pub words: Vec<String>,
    pub removed: usize,
}

/// Spell an integer magnitude: the zero word for 0, otherwise decompose and
/// sanitize.
pub(crate) fn spell_integer(
    n: u128,
    lexicon: &Lexicon,
    trace: Option<&mut Vec<Expansion>>,
) -> Result<IntegerSpelling, SpellError> {
    if n == 0 {
        let words = vec![lexicon.zero().to_string()];
        return Ok(IntegerSpelling { raw: words.clone(), words, removed: 0 });
    }

    let n = u64::try_from(n)
        .ok()
        .filter(|&n| n < lexicon.limit())
        .ok_or(SpellError::MagnitudeOutOfRange { magnitude: n, limit: lexicon.limit() })?;

    let raw = decompose(n, lexicon, trace)?;
    let mut words = raw.clone();
    let removed = sanitize(&mut words, lexicon);
    Ok(IntegerSpelling { raw, words, removed })
}
