use super::digits::digit_count;
use crate::error::SpellError;
use crate::lexicon::Lexicon;

/// Spell fractional digits one word each, most significant first.
///
/// `digits` is the fractional part exactly as written, trailing and internal
/// zeros included. It is never re-parsed as a number, so "041" stays three
/// words.
///
/// The digit count is taken from the string before any extraction; each
/// position below that count yields exactly one word.
pub(crate) fn spell_fraction(digits: &str, lexicon: &Lexicon) -> Result<Vec<String>, SpellError> {
    let count = digit_count(digits);
    // Any non-digit byte makes the count fall short of the length.
    if count != digits.len() {
        return Err(SpellError::invalid(digits));
    }

    let bytes = digits.as_bytes();
    (0..count)
        .map(|position| {
            lexicon.digit(bytes[position] - b'0').map(str::to_string).ok_or_else(|| SpellError::invalid(digits))
        })
        .collect()
}
