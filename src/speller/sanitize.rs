use crate::lexicon::Lexicon;

/// Drop every unit word ("one") that directly precedes a tens word.
///
/// Tens are spoken on their own, so the unit quotient the decomposer emits in
/// front of them is redundant. Runs to a fixed point in a single left-to-right
/// scan: after a removal the same index is checked again. Returns the number
/// of words removed.
pub(crate) fn sanitize(words: &mut Vec<String>, lexicon: &Lexicon) -> usize {
    let before = words.len();
    let mut i = 0;
    while i + 1 < words.len() {
        if words[i] == lexicon.unit() && lexicon.is_tens_word(&words[i + 1]) {
            tracing::trace!(index = i, next = %words[i + 1], "drop unit before tens");
            words.remove(i);
        } else {
            i += 1;
        }
    }
    before - words.len()
}
