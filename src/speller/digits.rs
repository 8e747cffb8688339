use std::fmt::Display;

/// Number of decimal digits in `value`'s textual form.
///
/// A leading sign, surrounding whitespace and a decimal point are ignored;
/// leading zeros are counted. Callers pass one side of the point at a time.
///
/// ```
/// use numspell::digit_count;
///
/// assert_eq!(digit_count(-230), 3);
/// assert_eq!(digit_count("0041"), 4);
/// ```
pub fn digit_count(value: impl Display) -> usize {
    value.to_string().bytes().filter(u8::is_ascii_digit).count()
}
