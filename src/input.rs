//! Input coercion: the single validation gate in front of the speller.
//!
//! Every accepted value is reduced to a [`SplitNumber`]: a sign, the integer
//! magnitude, and the fractional digits exactly as written.
//!
//! ```text
//! Integer(-230)     ──▶ { negative, 230, None }
//! Float(-230.41)    ──▶ "230.41"  ──▶ { negative, 230, Some("41") }
//! Text(" 230.410 ") ──▶ regex     ──▶ { positive, 230, Some("410") }
//! Float(5.0)       ──▶ "5"       ──▶ { positive, 5, Some("0") }
//! Text("2.5e3")     ──▶ f64 path  ──▶ { positive, 2500, Some("0") }
//! ```

use crate::error::SpellError;
use std::fmt;

/// A value accepted by [`crate::spell`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number<'a> {
    /// Integer input; never spelled with a decimal point.
    Integer(i128),
    /// Floating-point input, spelled from its shortest round-trip decimal form.
    /// Always carries a fraction, `"0"` for integral values.
    Float(f64),
    /// Single-precision input, spelled from its own shortest form so that
    /// `0.1f32` stays "0.1".
    Float32(f32),
    /// Numeric-looking text, optionally signed and with a fractional part.
    Text(&'a str),
}

macro_rules! number_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Number<'_> {
                fn from(value: $t) -> Self {
                    Number::Integer(value as i128)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Number<'_> {
    fn from(value: u128) -> Self {
        // Anything past i128::MAX is far beyond every lexicon ceiling anyway.
        Number::Integer(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<f64> for Number<'_> {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number<'_> {
    fn from(value: f32) -> Self {
        Number::Float32(value)
    }
}

impl<'a> From<&'a str> for Number<'a> {
    fn from(value: &'a str) -> Self {
        Number::Text(value)
    }
}

impl<'a> From<&'a String> for Number<'a> {
    fn from(value: &'a String) -> Self {
        Number::Text(value.as_str())
    }
}

impl fmt::Display for Number<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
            Number::Float32(v) => write!(f, "{v}"),
            Number::Text(s) => f.write_str(s),
        }
    }
}

/// A coerced value, ready for spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitNumber {
    /// True only for values strictly below zero (`-0` is not negative).
    pub negative: bool,
    /// Integer magnitude; saturates at `u128::MAX` for absurdly long inputs.
    pub integer: u128,
    /// Fractional digits as written, `None` when absent or empty.
    pub fraction: Option<String>,
}

impl Number<'_> {
    pub(crate) fn split(&self) -> Result<SplitNumber, SpellError> {
        match *self {
            Number::Integer(v) => Ok(SplitNumber { negative: v < 0, integer: v.unsigned_abs(), fraction: None }),
            Number::Float(v) => split_float(v).ok_or_else(|| SpellError::invalid(v.to_string())),
            Number::Float32(v) => split_float(v).ok_or_else(|| SpellError::invalid(v.to_string())),
            Number::Text(s) => split_text(s).ok_or_else(|| SpellError::invalid(s)),
        }
    }
}

/// The float widths accepted by [`Number`].
trait FloatRepr: Copy + fmt::Display {
    fn is_finite(self) -> bool;
    fn is_negative(self) -> bool;
    fn magnitude(self) -> Self;
}

macro_rules! float_repr {
    ($($t:ty),*) => {
        $(
            impl FloatRepr for $t {
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                fn is_negative(self) -> bool {
                    self < 0.0
                }

                fn magnitude(self) -> Self {
                    self.abs()
                }
            }
        )*
    };
}

float_repr!(f32, f64);

/// Split a float through its own shortest `Display` form, which never uses
/// exponent notation. Integral values get the fraction `"0"`.
fn split_float<F: FloatRepr>(value: F) -> Option<SplitNumber> {
    if !value.is_finite() {
        return None;
    }
    let text = value.magnitude().to_string();
    let (int_digits, frac_digits) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    Some(SplitNumber {
        negative: value.is_negative(),
        integer: parse_magnitude(int_digits),
        fraction: non_empty(frac_digits),
    })
}

fn split_text(input: &str) -> Option<SplitNumber> {
    let trimmed = input.trim();
    let re = regex!(r"^([+-])?([0-9]*)(?:\.([0-9]*))?$");

    let Some(caps) = re.captures(trimmed) else {
        return split_exponent(trimmed);
    };

    let int_digits = caps.get(2).map_or("", |m| m.as_str());
    let frac_digits = caps.get(3).map_or("", |m| m.as_str());
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let is_zero = int_digits.bytes().chain(frac_digits.bytes()).all(|b| b == b'0');
    let minus = caps.get(1).is_some_and(|m| m.as_str() == "-");

    Some(SplitNumber {
        negative: minus && !is_zero,
        integer: parse_magnitude(int_digits),
        fraction: non_empty(frac_digits),
    })
}

/// Scientific notation goes through `f64`. A value too large for `f64` is
/// still numeric: it saturates so the speller reports it as out of range.
fn split_exponent(trimmed: &str) -> Option<SplitNumber> {
    let re = regex!(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)[eE][+-]?[0-9]+$");
    if !re.is_match(trimmed) {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_infinite() {
        return Some(SplitNumber { negative: value < 0.0, integer: u128::MAX, fraction: None });
    }
    split_float(value)
}

/// Parse an ASCII digit run; empty is zero, overflow saturates.
fn parse_magnitude(digits: &str) -> u128 {
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u128>().unwrap_or(u128::MAX)
}

fn non_empty(digits: &str) -> Option<String> {
    if digits.is_empty() { None } else { Some(digits.to_string()) }
}
