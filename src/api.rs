use crate::error::SpellError;
use crate::input::Number;
use crate::lexicon::Lexicon;
use crate::speller::{self, Expansion, IntegerSpelling};
use std::time::{Duration, Instant};

/// Result from [`spell_verbose_with`].
#[derive(Debug, Clone)]
pub struct SpellResultVerbose {
    /// The rendered spelling (words joined by single spaces).
    pub text: String,
    /// The same spelling as a word sequence.
    pub words: Vec<String>,
    /// Total elapsed time spent coercing, spelling and rendering.
    pub elapsed: Duration,
    pub details: SpellDetails,
}

/// Intermediate results of a single spelling, for debugging and inspection.
///
/// The plain [`spell`] path never allocates these.
#[derive(Debug, Clone)]
pub struct SpellDetails {
    /// The input as given.
    pub input: String,
    /// Negative-sign word, when the value is below zero.
    pub sign: Option<String>,
    /// Integer-part words straight out of the decomposer.
    pub raw_integer: Vec<String>,
    /// Integer-part words after the sanitizer.
    pub integer: Vec<String>,
    /// Number of words the sanitizer removed.
    pub removed: usize,
    /// Every expansion step the decomposer performed, in order.
    pub expansions: Vec<Expansion>,
    /// Decimal-point word, when the value has fractional digits.
    pub point: Option<String>,
    pub fraction: Vec<String>,
    /// Time spent decomposing and sanitizing the integer part.
    pub integer_time: Duration,
    /// Time spent spelling the fractional digits.
    pub fraction_time: Duration,
}

/// Spell `value` with the built-in Tigrinya lexicon.
///
/// # Example
/// ```
/// use numspell::spell;
///
/// assert_eq!(spell(-230.41).unwrap(), "ኣሉታ ክልተ ሚእቲን ሰላሳን ነጥቢ ኣርባዕተ ሓደ");
/// assert!(spell("not a number").is_err());
/// ```
pub fn spell<'a>(value: impl Into<Number<'a>>) -> Result<String, SpellError> {
    spell_with(value, Lexicon::tigrinya())
}

/// Spell `value` with the provided lexicon.
pub fn spell_with<'a>(value: impl Into<Number<'a>>, lexicon: &Lexicon) -> Result<String, SpellError> {
    spell_words_with(value, lexicon).map(|words| words.join(" "))
}

/// Spell `value` and return the word sequence unjoined.
pub fn spell_words_with<'a>(value: impl Into<Number<'a>>, lexicon: &Lexicon) -> Result<Vec<String>, SpellError> {
    let value = value.into();
    let run = assemble(value, lexicon, None)?;
    Ok(run.into_words())
}

/// Spell `value` and return the intermediate results alongside the text.
pub fn spell_verbose_with<'a>(
    value: impl Into<Number<'a>>,
    lexicon: &Lexicon,
) -> Result<SpellResultVerbose, SpellError> {
    let start = Instant::now();
    let value = value.into();

    let mut expansions = Vec::new();
    let run = assemble(value, lexicon, Some(&mut expansions))?;

    let details = SpellDetails {
        input: value.to_string(),
        sign: run.sign.map(str::to_string),
        raw_integer: run.integer.raw.clone(),
        integer: run.integer.words.clone(),
        removed: run.integer.removed,
        expansions,
        point: run.point.map(str::to_string),
        fraction: run.fraction.clone(),
        integer_time: run.integer_time,
        fraction_time: run.fraction_time,
    };

    let words = run.into_words();
    let text = words.join(" ");
    Ok(SpellResultVerbose { text, words, elapsed: start.elapsed(), details })
}

/// The pieces of one spelling, in output order.
struct Assembled<'l> {
    sign: Option<&'l str>,
    integer: IntegerSpelling,
    point: Option<&'l str>,
    fraction: Vec<String>,
    integer_time: Duration,
    fraction_time: Duration,
}

impl Assembled<'_> {
    fn into_words(self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.integer.words.len() + self.fraction.len() + 2);
        words.extend(self.sign.map(str::to_string));
        words.extend(self.integer.words);
        words.extend(self.point.map(str::to_string));
        words.extend(self.fraction);
        words
    }
}

fn assemble<'l>(
    value: Number<'_>,
    lexicon: &'l Lexicon,
    trace: Option<&mut Vec<Expansion>>,
) -> Result<Assembled<'l>, SpellError> {
    tracing::debug!(input = %value, lexicon = lexicon.name(), "spell");

    let split = value.split().inspect_err(|err| tracing::debug!(%err, "rejected input"))?;

    let started = Instant::now();
    let integer = speller::spell_integer(split.integer, lexicon, trace)
        .inspect_err(|err| tracing::debug!(%err, "integer part not spellable"))?;
    let integer_time = started.elapsed();

    let started = Instant::now();
    let fraction = match split.fraction.as_deref() {
        Some(digits) => speller::spell_fraction(digits, lexicon)?,
        None => Vec::new(),
    };
    let fraction_time = started.elapsed();

    tracing::debug!(
        negative = split.negative,
        integer_words = integer.words.len(),
        removed = integer.removed,
        fraction_words = fraction.len(),
        "spelled"
    );

    Ok(Assembled {
        sign: split.negative.then(|| lexicon.negative()),
        integer,
        point: (!fraction.is_empty()).then(|| lexicon.point()),
        fraction,
        integer_time,
        fraction_time,
    })
}
