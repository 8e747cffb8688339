//! Word tables used by the speller.
//!
//! A [`Lexicon`] bundles everything language-specific:
//!
//! ```text
//! digits      0..=10            ──▶ fractional speller, zero integer part
//! tiers       1..9, 10..90,
//!             100, 1000, ...    ──▶ decomposer (ascending scan)
//! connective  suffix            ──▶ "and more follows" marker
//! tens        tens ± connective ──▶ sanitizer
//! negative / point              ──▶ orchestrator
//! ```
//!
//! Tiers are an explicit ascending list of `(value, word)` pairs; lookups use
//! binary search, so nothing depends on map iteration order.
//!
//! Lexicons are immutable once built. The built-in table lives in a
//! process-wide static and is handed out by reference.

#[path = "lexicon/tigrinya.rs"]
mod tigrinya;

use crate::error::LexiconError;
use once_cell::sync::Lazy;

static TIGRINYA: Lazy<Lexicon> = Lazy::new(tigrinya::get);

/// One magnitude boundary and the word naming it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub value: u64,
    pub word: String,
}

/// Borrowed description of a lexicon, validated by [`Lexicon::new`].
#[derive(Debug, Clone)]
pub struct LexiconTable<'a> {
    /// Human-readable language name.
    pub name: &'a str,
    /// Words for 0 through 10.
    pub digits: [&'a str; 11],
    /// `(value, word)` pairs in ascending order.
    pub tiers: &'a [(u64, &'a str)],
    /// Suffix appended to a word when more value follows it.
    pub connective: &'a str,
    pub negative: &'a str,
    pub point: &'a str,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    digits: Vec<String>,
    tiers: Vec<Tier>,
    connective: String,
    negative: String,
    point: String,
    /// Tens words (10, 20, ..., 90), plain and with the connective suffix.
    tens: Vec<String>,
    /// Exclusive upper bound for integer magnitudes.
    limit: u64,
}

impl Lexicon {
    /// Build a lexicon, checking the table invariants the decomposer relies on.
    pub fn new(table: LexiconTable<'_>) -> Result<Self, LexiconError> {
        for (label, word) in
            [("connective", table.connective), ("negative", table.negative), ("point", table.point)]
        {
            if word.is_empty() {
                return Err(LexiconError::EmptyWord(label));
            }
        }
        if table.digits.iter().any(|d| d.is_empty()) {
            return Err(LexiconError::EmptyWord("digit"));
        }
        if table.tiers.iter().any(|(_, w)| w.is_empty()) {
            return Err(LexiconError::EmptyWord("tier"));
        }

        let mut previous = 0u64;
        for &(value, _) in table.tiers {
            if value <= previous {
                return Err(LexiconError::UnorderedTiers { previous, value });
            }
            previous = value;
        }

        let tiers: Vec<Tier> =
            table.tiers.iter().map(|&(value, word)| Tier { value, word: word.to_string() }).collect();
        let lookup = |value: u64| tiers.binary_search_by_key(&value, |t| t.value).ok().map(|i| &tiers[i]);

        for value in (1..=9).chain((10..=90).step_by(10)) {
            let tier = lookup(value).ok_or(LexiconError::MissingTier(value))?;
            if value <= 10 && tier.word != table.digits[value as usize] {
                return Err(LexiconError::DigitTierMismatch {
                    value,
                    digit: table.digits[value as usize].to_string(),
                    tier: tier.word.clone(),
                });
            }
        }

        let tens = (10..=90)
            .step_by(10)
            .filter_map(lookup)
            .flat_map(|t| [t.word.clone(), format!("{}{}", t.word, table.connective)])
            .collect();

        // Validated non-empty above: tier 1 is required.
        let largest = tiers.last().map(|t| t.value).unwrap_or(1);
        let limit = largest.checked_mul(10).ok_or(LexiconError::CeilingOverflow(largest))?;

        Ok(Lexicon {
            name: table.name.to_string(),
            digits: table.digits.iter().map(|d| d.to_string()).collect(),
            tiers,
            connective: table.connective.to_string(),
            negative: table.negative.to_string(),
            point: table.point.to_string(),
            tens,
            limit,
        })
    }

    /// The built-in Tigrinya lexicon.
    pub fn tigrinya() -> &'static Lexicon {
        &TIGRINYA
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Word for a single digit (0..=10).
    pub fn digit(&self, value: u8) -> Option<&str> {
        self.digits.get(value as usize).map(String::as_str)
    }

    pub fn zero(&self) -> &str {
        &self.digits[0]
    }

    /// The unit word ("one") the sanitizer looks for.
    pub fn unit(&self) -> &str {
        &self.digits[1]
    }

    pub fn negative(&self) -> &str {
        &self.negative
    }

    pub fn point(&self) -> &str {
        &self.point
    }

    pub fn connective(&self) -> &str {
        &self.connective
    }

    /// Exclusive upper bound on integer magnitudes this lexicon can spell.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Word for a magnitude that is itself a tier value.
    pub fn tier_word(&self, value: u64) -> Option<&str> {
        self.tiers.binary_search_by_key(&value, |t| t.value).ok().map(|i| self.tiers[i].word.as_str())
    }

    /// The tightest tier not exceeding `n`, or `None` when `n` is zero or at
    /// or beyond [`Lexicon::limit`].
    ///
    /// Past the largest tier the largest tier itself is the scale, up to the
    /// ceiling.
    pub fn scale_of(&self, n: u64) -> Option<&Tier> {
        if n == 0 || n >= self.limit {
            return None;
        }
        let first_above = self.tiers.partition_point(|t| t.value <= n);
        first_above.checked_sub(1).map(|i| &self.tiers[i])
    }

    /// `word` followed by the connective suffix.
    pub fn with_connective(&self, word: &str) -> String {
        format!("{}{}", word, self.connective)
    }

    /// True for a tens word, with or without the connective suffix.
    pub fn is_tens_word(&self, word: &str) -> bool {
        self.tens.iter().any(|t| t == word)
    }
}
