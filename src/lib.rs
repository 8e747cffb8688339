//! Spell signed decimal numbers out as words.
//!
//! ```text
//! value ── Number::split ──▶ sign? │ integer magnitude │ fraction digits?
//!          (input.rs)                │                   │
//!                                    ▼                   ▼
//!                         decompose + sanitize     spell_fraction
//!                         (speller/)               (speller/)
//!                                    │                   │
//!          sign word ───────────────┴── point word ─────┘──▶ words ──▶ " ".join
//! ```
//!
//! All language-specific data lives in a [`Lexicon`]; the built-in one is
//! Tigrinya. Spelling is pure and reentrant: the lexicon is shared read-only
//! and every call owns its working buffers.
//!
//! ```
//! use numspell::{SpellError, spell};
//!
//! assert_eq!(spell(11).unwrap(), "ዓሰርተን ሓደን");
//! assert_eq!(spell("0.05").unwrap(), "ዜሮ ነጥቢ ዜሮ ሓሙሽስተ");
//! assert!(matches!(spell(10_000_000_000u64), Err(SpellError::MagnitudeOutOfRange { .. })));
//! ```

#[macro_use]
mod macros;
mod api;
mod error;
mod input;
mod lexicon;
mod speller;

pub use api::{SpellDetails, SpellResultVerbose, spell, spell_verbose_with, spell_with, spell_words_with};
pub use error::{LexiconError, SpellError};
pub use input::Number;
pub use lexicon::{Lexicon, LexiconTable, Tier};
pub use speller::{Expansion, digit_count};
