use crate::{Lexicon, SpellError, spell, spell_words_with};
use proptest::prelude::*;

#[test]
fn spelling_examples_matching() {
    // Array of (input, expected spelling)
    let cases: Vec<(&str, &str)> = vec![
        ("0", "ዜሮ"),
        ("1", "ሓደ"),
        ("5", "ሓሙሽስተ"),
        ("9", "ትሽዓተ"),
        ("10", "ዓሰርተ"),
        ("11", "ዓሰርተን ሓደን"),
        ("15", "ዓሰርተን ሓሙሽስተን"),
        ("20", "ዒስራ"),
        ("21", "ዒስራን ሓደን"),
        ("99", "ቴስዓን ትሽዓተን"),
        ("100", "ሚእቲ"),
        ("101", "ሓደ ሚእቲን ሓደን"),
        ("110", "ሓደ ሚእቲን ዓሰርተን"),
        ("123", "ሓደ ሚእቲን ዒስራን ሰለስተን"),
        ("200", "ክልተ ሚእቲ"),
        ("230", "ክልተ ሚእቲን ሰላሳን"),
        ("1000", "ሽሕ"),
        ("1100", "ሓደ ሽሕን ሚእቲን"),
        ("2024", "ክልተ ሽሕን ዒስራን ኣርባዕተን"),
        ("21000", "ዒስራን ሓደን ሽሕ"),
        ("1000000", "ሚሊዮን"),
        ("1500000", "ሓደ ሚሊዮንን ሓሙሽስተ ሚእቲ ሽሕ"),
        ("1000000000", "ቢሊዮን"),
        ("2000000001", "ክልተ ቢሊዮንን ሓደን"),
        ("-230.41", "ኣሉታ ክልተ ሚእቲን ሰላሳን ነጥቢ ኣርባዕተ ሓደ"),
        ("3.140", "ሰለስተ ነጥቢ ሓደ ኣርባዕተ ዜሮ"),
        ("0.05", "ዜሮ ነጥቢ ዜሮ ሓሙሽስተ"),
        ("-0.5", "ኣሉታ ዜሮ ነጥቢ ሓሙሽስተ"),
        ("-0", "ዜሮ"),
        ("+7", "ሸዋዕተ"),
        ("12.", "ዓሰርተን ክልተን"),
        (" 42 ", "ኣርብዓን ክልተን"),
        ("1e3", "ሽሕ ነጥቢ ዜሮ"),
        ("5.0", "ሓሙሽስተ ነጥቢ ዜሮ"),
    ];

    for (input, expected) in cases {
        let got = spell(input);
        assert_eq!(got.as_deref(), Ok(expected), "unexpected spelling for input '{}'", input);
    }
}

#[test]
fn typed_inputs() {
    assert_eq!(spell(0u8).unwrap(), "ዜሮ");
    assert_eq!(spell(-11i64).unwrap(), "ኣሉታ ዓሰርተን ሓደን");
    assert_eq!(spell(-230.41).unwrap(), "ኣሉታ ክልተ ሚእቲን ሰላሳን ነጥቢ ኣርባዕተ ሓደ");
    assert_eq!(spell(5.0).unwrap(), "ሓሙሽስተ ነጥቢ ዜሮ");
    assert_eq!(spell(5.0).unwrap(), spell("5.0").unwrap());
    assert_eq!(spell(0.1f32).unwrap(), "ዜሮ ነጥቢ ሓደ");
    assert_eq!(spell(-2.5f32).unwrap(), "ኣሉታ ክልተ ነጥቢ ሓሙሽስተ");
    assert_eq!(spell(&"100".to_string()).unwrap(), "ሚእቲ");
}

#[test]
fn integer_input_never_has_a_point() {
    for n in [0i64, 7, -7, 100, 9_999_999_999] {
        let words = spell_words_with(n, Lexicon::tigrinya()).unwrap();
        assert!(!words.iter().any(|w| w == "ነጥቢ"), "point word for integer {}", n);
    }
}

#[test]
fn invalid_and_out_of_range() {
    assert_eq!(spell("not a number"), Err(SpellError::InvalidInput { input: "not a number".to_string() }));
    assert_eq!(
        spell(10u64.pow(9) * 10),
        Err(SpellError::MagnitudeOutOfRange { magnitude: 10_000_000_000, limit: 10_000_000_000 })
    );
    assert!(matches!(spell(-10_000_000_000i64), Err(SpellError::MagnitudeOutOfRange { .. })));
    assert!(matches!(spell("99999999999.5"), Err(SpellError::MagnitudeOutOfRange { .. })));
    assert!(matches!(spell(1e300), Err(SpellError::MagnitudeOutOfRange { .. })));
    assert!(matches!(spell(f64::NAN), Err(SpellError::InvalidInput { .. })));
    assert!(matches!(spell("1e400"), Err(SpellError::MagnitudeOutOfRange { .. })));
    assert!(matches!(spell("-1e400"), Err(SpellError::MagnitudeOutOfRange { .. })));
    assert!(matches!(spell("inf"), Err(SpellError::InvalidInput { .. })));
}

#[test]
fn no_unit_before_tens_up_to_ten_thousand() {
    let lex = Lexicon::tigrinya();
    for n in 10u64..=10_000 {
        let words = spell_words_with(n, lex).unwrap();
        for pair in words.windows(2) {
            assert!(
                !(pair[0] == lex.unit() && lex.is_tens_word(&pair[1])),
                "unit before tens in spelling of {}: {:?}",
                n,
                words
            );
        }
    }
}

fn digit_value(lex: &Lexicon, word: &str) -> Option<char> {
    (0..=9u8).find(|&d| lex.digit(d) == Some(word)).map(|d| char::from(b'0' + d))
}

proptest! {
    #[test]
    fn single_digits_spell_as_digit_word(n in 0u8..10) {
        prop_assert_eq!(spell(n).unwrap(), Lexicon::tigrinya().digit(n).unwrap());
    }

    #[test]
    fn tier_values_spell_as_tier_word(tier in prop::sample::select(Lexicon::tigrinya().tiers().to_vec())) {
        prop_assert_eq!(spell(tier.value).unwrap(), tier.word);
    }

    #[test]
    fn spelling_is_idempotent(n in 0u64..10_000_000_000) {
        prop_assert_eq!(spell(n), spell(n));
    }

    #[test]
    fn no_unit_before_tens(n in 10u64..10_000_000_000) {
        let lex = Lexicon::tigrinya();
        let words = spell_words_with(n, lex).unwrap();
        for pair in words.windows(2) {
            prop_assert!(!(pair[0] == lex.unit() && lex.is_tens_word(&pair[1])), "{:?}", words);
        }
    }

    #[test]
    fn negative_prefixes_sign_word(x in 1i64..10_000_000_000) {
        let expected = format!("{} {}", Lexicon::tigrinya().negative(), spell(x).unwrap());
        prop_assert_eq!(spell(-x).unwrap(), expected);
    }

    #[test]
    fn fraction_digits_round_trip(int in 0u32..100_000, frac in "[0-9]{1,16}") {
        let lex = Lexicon::tigrinya();
        let input = format!("{}.{}", int, frac);
        let words = spell_words_with(input.as_str(), lex).unwrap();

        let point = words.iter().position(|w| w == lex.point()).unwrap();
        let tail = &words[point + 1..];
        prop_assert_eq!(tail.len(), frac.len());

        let rebuilt: String = tail.iter().filter_map(|w| digit_value(lex, w)).collect();
        prop_assert_eq!(rebuilt, frac);
    }
}
