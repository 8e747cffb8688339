use super::{Lexicon, LexiconTable};

const DIGITS: [&str; 11] = ["ዜሮ", "ሓደ", "ክልተ", "ሰለስተ", "ኣርባዕተ", "ሓሙሽስተ", "ሽድስተ", "ሸዋዕተ", "ሾሞንተ", "ትሽዓተ", "ዓሰርተ"];

/// Ascending tier table: base digits, tens, then the power tiers.
const TIERS: &[(u64, &str)] = &[
    (1, "ሓደ"),
    (2, "ክልተ"),
    (3, "ሰለስተ"),
    (4, "ኣርባዕተ"),
    (5, "ሓሙሽስተ"),
    (6, "ሽድስተ"),
    (7, "ሸዋዕተ"),
    (8, "ሾሞንተ"),
    (9, "ትሽዓተ"),
    (10, "ዓሰርተ"),
    (20, "ዒስራ"),
    (30, "ሰላሳ"),
    (40, "ኣርብዓ"),
    (50, "ሓምሳ"),
    (60, "ስሳ"),
    (70, "ሰብዓ"),
    (80, "ሰማንያ"),
    (90, "ቴስዓ"),
    (100, "ሚእቲ"),
    (1_000, "ሽሕ"),
    (1_000_000, "ሚሊዮን"),
    (1_000_000_000, "ቢሊዮን"),
];

pub(super) fn get() -> Lexicon {
    Lexicon::new(LexiconTable {
        name: "Tigrinya",
        digits: DIGITS,
        tiers: TIERS,
        connective: "ን",
        negative: "ኣሉታ",
        point: "ነጥቢ",
    })
    .expect("built-in Tigrinya table is well-formed")
}
