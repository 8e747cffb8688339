use numspell::{Expansion, Lexicon, SpellResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &SpellResultVerbose, lexicon: &Lexicon, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Spelling: \"{}\" ({})", details.input, lexicon.name()), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Decomposition ━━━", ansi::GRAY));
    if details.expansions.is_empty() {
        println!("{}", palette.dim("  No expansions (zero or a single tier word)"));
    } else {
        for (idx, step) in details.expansions.iter().enumerate() {
            println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_expansion(step, lexicon, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Sanitizer ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("raw:  "), details.raw_integer.join(" "));
    println!("  {} {}", palette.dim("clean:"), palette.paint(details.integer.join(" "), ansi::GREEN));
    let removed = if details.removed > 0 {
        palette.paint(format!("✓ removed {} unit word(s)", details.removed), ansi::YELLOW)
    } else {
        palette.dim("✗ nothing removed")
    };
    println!("  {}", removed);

    if !details.fraction.is_empty() {
        println!("\n{}", palette.paint("━━━ Fraction ━━━", ansi::GRAY));
        println!("  {}", palette.paint(details.fraction.join(" "), ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&res.text, ansi::GREEN)));
    println!("  {}", palette.dim(format!("{} words", res.words.len())));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Integer: {}  │  Fraction: {}",
        palette.paint(format!("{:?}", res.elapsed), ansi::GREEN),
        palette.paint(format!("{:?}", details.integer_time), ansi::CYAN),
        palette.dim(format!("{:?}", details.fraction_time)),
    );
    println!();
}

fn fmt_expansion(step: &Expansion, lexicon: &Lexicon, palette: &ansi::Palette) -> String {
    let base_word = lexicon.tier_word(step.base).unwrap_or("?");
    format!(
        "{} {} {} {} {}",
        palette.paint(step.magnitude.to_string(), ansi::YELLOW),
        palette.dim("="),
        palette.paint(format!("{} × {}", step.quotient, step.base), ansi::BLUE),
        palette.dim(format!("({base_word})")),
        if step.remainder > 0 { format!("+ {}", step.remainder) } else { String::new() },
    )
}
