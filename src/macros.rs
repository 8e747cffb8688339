/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Patterns are literals checked by the test suite, so a failed compile is a
/// programming error. Crate-local: pulled into scope by `#[macro_use]`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("static regex literal compiles"));
        &*RE
    }};
}
