/// Compile a fixed pattern once and hand back the same `Regex` on every
/// subsequent call. Only for patterns known at compile time; a bad pattern
/// here is a programming error.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Build a character class matching any single character that is NOT one
/// of the characters in `text`. Each member is written as a `\x{..}` escape
/// so that arbitrary marker characters can't alter the class syntax.
pub(crate) fn class_excluding(text: &str) -> String {
    let mut class = String::from("[^");
    for c in text.chars() {
        class.push_str(&format!("\\x{{{:X}}}", c as u32));
    }
    class.push(']');
    class
}
