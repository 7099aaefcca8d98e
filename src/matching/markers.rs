use std::fmt;

/// What the output writer prints between consecutive messages.
pub const MESSAGE_SEPARATOR: &str = "\n\n";

/// Line ending used in HTTP start and header lines.
pub const CRLF: &str = "\r\n";

/// The literals owned by whatever wrote the transcript. Recognizers are
/// compiled from these rather than from fixed strings so that a change in
/// the writer doesn't require a change here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub separator: String,
    pub line_ending: String,
}

impl Markers {
    pub fn new(separator: impl Into<String>, line_ending: impl Into<String>) -> Markers {
        Markers {
            separator: separator.into(),
            line_ending: line_ending.into(),
        }
    }

    /// Both markers are searched for inside bodies, so neither may be empty.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self
            .separator
            .is_empty()
        {
            return Err(ConfigurationError::EmptySeparator);
        }
        if self
            .line_ending
            .is_empty()
        {
            return Err(ConfigurationError::EmptyLineEnding);
        }
        Ok(())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::new(MESSAGE_SEPARATOR, CRLF)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    EmptySeparator,
    EmptyLineEnding,
    InvalidPattern(String),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptySeparator => write!(f, "message separator must not be empty"),
            ConfigurationError::EmptyLineEnding => write!(f, "line ending must not be empty"),
            ConfigurationError::InvalidPattern(reason) => {
                write!(f, "unable to build recognizer: {}", reason)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Interpret the backslash escapes `\n`, `\r`, `\t` and `\\` so that
/// markers can be typed on a command line. Anything else after a backslash
/// is kept as written.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
