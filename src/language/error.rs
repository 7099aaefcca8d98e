use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// A token name given on the command line (or anywhere else text is turned
/// into an Expect) that isn't one of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "empty token name in sequence")
        } else {
            write!(f, "unknown token kind '{}'", self.0)
        }
    }
}

impl std::error::Error for UnknownToken {}
