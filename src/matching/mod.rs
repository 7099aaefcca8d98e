//! matcher for captured request/response transcripts

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{describe, Expect, LoadingError};

mod markers;
pub mod matcher;
pub mod recognizers;

pub use markers::*;
pub use matcher::{expect_tokens, expect_tokens_with, Matcher, MatchingError};
pub use recognizers::{Recognizers, Rejection};

/// Read a transcript and return an owned String, so that errors produced by
/// check() below can borrow from it. A filename of `-` reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Match text against a token sequence, reporting what happened.
pub fn check<'r, 'i>(
    recognizers: &'r Recognizers,
    tokens: &[Expect],
    content: &'i str,
) -> Result<(), MatchingError<'i>> {
    debug!(
        "Matching {} token{} against {} byte{}",
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" },
        content.len(),
        if content.len() == 1 { "" } else { "s" }
    );

    match expect_tokens_with(recognizers, tokens, content) {
        Ok(()) => {
            debug!("Matched {}", describe(tokens));
            Ok(())
        }
        Err(error) => {
            debug!(offset = error.offset(), "{}", error.message());
            Err(error)
        }
    }
}
