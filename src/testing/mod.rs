//! Assertions for test suites that capture program output and want to check
//! its overall shape rather than its exact bytes.
//!
//! ```ignore
//! let out = "GET / HTTP/1.1\r\nAAA:BBB\r\n\r\nCCC\n\n";
//! assert_output_matches(out, &[Expect::RequestHeaders, Expect::Body, Expect::Separator]);
//! ```

use std::borrow::Cow;

use crate::language::{describe, Expect};
use crate::matching::expect_tokens;

/// Panic unless `output` is exactly the given sequence of tokens.
pub fn assert_output_matches(output: &str, tokens: &[Expect]) {
    if let Err(error) = expect_tokens(tokens, output) {
        panic!("{}", error);
    }
}

/// Panic if `output` is exactly the given sequence of tokens.
pub fn assert_output_does_not_match(output: &str, tokens: &[Expect]) {
    if expect_tokens(tokens, output).is_ok() {
        panic!(
            "expected output not to match {} but it did: {:?}",
            describe(tokens),
            output
        );
    }
}

/// As assert_output_matches(), for output that may carry terminal colour.
pub fn assert_colored_output_matches(output: &str, tokens: &[Expect]) {
    let plain = strip_ansi(output);
    assert_output_matches(&plain, tokens);
}

/// Remove ANSI control sequences (colours, cursor movement) from text.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let re = regex!(r"\x1b\[[0-?]*[ -/]*[@-~]");
    re.replace_all(text, "")
}
