//! Property-based tests for the matcher
//!
//! Transcripts are assembled from generated pieces whose boundaries are
//! known, so the expected outcome of matching is known too.

use proptest::prelude::*;
use transcript::language::*;
use transcript::matching::{expect_tokens, MatchingError, Recognizers, Rejection};

/// Generate request start lines, `METHOD /path HTTP/x.y`
fn request_line_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof!["GET", "POST", "PUT", "DELETE"],
        "[a-z0-9/]{0,12}",
        0u8..4,
        0u8..10,
    )
        .prop_map(|(method, path, major, minor)| {
            format!("{} /{} HTTP/{}.{}\r\n", method, path, major, minor)
        })
}

/// Generate status lines, `HTTP/x.y CODE REASON`
fn status_line_strategy() -> impl Strategy<Value = String> {
    (0u8..4, 0u8..10, 100u16..600, "[A-Za-z ]{0,12}").prop_map(|(major, minor, code, reason)| {
        format!("HTTP/{}.{} {} {}\r\n", major, minor, code, reason)
    })
}

/// Generate between one and five `Name: value` header lines
fn headers_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(("[A-Z][A-Za-z-]{0,15}", "[a-zA-Z0-9 ./;=]{1,20}"), 1..5).prop_map(
        |headers| {
            headers
                .into_iter()
                .map(|(name, value)| format!("{}: {}\r\n", name, value))
                .collect::<String>()
        },
    )
}

/// Generate body text free of separators, line endings and colons
fn body_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 {}\\[\\],.\"]{1,40}"
}

proptest! {
    #[test]
    fn assembled_request_matches(
        start in request_line_strategy(),
        headers in headers_strategy(),
        body in body_strategy(),
    ) {
        let text = format!("{}{}\r\n{}\n\n", start, headers, body);
        prop_assert_eq!(expect_tokens(TERMINAL_REQUEST, &text), Ok(()));
    }

    #[test]
    fn assembled_response_matches(
        start in status_line_strategy(),
        headers in headers_strategy(),
        body in body_strategy(),
    ) {
        let text = format!("{}{}\r\n{}\n\n", start, headers, body);
        prop_assert_eq!(expect_tokens(TERMINAL_RESPONSE, &text), Ok(()));
    }

    #[test]
    fn extra_output_is_unconsumed(
        start in request_line_strategy(),
        headers in headers_strategy(),
        body in body_strategy(),
        extra in "[a-z]{1,10}",
    ) {
        let text = format!("{}{}\r\n{}\n\n{}", start, headers, body, extra);
        let result = expect_tokens(TERMINAL_REQUEST, &text);
        prop_assert_eq!(
            result,
            Err(MatchingError::Unconsumed(
                text.len() - extra.len(),
                TERMINAL_REQUEST.to_vec(),
                extra.as_str()
            ))
        );
    }

    #[test]
    fn body_stops_at_a_marker(input in "[a-z \r\n]{0,30}") {
        match Recognizers::standard().recognize(Expect::Body, &input) {
            Ok(width) => {
                let rest = &input[width..];
                prop_assert!(
                    rest.is_empty() || rest.starts_with("\n\n") || rest.starts_with("\r\n"),
                    "body left {:?}", rest
                );
                prop_assert!(width > 0 || input.is_empty());
            }
            Err(rejection) => {
                prop_assert_eq!(rejection, Rejection::EmptyBody);
                prop_assert!(input.starts_with("\n\n") || input.starts_with("\r\n"));
            }
        }
    }
}
