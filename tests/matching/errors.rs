#[cfg(test)]
mod syntax {
    use transcript::language::*;
    use transcript::matching::{expect_tokens, MatchingError};

    /// Helper function to check that matching fails with the expected kind
    /// of error.
    fn expect_error(tokens: &[Expect], content: &str, expected: MatchingError) {
        match expect_tokens(tokens, content) {
            Ok(_) => panic!(
                "Expected matching to fail, but it succeeded for input: {:?}",
                content
            ),
            Err(error) => {
                if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input {:?}",
                        expected, error, content
                    );
                }
            }
        }
    }

    #[test]
    fn start_line_without_headers() {
        expect_error(
            &[Expect::RequestHeaders],
            "GET / HTTP/1.1\r\n",
            MatchingError::NoMatch(0, Expect::RequestHeaders, ""),
        );
        expect_error(
            &[Expect::RequestHeaders],
            "GET / HTTP/1.1\r\n\r\n",
            MatchingError::NoMatch(0, Expect::RequestHeaders, ""),
        );
    }

    #[test]
    fn missing_version() {
        expect_error(
            &[Expect::RequestHeaders],
            "GET /\r\nHost: x\r\n\r\n",
            MatchingError::NoMatch(0, Expect::RequestHeaders, ""),
        );
        expect_error(
            &[Expect::ResponseHeaders],
            "HTTP/1 200 OK\r\nServer: x\r\n\r\n",
            MatchingError::NoMatch(0, Expect::ResponseHeaders, ""),
        );
    }

    #[test]
    fn header_without_colon() {
        expect_error(
            &[Expect::ResponseHeaders],
            "HTTP/1.1 200 OK\r\nServer\r\n\r\n",
            MatchingError::NoMatch(0, Expect::ResponseHeaders, ""),
        );
    }

    #[test]
    fn separator_not_at_start() {
        expect_error(
            &[Expect::Separator],
            " \n\n",
            MatchingError::NoMatch(0, Expect::Separator, ""),
        );
    }

    #[test]
    fn empty_body_before_line_ending() {
        expect_error(
            &[Expect::Body],
            "\r\nafter",
            MatchingError::EmptyBody(0, ""),
        );
    }

    #[test]
    fn empty_body_mid_sequence() {
        let text = "GET / HTTP/1.1\r\nHost: x\r\n\r\n\n\n";
        assert_eq!(
            expect_tokens(TERMINAL_REQUEST, text),
            Err(MatchingError::EmptyBody(text.len() - 2, "\n\n"))
        );
    }

    #[test]
    fn trailing_output() {
        expect_error(
            TERMINAL_BODY,
            "done\n\nmore",
            MatchingError::Unconsumed(0, vec![], ""),
        );
    }

    #[test]
    fn leftover_carries_whole_sequence() {
        let result = expect_tokens(TERMINAL_BODY, "done\n\nmore");
        assert_eq!(
            result,
            Err(MatchingError::Unconsumed(
                6,
                TERMINAL_BODY.to_vec(),
                "more"
            ))
        );
    }

    #[test]
    fn failure_offset_points_into_original() {
        let text = "GET / HTTP/1.1\r\nHost: x\r\n\r\nbody\n\nnot a response";
        let error = expect_tokens(
            &[
                Expect::RequestHeaders,
                Expect::Body,
                Expect::Separator,
                Expect::ResponseHeaders,
            ],
            text,
        )
        .unwrap_err();

        assert_eq!(error.snapshot(), "not a response");
        assert_eq!(&text[error.offset()..], error.snapshot());
    }
}
