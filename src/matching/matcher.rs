use std::fmt;

use crate::language::{describe, Expect};

use super::recognizers::{Recognizers, Rejection};

/// Check that `content` consists of exactly the given tokens, in order,
/// using the default markers.
pub fn expect_tokens<'i>(tokens: &[Expect], content: &'i str) -> Result<(), MatchingError<'i>> {
    expect_tokens_with(Recognizers::standard(), tokens, content)
}

/// As expect_tokens(), but with recognizers built for a different set of
/// markers.
pub fn expect_tokens_with<'r, 'i>(
    recognizers: &'r Recognizers,
    tokens: &[Expect],
    content: &'i str,
) -> Result<(), MatchingError<'i>> {
    let mut input = Matcher::new(recognizers);
    input.initialize(content);
    input.match_sequence(tokens)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchingError<'i> {
    NoMatch(usize, Expect, &'i str),
    EmptyBody(usize, &'i str),
    Unconsumed(usize, Vec<Expect>, &'i str),
}

impl<'i> MatchingError<'i> {
    /// Byte offset into the original text where matching stopped.
    pub fn offset(&self) -> usize {
        match self {
            MatchingError::NoMatch(offset, _, _) => *offset,
            MatchingError::EmptyBody(offset, _) => *offset,
            MatchingError::Unconsumed(offset, _, _) => *offset,
        }
    }

    /// The remaining input at the point of failure.
    pub fn snapshot(&self) -> &'i str {
        match self {
            MatchingError::NoMatch(_, _, snapshot) => *snapshot,
            MatchingError::EmptyBody(_, snapshot) => *snapshot,
            MatchingError::Unconsumed(_, _, snapshot) => *snapshot,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MatchingError::NoMatch(_, token, _) => format!("no match for {}", token),
            MatchingError::EmptyBody(_, _) => "empty body".to_string(),
            MatchingError::Unconsumed(_, _, _) => "unmatched remaining output".to_string(),
        }
    }
}

impl<'i> fmt::Display for MatchingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchingError::NoMatch(_, token, snapshot) => {
                write!(f, "no match for {} in {:?}", token, snapshot)
            }
            MatchingError::EmptyBody(_, snapshot) => write!(f, "empty body: {:?}", snapshot),
            MatchingError::Unconsumed(_, tokens, snapshot) => write!(
                f,
                "unmatched remaining output for {} in {:?}",
                describe(tokens),
                snapshot
            ),
        }
    }
}

impl<'i> std::error::Error for MatchingError<'i> {}

/// Walks forward through a transcript one expected token at a time. There is
/// no backtracking: once a token has consumed some input that decision
/// stands, and the first failure ends the run.
#[derive(Debug)]
pub struct Matcher<'r, 'i> {
    recognizers: &'r Recognizers,
    original: &'i str,
    source: &'i str,
    offset: usize,
}

impl<'r, 'i> Matcher<'r, 'i> {
    pub fn new(recognizers: &'r Recognizers) -> Matcher<'r, 'i> {
        Matcher {
            recognizers,
            original: "",
            source: "",
            offset: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    /// Everything matched so far.
    pub fn consumed(&self) -> &'i str {
        &self.original[..self.offset]
    }

    /// Everything not yet matched.
    pub fn remaining(&self) -> &'i str {
        self.source
    }

    pub fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    pub fn match_sequence(&mut self, tokens: &[Expect]) -> Result<(), MatchingError<'i>> {
        for &token in tokens {
            self.expect_token(token)?;
        }

        if !self.is_finished() {
            return Err(MatchingError::Unconsumed(
                self.offset,
                tokens.to_vec(),
                self.source,
            ));
        }

        Ok(())
    }

    /// Consume a single token of the given kind from the front of the
    /// remaining input.
    pub fn expect_token(&mut self, token: Expect) -> Result<(), MatchingError<'i>> {
        match self
            .recognizers
            .recognize(token, self.source)
        {
            Ok(width) => {
                self.advance(width);
                Ok(())
            }
            Err(Rejection::NoMatch) => Err(MatchingError::NoMatch(self.offset, token, self.source)),
            Err(Rejection::EmptyBody) => Err(MatchingError::EmptyBody(self.offset, self.source)),
        }
    }
}
