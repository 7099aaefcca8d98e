use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::UnknownToken;

/// The kinds of segment that make up a transcript of request/response
/// exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expect {
    /// Request start line (`GET / HTTP/1.1`), header lines, blank line.
    RequestHeaders,
    /// Status line (`HTTP/1.1 200 OK`), header lines, blank line.
    ResponseHeaders,
    /// Loose `key: value` lines such as elapsed time.
    ResponseMeta,
    /// The literal printed between consecutive messages.
    Separator,
    /// Free-form message content.
    Body,
}

impl Expect {
    pub const ALL: [Expect; 5] = [
        Expect::RequestHeaders,
        Expect::ResponseHeaders,
        Expect::ResponseMeta,
        Expect::Separator,
        Expect::Body,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Expect::RequestHeaders => "request-headers",
            Expect::ResponseHeaders => "response-headers",
            Expect::ResponseMeta => "response-meta",
            Expect::Separator => "separator",
            Expect::Body => "body",
        }
    }
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Expect {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .trim()
            .to_ascii_lowercase()
            .replace('_', "-");

        Expect::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// Parse a comma separated list of token names, ie
/// `request-headers,body,separator`.
pub fn parse_sequence(list: &str) -> Result<Vec<Expect>, UnknownToken> {
    list.split(',')
        .map(|item| {
            if item
                .trim()
                .is_empty()
            {
                Err(UnknownToken(String::new()))
            } else {
                item.parse()
            }
        })
        .collect()
}

/// Render a sequence for diagnostics, `[request-headers, body]`.
pub fn describe(tokens: &[Expect]) -> String {
    let names: Vec<&str> = tokens
        .iter()
        .map(Expect::name)
        .collect();
    format!("[{}]", names.join(", "))
}
