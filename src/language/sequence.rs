//! Standard combinations of tokens. These assume a body is present.

use super::Expect;

pub const RAW_REQUEST: &[Expect] = &[Expect::RequestHeaders, Expect::Body];

pub const RAW_RESPONSE: &[Expect] = &[Expect::ResponseHeaders, Expect::Body];

pub const RAW_EXCHANGE: &[Expect] = &[
    Expect::RequestHeaders,
    Expect::Body,
    Expect::Separator,
    Expect::ResponseHeaders,
    Expect::Body,
];

pub const RAW_BODY: &[Expect] = &[Expect::Body];

pub const TERMINAL_REQUEST: &[Expect] = &[Expect::RequestHeaders, Expect::Body, Expect::Separator];

pub const TERMINAL_RESPONSE: &[Expect] =
    &[Expect::ResponseHeaders, Expect::Body, Expect::Separator];

pub const TERMINAL_EXCHANGE: &[Expect] = &[
    Expect::RequestHeaders,
    Expect::Body,
    Expect::Separator,
    Expect::ResponseHeaders,
    Expect::Body,
    Expect::Separator,
];

pub const TERMINAL_BODY: &[Expect] = &[Expect::Body, Expect::Separator];

pub const HEADERS_EXCHANGE: &[Expect] = &[Expect::RequestHeaders, Expect::ResponseHeaders];

/// Every predefined sequence by name, for listing.
pub const SEQUENCES: &[(&str, &[Expect])] = &[
    ("raw-request", RAW_REQUEST),
    ("raw-response", RAW_RESPONSE),
    ("raw-exchange", RAW_EXCHANGE),
    ("raw-body", RAW_BODY),
    ("terminal-request", TERMINAL_REQUEST),
    ("terminal-response", TERMINAL_RESPONSE),
    ("terminal-exchange", TERMINAL_EXCHANGE),
    ("terminal-body", TERMINAL_BODY),
    ("headers-exchange", HEADERS_EXCHANGE),
];

/// Look up a predefined sequence by its listed name.
pub fn lookup(name: &str) -> Option<&'static [Expect]> {
    SEQUENCES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, tokens)| *tokens)
}

/// The same sequence `n` times over, for "N exchanges" style expectations.
pub fn repeat(tokens: &[Expect], n: usize) -> Vec<Expect> {
    tokens.repeat(n)
}
