use regex::Regex;
use std::sync::OnceLock;

use crate::language::Expect;
use crate::patterns::class_excluding;

use super::{ConfigurationError, Markers};

/// Why a recognizer declined the start of the remaining input. The matcher
/// turns this into a MatchingError carrying the position and snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoMatch,
    EmptyBody,
}

/// One compiled recognizer per structural token kind, built from a set of
/// Markers. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Recognizers {
    markers: Markers,
    separator: Regex,
    response_meta: Regex,
    request_headers: Regex,
    response_headers: Regex,
    final_boundary: Regex,
}

impl Recognizers {
    pub fn new(markers: &Markers) -> Result<Recognizers, ConfigurationError> {
        markers.validate()?;

        let crlf = regex::escape(&markers.line_ending);
        let non_crlf = class_excluding(&markers.line_ending);
        let http_version = r"HTTP/\d+\.\d+";

        // POST /post HTTP/1.1
        let request_line = format!("{}*{}{}", non_crlf, http_version, crlf);
        // HTTP/1.1 200 OK
        let status_line = format!("{}{}*{}", http_version, non_crlf, crlf);

        let header_block = |start_line: &str| {
            format!(
                "^{}({}+:{}+{})+{}",
                start_line, non_crlf, non_crlf, crlf, crlf
            )
        };

        Ok(Recognizers {
            separator: compile(&format!("^{}", regex::escape(&markers.separator)))?,
            response_meta: compile(r"^\n*((.*?):(.+)\n?)+\n*")?,
            request_headers: compile(&header_block(&request_line))?,
            response_headers: compile(&header_block(&status_line))?,
            final_boundary: compile(&format!("{}--[^-]+?--{}", crlf, crlf))?,
            markers: markers.clone(),
        })
    }

    /// Recognizers for the default markers, compiled once per process.
    pub fn standard() -> &'static Recognizers {
        static STANDARD: OnceLock<Recognizers> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Recognizers::new(&Markers::default()).unwrap_or_else(|e| panic!("{}", e))
        })
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Work out how many bytes at the start of `input` belong to a token of
    /// the given kind.
    pub fn recognize(&self, kind: Expect, input: &str) -> Result<usize, Rejection> {
        match kind {
            Expect::RequestHeaders => anchored(&self.request_headers, input),
            Expect::ResponseHeaders => anchored(&self.response_headers, input),
            Expect::ResponseMeta => anchored(&self.response_meta, input),
            Expect::Separator => anchored(&self.separator, input),
            Expect::Body => self.body(input),
        }
    }

    // A body's content is unpredictable, so rather than matching its shape
    // we look for where the next structural marker begins. At least one
    // character of content is required. If no marker is present at all the
    // rest of the input is taken.
    fn body(&self, input: &str) -> Result<usize, Rejection> {
        // ASCII-only case folding; `ſ` must not stand in for `s`
        let re = regex!(r"(?i-u)content-disposition:");
        if re.is_match(input) {
            // multipart; the closing boundary ends the body and is part of it
            if let Some(boundary) = self
                .final_boundary
                .find(input)
            {
                return Ok(boundary.end());
            }
        }

        let endings = [
            self.markers
                .separator
                .as_str(),
            self.markers
                .line_ending
                .as_str(),
        ];

        let end = endings
            .iter()
            .filter_map(|ending| input.find(ending))
            .min();

        match end {
            None => Ok(input.len()),
            Some(0) => Err(Rejection::EmptyBody),
            Some(end) => Ok(end),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigurationError> {
    Regex::new(pattern).map_err(|e| ConfigurationError::InvalidPattern(e.to_string()))
}

// Every pattern starts with `^`, so a match can only ever be at the start of
// the input; anything found further along is not this token.
fn anchored(re: &Regex, input: &str) -> Result<usize, Rejection> {
    match re.find(input) {
        Some(found) if found.start() == 0 => Ok(found.end()),
        _ => Err(Rejection::NoMatch),
    }
}
