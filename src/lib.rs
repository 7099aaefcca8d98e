//! Match captured HTTP request/response transcripts against an expected
//! sequence of structural tokens.

#[macro_use]
mod patterns;

pub mod language;
pub mod matching;
pub mod problem;
pub mod testing;
