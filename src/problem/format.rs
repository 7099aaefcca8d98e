use owo_colors::OwoColorize;
use std::path::Path;

use super::messages::generate_error_message;
use crate::language::LoadingError;
use crate::matching::MatchingError;

/// Where a byte offset falls in a transcript. All fields are zero-origin;
/// for display to humans you'll have to add 1 to line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    /// Counted in characters, not bytes.
    pub column: usize,
    /// Byte offset at which the line begins.
    pub start: usize,
}

pub fn calculate_position(content: &str, offset: usize) -> Position {
    let before = &content[..offset];
    let start = before
        .rfind('\n')
        .map_or(0, |i| i + 1);

    Position {
        line: before
            .bytes()
            .filter(|&b| b == b'\n')
            .count(),
        column: before[start..]
            .chars()
            .count(),
        start,
    }
}

/// Format a matching error with full details including the offending line
/// of the transcript.
pub fn full_matching_error<'i>(error: &MatchingError, filename: &'i Path, source: &'i str) -> String {
    let (problem, details) = generate_error_message(error);
    let position = calculate_position(source, error.offset());

    let code = source
        .lines()
        .nth(position.line)
        .unwrap_or("");

    // The line is shown with control characters and quotes escaped, so the
    // caret goes under the escaped width of everything before the offset.
    // An offset sitting on a stripped line ending lands just past the end.
    let within = (error.offset() - position.start).min(code.len());
    let caret = code[..within]
        .escape_debug()
        .to_string()
        .chars()
        .count()
        + 1;

    let line = position.line + 1;
    let column = position.column + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>caret$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code.escape_debug(),
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a matching error with concise single-line output
pub fn concise_matching_error<'i>(
    error: &MatchingError,
    filename: &'i Path,
    source: &'i str,
) -> String {
    let (problem, _) = generate_error_message(error);
    let position = calculate_position(source, error.offset());

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        position.line + 1,
        position.column + 1,
        problem.bold(),
    )
}

/// Single line report of a transcript that couldn't be read.
pub fn concise_loading_error(error: &LoadingError) -> String {
    let mut result = format!(
        "{}: {} {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        result.push_str(&format!(" ({})", error.details));
    }
    result
}
