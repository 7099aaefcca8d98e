use crate::language::describe;
use crate::matching::MatchingError;

// Longest run of remaining input quoted in a diagnostic.
const PREVIEW_WIDTH: usize = 60;

/// Generate the problem summary and the longer explanation for a matching
/// error.
pub fn generate_error_message(error: &MatchingError) -> (String, String) {
    match error {
        MatchingError::NoMatch(_, token, snapshot) => (
            format!("No match for {}", token),
            format!(
                r#"
The next token was expected to be {} but the remaining output does not
begin with one. Remaining output:

    {}
                "#,
                token,
                preview(snapshot)
            )
            .trim_ascii()
            .to_string(),
        ),
        MatchingError::EmptyBody(_, snapshot) => (
            "Empty body".to_string(),
            format!(
                r#"
A body must contain at least one character before the next separator or
line ending, but one was found immediately. Remaining output:

    {}
                "#,
                preview(snapshot)
            )
            .trim_ascii()
            .to_string(),
        ),
        MatchingError::Unconsumed(_, tokens, snapshot) => (
            "Unmatched remaining output".to_string(),
            format!(
                r#"
Every token in {} was matched but output remains
afterwards. Unmatched output:

    {}
                "#,
                describe(tokens),
                preview(snapshot)
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}

/// Quote the start of some remaining input with control characters escaped
/// so that line endings are visible.
pub fn preview(snapshot: &str) -> String {
    let mut chars = snapshot.chars();
    let head: String = chars
        .by_ref()
        .take(PREVIEW_WIDTH)
        .collect();

    if chars
        .next()
        .is_some()
    {
        format!("{:?}…", head)
    } else {
        format!("{:?}", head)
    }
}
