// crates/model-matchers/src/text.rs
// ============================================================================
// Module: Message Text Helpers
// Description: Quoting and list joining for human-readable matcher output.
// Purpose: Keep every failure message rendered with the same conventions.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Failure messages quote probe values and error strings, and join attribute
//! lists as English sentences (`a`, `a and b`, `a, b, and c`).

/// Wraps text in double quotes, escaping embedded quotes and control characters.
pub(crate) fn quoted(text: &str) -> String {
    format!("\"{}\"", text.escape_debug())
}

/// Joins items as an English sentence.
pub(crate) fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
