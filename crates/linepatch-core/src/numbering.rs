//! Line-numbering helpers for rendering text into prompts.
//!
//! The upstream instruction generator receives both texts with 1-indexed
//! line-number prefixes (`"<n>: <line content>"`) so that the operations
//! it emits can reference original line coordinates directly.

/// Prefix every line of `text` with its 1-indexed line number.
///
/// Lines are rejoined with `\n`; an empty input yields an empty string.
pub fn number_lines(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// List form of [`number_lines`], for callers that already hold split lines.
pub fn number_lines_vec(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}: {}", i + 1, line))
        .collect()
}
