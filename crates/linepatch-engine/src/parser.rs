//! Parser for INSERT/DELETE edit instructions embedded in generator output.
//!
//! The upstream generator is asked to reply with one instruction per line:
//!
//! ```text
//! INSERT 2:     indented_line()
//! DELETE 5
//! DELETE 7-9
//! ```
//!
//! Real generator output carries noise — stray commentary, blank lines,
//! uneven casing and spacing — so unrecognized lines are skipped silently
//! rather than rejected. The parser never corrupts code content: after the
//! colon of an `INSERT`, at most one delimiter space is consumed and the
//! rest of the line (indentation included) is kept verbatim.

use linepatch_core::EditOp;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `INSERT <n>: <content>` — one space after the colon is the delimiter,
/// everything beyond it belongs to the content.
static INSERT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*INSERT\s+(\d+)\s*:\s?(.*)$").expect("Invalid insert regex")
});

/// `DELETE <n>` — single line.
static DELETE_SINGLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*DELETE\s+(\d+)\s*$").expect("Invalid delete regex"));

/// `DELETE <start>-<end>` — inclusive range.
static DELETE_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*DELETE\s+(\d+)\s*-\s*(\d+)\s*$").expect("Invalid delete range regex")
});

/// `NO CHANGES` sentinel, whitespace between the words collapsible.
static NO_CHANGES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^NO\s+CHANGES$").expect("Invalid no-changes regex"));

/// Parser for edit instruction blocks.
pub struct InstructionParser;

impl InstructionParser {
    /// Convert an instruction block into an ordered list of operations.
    ///
    /// Returns an empty list for the two sentinel inputs — an empty (or
    /// whitespace-only) block and an `ERROR:`-prefixed block — and for the
    /// literal `NO CHANGES` reply. Callers that need to distinguish "no
    /// changes" from "upstream failed" must inspect the raw text before
    /// calling; the parser maps both to "nothing to apply".
    ///
    /// Operations appear in the result in source-line order. The function
    /// is pure: equal inputs always produce structurally equal output.
    pub fn parse(input: &str) -> Vec<EditOp> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.to_uppercase().starts_with("ERROR:") {
            return Vec::new();
        }
        if NO_CHANGES_REGEX.is_match(trimmed) {
            return Vec::new();
        }

        let mut ops = Vec::new();
        // Walk raw lines so content whitespace is never trimmed away.
        for (idx, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(line) {
                Some(op) => ops.push(op),
                None => {
                    debug!(line = idx + 1, "skipping unrecognized instruction line");
                }
            }
        }
        ops
    }

    /// Parse a single non-blank line, or `None` if it matches no grammar.
    ///
    /// The range form is tried before the single form: `DELETE 7-9` must
    /// not be mis-read as a single delete with trailing garbage.
    fn parse_line(line: &str) -> Option<EditOp> {
        if let Some(caps) = DELETE_RANGE_REGEX.captures(line) {
            let start: usize = caps[1].parse().ok()?;
            let end: usize = caps[2].parse().ok()?;
            // An inverted range like "15-10" is unparseable, not an error.
            if start > end {
                return None;
            }
            return Some(EditOp::delete_range(start, end));
        }

        if let Some(caps) = DELETE_SINGLE_REGEX.captures(line) {
            return Some(EditOp::delete_line(caps[1].parse().ok()?));
        }

        if let Some(caps) = INSERT_REGEX.captures(line) {
            let before_line: usize = caps[1].parse().ok()?;
            return Some(EditOp::insert(before_line, &caps[2]));
        }

        None
    }
}
