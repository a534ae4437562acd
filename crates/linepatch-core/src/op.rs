//! Edit operations expressed in original-text line coordinates.

use serde::{Deserialize, Serialize};

/// A single line-oriented edit instruction.
///
/// Line numbers are 1-indexed and always reference the *original*,
/// unmodified text — never a partially patched one. Because every
/// operation resolves against the same fixed snapshot, the order of
/// operations in a list never affects the patched result (only the
/// relative order of inserts sharing an anchor line matters).
///
/// Operations are plain values: they carry no identity beyond their
/// fields and are consumed once by the patch engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Insert `content` as a new line immediately before original line
    /// `before_line`.
    ///
    /// `before_line` may be `line_count + 1`, meaning "append after the
    /// last line". `content` may be empty and may carry whitespace that
    /// is significant to the caller.
    Insert { before_line: usize, content: String },

    /// Delete the inclusive range `[start_line, end_line]` of original
    /// lines, or just `start_line` when `end_line` is `None`.
    Delete {
        start_line: usize,
        end_line: Option<usize>,
    },
}

impl EditOp {
    /// Insert `content` before original line `before_line`.
    pub fn insert(before_line: usize, content: impl Into<String>) -> Self {
        EditOp::Insert {
            before_line,
            content: content.into(),
        }
    }

    /// Delete a single original line.
    pub fn delete_line(start_line: usize) -> Self {
        EditOp::Delete {
            start_line,
            end_line: None,
        }
    }

    /// Delete the inclusive range `[start_line, end_line]`.
    pub fn delete_range(start_line: usize, end_line: usize) -> Self {
        EditOp::Delete {
            start_line,
            end_line: Some(end_line),
        }
    }
}
