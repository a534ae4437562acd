//! Apply parsed edit operations against an original text snapshot.
//!
//! Every operation references 1-indexed line numbers in the original text,
//! so the applier resolves all of them against one fixed snapshot instead
//! of mutating a line buffer operation by operation. That single-pass
//! structure is what makes the input order of operations irrelevant.

use linepatch_core::EditOp;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Applier for line-oriented edit operations.
pub struct PatchApplier;

impl PatchApplier {
    /// Apply `ops` to `original`, returning the patched text.
    ///
    /// The result is the surviving and inserted lines joined with `\n`;
    /// no trailing newline is added. Out-of-range coordinates are dropped
    /// silently: a delete outside `[1, line_count]` is a no-op for those
    /// lines, an insert anchored outside `[1, line_count + 1]` is
    /// discarded. The applier never fails — it is a mechanical,
    /// coordinate-based patcher, not a correctness checker.
    pub fn apply(original: &str, ops: &[EditOp]) -> String {
        let lines: Vec<&str> = original.lines().collect();
        let line_count = lines.len();

        // Pass 1: expand deletes into a set of original line numbers.
        // Overlapping and duplicate ranges collapse here, which makes
        // repeated deletion of the same line idempotent.
        let mut deleted: HashSet<usize> = HashSet::new();
        for op in ops {
            if let EditOp::Delete {
                start_line,
                end_line,
            } = op
            {
                let lo = (*start_line).max(1);
                let hi = (*end_line).unwrap_or(*start_line).min(line_count);
                for n in lo..=hi {
                    deleted.insert(n);
                }
            }
        }

        // Pass 2: group inserts by anchor line, preserving input order
        // within each anchor.
        let mut inserts: HashMap<usize, Vec<&str>> = HashMap::new();
        for op in ops {
            if let EditOp::Insert {
                before_line,
                content,
            } = op
            {
                if !(1..=line_count + 1).contains(before_line) {
                    debug!(before_line, line_count, "discarding out-of-range insert");
                    continue;
                }
                inserts
                    .entry(*before_line)
                    .or_default()
                    .push(content.as_str());
            }
        }

        // Pass 3: rebuild. Inserts anchored at a line are emitted before
        // that line regardless of whether the line itself is deleted.
        let mut patched: Vec<&str> = Vec::with_capacity(line_count + ops.len());
        for n in 1..=line_count {
            if let Some(pending) = inserts.get(&n) {
                patched.extend(pending);
            }
            if !deleted.contains(&n) {
                patched.push(lines[n - 1]);
            }
        }
        // Inserts anchored one past the last line append after everything.
        if let Some(pending) = inserts.get(&(line_count + 1)) {
            patched.extend(pending);
        }

        patched.join("\n")
    }
}
