//! Prompt rendering for the upstream instruction generator.
//!
//! The network call itself lives outside this workspace; callers render
//! the prompt here, send it through whatever transport they use, and hand
//! the reply to `linepatch-engine`'s parser. A transport failure must be
//! converted into an `ERROR: <description>` string before parsing so the
//! single string-prefix check at the boundary stays sufficient.

use crate::numbering::number_lines;

/// System prompt for the upstream chat model.
pub const SYSTEM_PROMPT: &str = "You are a precise code-transformation instruction generator. \
     Reply ONLY with the requested list of operations (or 'NO CHANGES').";

/// Build the user prompt asking the generator for the minimal set of
/// INSERT/DELETE operations transforming `original` into `suggestion`.
///
/// Both texts are rendered with 1-indexed line-number prefixes so the
/// emitted operations can reference original coordinates directly.
pub fn build_instruction_prompt(original: &str, suggestion: &str) -> String {
    format!(
        r#"You are an expert *diff engine*.

**Original Code** (1-indexed):
```text
{original}
```

**AI-Generated Suggestion** (1-indexed):
```text
{suggestion}
```

Produce the *minimal* set of operations to transform the Original Code
into the AI-Generated Suggestion, using ONLY:

1. Insert lines *from the suggestion* **before** a line in the original:
   `INSERT <orig_line_before>: <exact_code_content>`

2. Delete one line:
   `DELETE <orig_line>`

3. Delete a contiguous range:
   `DELETE <start_orig_line>-<end_orig_line>`

If nothing needs changing, reply exactly:
NO CHANGES"#,
        original = number_lines(original),
        suggestion = number_lines(suggestion),
    )
}
