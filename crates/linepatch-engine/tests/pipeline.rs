//! End-to-end tests for the parse-then-apply pipeline.
//!
//! These exercise the two engine halves the way a front end uses them:
//! raw generator output in, patched text out.

use linepatch_core::EditOp;
use linepatch_engine::{InstructionParser, PatchApplier};

fn run(original: &str, instructions: &str) -> String {
    let ops = InstructionParser::parse(instructions);
    PatchApplier::apply(original, &ops)
}

#[test]
fn test_pipeline_noisy_generator_reply() {
    let original = "def hello():\n    print('world')";
    // Typical reply: commentary around the instructions, uneven casing.
    let reply = "Sure! Here is the minimal set of operations:\n\
                 insert 2:     # A greeting\n\
                 DELETE 2\n\
                 INSERT 3:     print('world!')\n\
                 Let me know if you need anything else.";
    assert_eq!(
        run(original, reply),
        "def hello():\n    # A greeting\n    print('world!')"
    );
}

#[test]
fn test_pipeline_no_changes_reply_keeps_text() {
    let original = "line1\nline2";
    assert_eq!(run(original, "NO CHANGES"), original);
}

#[test]
fn test_pipeline_error_reply_keeps_text() {
    let original = "line1\nline2";
    assert_eq!(run(original, "ERROR: request to the generator timed out"), original);
}

#[test]
fn test_pipeline_range_delete_with_surrounding_inserts() {
    let original = "header\nold_a\nold_b\nold_c\nfooter";
    let reply = "INSERT 2: new_a\nINSERT 2: new_b\nDELETE 2-4";
    assert_eq!(run(original, reply), "header\nnew_a\nnew_b\nfooter");
}

#[test]
fn test_pipeline_instruction_order_does_not_matter() {
    let original = "a\nb\nc\nd";
    let forward = "DELETE 1\nINSERT 4: x";
    let backward = "INSERT 4: x\nDELETE 1";
    assert_eq!(run(original, forward), run(original, backward));
}

#[test]
fn test_pipeline_parsed_ops_match_instruction_lines() {
    let ops = InstructionParser::parse("INSERT 1: top\nDELETE 3-5\nDELETE 9");
    assert_eq!(
        ops,
        vec![
            EditOp::insert(1, "top"),
            EditOp::delete_range(3, 5),
            EditOp::delete_line(9),
        ]
    );
}

#[test]
fn test_pipeline_rebuild_from_empty_original() {
    let reply = "INSERT 1: #!/usr/bin/env bash\nINSERT 1: echo done";
    assert_eq!(run("", reply), "#!/usr/bin/env bash\necho done");
}
