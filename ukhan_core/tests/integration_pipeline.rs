//! Integration tests for the full cleaning pipeline and the merge path.

use ukhan_core::{Pipeline, Record, merge, normalized_key};

#[test]
fn end_to_end_two_riddles_from_noisy_page() {
    let input = "--- Page 1 ---\nJUNK\nक. यो के हो ? जवाफ हो फलामको मुढा। ख. यो सेतो के हो ? दुध।";

    let outcome = Pipeline::with_defaults().run(input);

    assert_eq!(outcome.stats.items, 2);
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.warnings.is_empty());

    assert_eq!(outcome.records[0].riddle, "यो के हो ?");
    assert_eq!(outcome.records[0].answer, "जवाफ हो फलामको मुढा।");
    assert_eq!(outcome.records[0].id, 1);

    assert_eq!(outcome.records[1].riddle, "यो सेतो के हो ?");
    assert_eq!(outcome.records[1].answer, "दुध।");
    assert_eq!(outcome.records[1].id, 2);
}

#[test]
fn every_output_riddle_keeps_the_interrogative_phrase() {
    let input = "क. यो के हो ? दुध। ख. आकाशमा के हो ? तारा।\nग. शीर्षक मात्र";
    let outcome = Pipeline::with_defaults().run(input);
    assert!(!outcome.records.is_empty());
    for record in &outcome.records {
        assert!(record.riddle.contains("के हो"), "riddle {:?}", record.riddle);
    }
}

#[test]
fn duplicate_keys_never_survive_a_run() {
    let input = "क. यो के हो ? दुध। ख. यो के हो ? दही। ग. यो  के  हो ? घिउ।";
    let outcome = Pipeline::with_defaults().run(input);
    assert_eq!(outcome.records.len(), 1);
    let keys: Vec<String> = outcome
        .records
        .iter()
        .map(|r| normalized_key(&r.riddle))
        .collect();
    let mut deduped = keys.clone();
    deduped.dedup();
    assert_eq!(keys, deduped);
}

#[test]
fn markerless_input_is_a_legitimate_empty_result() {
    let outcome = Pipeline::with_defaults().run("यो पाठमा कुनै सूची छैन");
    assert!(outcome.records.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn merge_dedups_across_files_and_reindexes() {
    let left: Vec<Record> = serde_json::from_str(
        r#"[
            {"riddle": "A", "answer": "X", "id": 1, "category": "", "difficulty": ""},
            {"riddle": "B", "answer": "Y", "id": 2, "category": "", "difficulty": ""}
        ]"#,
    )
    .expect("valid record file should parse");
    let right: Vec<Record> =
        serde_json::from_str(r#"[{"riddle": "a ", "answer": "Z"}]"#).expect("ids may be absent");

    let outcome = merge(vec![left, right]);

    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].riddle, "A");
    assert_eq!(outcome.records[0].answer, "X");
    let ids: Vec<u32> = outcome.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn records_round_trip_through_pretty_json() {
    let input = "क. यो के हो ? दुध।";
    let outcome = Pipeline::with_defaults().run(input);
    let json = serde_json::to_string_pretty(&outcome.records).expect("records should serialize");

    // Non-ASCII stays readable, nothing is escaped.
    assert!(json.contains("यो के हो ?"));
    assert!(!json.contains("\\u"));

    let back: Vec<Record> = serde_json::from_str(&json).expect("round trip should parse");
    assert_eq!(back, outcome.records);
}
