use serde_json::{Value, json};

use super::*;
use crate::model::Score;

fn resolved(raw: &Value) -> Vec<CategoryScoreEntry> {
    match normalize_value(Some(raw)) {
        Breakdown::Resolved(entries) => entries,
        other => panic!("expected resolved entries, got {other:?}"),
    }
}

fn names(entries: &[CategoryScoreEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn assert_placeholder(entry: &CategoryScoreEntry, name: &str) {
    assert_eq!(entry.name, name);
    assert_eq!(entry.score, Score::NotAvailable);
    assert_eq!(entry.comment, "");
}

#[test]
fn test_absent_and_null_yield_nothing() {
    assert!(normalize_value(None).is_empty());
    assert!(normalize_value(Some(&Value::Null)).is_empty());
}

#[test]
fn test_scalars_yield_nothing() {
    assert!(normalize_value(Some(&json!(42))).is_empty());
    assert!(normalize_value(Some(&json!("string"))).is_empty());
    assert!(normalize_value(Some(&json!(true))).is_empty());
    assert!(normalize_value(Some(&json!(0))).is_empty());
    assert!(normalize_value(Some(&json!(""))).is_empty());
}

#[test]
fn test_list_passes_through_unchanged() {
    let raw = json!([
        {"name": "X", "score": 1, "comment": "c"},
        {"name": "Problem Solving", "score": 55, "comment": "fine"}
    ]);
    let out = normalize_value(Some(&raw));
    assert_eq!(out.len(), 2);
    let rows = out.entries();
    assert_eq!(rows[0].name, "X");
    assert_eq!(rows[0].score, Score::points(1u64));
    assert_eq!(rows[0].comment, "c");
    assert_eq!(names(&rows), vec!["X", "Problem Solving"]);

    let round: Value = serde_json::to_value(&out).unwrap();
    assert_eq!(round, raw);
}

#[test]
fn test_list_keeps_malformed_items_and_extra_fields() {
    let raw = json!([
        {"name": "X", "score": null, "comment": "c", "weight": 2},
        {"name": "Y", "score": true, "comment": 5},
        "loose"
    ]);
    let out = normalize_value(Some(&raw));
    assert_eq!(out, Breakdown::Passthrough(raw.as_array().unwrap().clone()));
    assert_eq!(serde_json::to_value(&out).unwrap(), raw);

    let rows = out.entries();
    assert_eq!(rows[0].score, Score::NotAvailable);
    assert_eq!(rows[1].comment, "5");
    assert_eq!(rows[2].name, "");
}

#[test]
fn test_empty_list_stays_empty() {
    assert!(normalize_value(Some(&json!([]))).is_empty());
}

#[test]
fn test_exact_match_with_placeholders() {
    let raw = json!({"Communication Skills": {"score": 80, "comment": "good"}});
    let out = resolved(&raw);
    assert_eq!(out.len(), 5);
    assert_eq!(out[0].name, "Communication Skills");
    assert_eq!(out[0].score, Score::points(80u64));
    assert_eq!(out[0].comment, "good");
    assert_placeholder(&out[1], "Technical Knowledge");
    assert_placeholder(&out[2], "Problem Solving");
    assert_placeholder(&out[3], "Cultural Fit");
    assert_placeholder(&out[4], "Confidence and Clarity");
}

#[test]
fn test_case_insensitive_match_keeps_source_key() {
    let raw = json!({"communication skills": {"score": 70, "comment": "ok"}});
    let out = resolved(&raw);
    assert_eq!(out[0].name, "communication skills");
    assert_eq!(out[0].score, Score::points(70u64));
    assert_eq!(out[0].comment, "ok");
}

#[test]
fn test_contains_match_on_lead_word() {
    let raw = json!({"Overall Communication": {"score": 65, "comment": "clear"}});
    let out = resolved(&raw);
    assert_eq!(out[0].name, "Overall Communication");
    assert_eq!(out[0].score, Score::points(65u64));
    assert_eq!(out[0].comment, "clear");
}

#[test]
fn test_contains_match_does_not_fire_on_abbreviation() {
    let raw = json!({"Tech Knowledge Area": {"score": 90, "comment": "x"}});
    let out = resolved(&raw);
    assert_eq!(out.len(), 5);
    assert_placeholder(&out[1], "Technical Knowledge");
    assert!(out.iter().all(|e| e.name != "Tech Knowledge Area"));
}

#[test]
fn test_canonical_order_regardless_of_key_order() {
    let raw = json!({
        "Confidence and Clarity": {"score": 5, "comment": "e"},
        "Cultural Fit": {"score": 4, "comment": "d"},
        "Problem Solving": {"score": 3, "comment": "c"},
        "Technical Knowledge": {"score": 2, "comment": "b"},
        "Communication Skills": {"score": 1, "comment": "a"}
    });
    let out = resolved(&raw);
    assert_eq!(
        names(&out),
        vec![
            "Communication Skills",
            "Technical Knowledge",
            "Problem Solving",
            "Cultural Fit",
            "Confidence and Clarity"
        ]
    );
    let comments: Vec<&str> = out.iter().map(|e| e.comment.as_str()).collect();
    assert_eq!(comments, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_exact_match_wins_over_earlier_loose_keys() {
    let raw = json!({
        "communication skills": {"score": 10, "comment": "lower"},
        "Communication Skills": {"score": 90, "comment": "exact"}
    });
    let out = resolved(&raw);
    assert_eq!(out[0].name, "Communication Skills");
    assert_eq!(out[0].comment, "exact");
}

#[test]
fn test_first_matching_key_in_insertion_order() {
    let raw = json!({
        "Problem framing": {"score": 40, "comment": "first"},
        "problem decomposition": {"score": 60, "comment": "second"}
    });
    let out = resolved(&raw);
    assert_eq!(out[2].name, "Problem framing");
    assert_eq!(out[2].comment, "first");
}

#[test]
fn test_same_key_can_serve_several_categories() {
    let raw = json!({"Confidence in problem solving": {"score": 77, "comment": "both"}});
    let out = resolved(&raw);
    assert_eq!(out[2].name, "Confidence in problem solving");
    assert_eq!(out[4].name, "Confidence in problem solving");
}

#[test]
fn test_malformed_entry_payload_degrades() {
    let raw = json!({
        "Cultural Fit": null,
        "Problem Solving": {"comment": 12},
        "Technical Knowledge": "strong"
    });
    let out = resolved(&raw);
    assert_placeholder(&out[3], "Cultural Fit");
    assert_eq!(out[2].name, "Problem Solving");
    assert_eq!(out[2].score, Score::NotAvailable);
    assert_eq!(out[2].comment, "12");
    assert_eq!(out[1].name, "Technical Knowledge");
    assert_eq!(out[1].score, Score::NotAvailable);
    assert_eq!(out[1].comment, "");
}

#[test]
fn test_empty_mapping_yields_all_placeholders() {
    let out = resolved(&json!({}));
    assert_eq!(out.len(), 5);
    for (entry, category) in out.iter().zip(category_order()) {
        assert_placeholder(entry, category.name());
    }
}

#[test]
fn test_string_scores_survive() {
    let raw = json!({"Cultural Fit": {"score": "85", "comment": "team player"}});
    let out = resolved(&raw);
    assert_eq!(out[3].score, Score::Text("85".to_string()));
    assert_eq!(out[3].score.to_string(), "85");
}
