//! # Configuration Tests
//!
//! Tests for configuration defaults, predictor tag parsing, JSON
//! deserialization, and file loading.

use std::io::Write as _;
use std::str::FromStr;

use bpsim_core::Error;
use bpsim_core::config::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_predictions);
    assert_eq!(config.predictor.kind, PredictorKind::AlwaysNotTaken);
    assert_eq!(config.predictor.branch_count, 0);
}

#[test]
fn test_table_geometry_defaults() {
    assert_eq!(defaults::GLOBAL_HISTORY_BITS, 5);
    assert_eq!(defaults::GLOBAL_PHT_SIZE, 32);
    assert_eq!(defaults::LOCAL_HISTORY_BITS, 4);
    assert_eq!(defaults::LOCAL_BUCKETS, 16);
    assert_eq!(defaults::LOCAL_BUCKET_MASK, 0xF);
    assert_eq!(defaults::LOCAL_PHT_SIZE, 256);
}

#[test]
fn test_with_kind() {
    let config = Config::with_kind(PredictorKind::LocalTwoBit);
    assert_eq!(config.predictor.kind, PredictorKind::LocalTwoBit);
    assert_eq!(config.general, GeneralConfig::default());
}

// ══════════════════════════════════════════════════════════
// Predictor tags
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("ANT", PredictorKind::AlwaysNotTaken)]
#[case("AT", PredictorKind::AlwaysTaken)]
#[case("BTFNT", PredictorKind::Btfnt)]
#[case("LTG", PredictorKind::GlobalOneBit)]
#[case("LTL", PredictorKind::LocalOneBit)]
#[case("2BG", PredictorKind::GlobalTwoBit)]
#[case("2BL", PredictorKind::LocalTwoBit)]
fn test_tag_round_trip(#[case] tag: &str, #[case] kind: PredictorKind) {
    assert_eq!(PredictorKind::from_str(tag).expect("known tag"), kind);
    assert_eq!(kind.to_string(), tag);
    assert_eq!(kind.tag(), tag);

    let json = format!(r#"{{ "predictor": {{ "kind": "{tag}" }} }}"#);
    let config = Config::from_json(&json).expect("valid json");
    assert_eq!(config.predictor.kind, kind);
}

#[test]
fn test_tags_are_case_insensitive() {
    assert_eq!("2bl".parse::<PredictorKind>().expect("tag"), PredictorKind::LocalTwoBit);
    assert_eq!(" btfnt ".parse::<PredictorKind>().expect("tag"), PredictorKind::Btfnt);

    let config = Config::from_json(r#"{ "predictor": { "kind": "ltg" } }"#).expect("alias");
    assert_eq!(config.predictor.kind, PredictorKind::GlobalOneBit);
}

#[test]
fn test_unknown_tag() {
    let err = "GShare".parse::<PredictorKind>().expect_err("unknown tag");
    assert!(matches!(err, Error::UnknownPredictor(ref s) if s == "GShare"));

    let err = Config::from_json(r#"{ "predictor": { "kind": "TAGE" } }"#).expect_err("unknown tag");
    assert!(matches!(err, Error::Config(_)));
}

#[rstest]
#[case("2Bg", PredictorKind::GlobalTwoBit)]
#[case("Btfnt", PredictorKind::Btfnt)]
#[case("lTl", PredictorKind::LocalOneBit)]
#[case(" at ", PredictorKind::AlwaysTaken)]
fn test_json_and_from_str_accept_same_tags(#[case] tag: &str, #[case] kind: PredictorKind) {
    assert_eq!(tag.parse::<PredictorKind>().expect("tag"), kind);

    let json = format!(r#"{{ "predictor": {{ "kind": "{tag}" }} }}"#);
    let config = Config::from_json(&json).expect("same tag through serde");
    assert_eq!(config.predictor.kind, kind);
}

#[test]
fn test_unknown_tag_in_json_names_the_tag() {
    let err = Config::from_json(r#"{ "predictor": { "kind": "Perceptron" } }"#)
        .expect_err("unknown tag");
    let message = err.to_string();
    assert!(message.contains("Perceptron"), "{message}");
    assert!(message.contains("2BL"), "{message}");
}

#[test]
fn test_all_kinds_listed_once() {
    let tags: Vec<&str> = PredictorKind::ALL.iter().map(|k| k.tag()).collect();
    assert_eq!(tags, vec!["ANT", "AT", "BTFNT", "LTG", "LTL", "2BG", "2BL"]);
}

// ══════════════════════════════════════════════════════════
// JSON
// ══════════════════════════════════════════════════════════

#[test]
fn test_json_empty_object_is_default() {
    let config = Config::from_json("{}").expect("empty config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_json_full() {
    let json = r#"{
        "general": { "trace_predictions": true },
        "predictor": { "kind": "2BG", "branch_count": 128 }
    }"#;
    let config = Config::from_json(json).expect("valid json");
    assert!(config.general.trace_predictions);
    assert_eq!(config.predictor.kind, PredictorKind::GlobalTwoBit);
    assert_eq!(config.predictor.branch_count, 128);
}

#[test]
fn test_json_partial_predictor_section() {
    let config = Config::from_json(r#"{ "predictor": { "branch_count": 4 } }"#).expect("valid json");
    assert_eq!(config.predictor.kind, PredictorKind::AlwaysNotTaken);
    assert_eq!(config.predictor.branch_count, 4);
}

#[test]
fn test_json_malformed() {
    let err = Config::from_json("{ \"predictor\": ").expect_err("truncated json");
    assert!(matches!(err, Error::Config(_)));
}

// ══════════════════════════════════════════════════════════
// Files
// ══════════════════════════════════════════════════════════

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(br#"{ "predictor": { "kind": "LTL", "branch_count": 2 } }"#)
        .expect("write config");

    let config = Config::from_path(file.path()).expect("load config");
    assert_eq!(config.predictor.kind, PredictorKind::LocalOneBit);
    assert_eq!(config.predictor.branch_count, 2);
}

#[test]
fn test_from_missing_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::from_path(dir.path().join("missing.json")).expect_err("no such file");
    assert!(matches!(err, Error::Io(_)));
}
