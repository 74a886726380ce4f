//! Full audit runs from files on disk
//!
//! Run with: cargo test -p measure-report --test audit_run

use measure_engine::MeasureEngine;
use measure_report::{loader, AuditConfig, AuditReport, OutputFormat, Reporter};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn write_fixture(dir: &Path) {
    fs::create_dir_all(dir.join("terms")).unwrap();
    fs::write(
        dir.join("audit.toml"),
        r#"
[analysis]
length_threshold = 8
top_n = 5
lemmatizer = "plural"

[terms]
tentative = "terms/tentative.txt"
actions = "terms/actions.txt"
elements = "terms/elements.json"
vague = "terms/vague.txt"
synonyms = "terms/synonyms.json"
"#,
    )
    .unwrap();
    fs::write(dir.join("terms/tentative.txt"), "# Tentative verbs\nconsider\nevaluate\n").unwrap();
    fs::write(dir.join("terms/actions.txt"), "install\nreplace\ninspect\nfire\nseal\n").unwrap();
    fs::write(
        dir.join("terms/elements.json"),
        r#"[
            {"term": "meter", "type": "Element"},
            {"term": "boiler", "type": "Element"},
            {"term": "toilet", "type": "Element"},
            {"term": "water", "type": "Resource"}
        ]"#,
    )
    .unwrap();
    fs::write(dir.join("terms/vague.txt"), "improve\nupgrade\n").unwrap();
    fs::write(
        dir.join("terms/synonyms.json"),
        r#"[
            {"code": "S01", "terms": ["low flow", "water efficient"]},
            {"code": "S02", "terms": ["hvac", "heating ventilation air conditioning"]}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("measures.jsonl"),
        concat!(
            "{\"id\": 1, \"category\": \"Water\", \"name\": \"Install flow rate meters\"}\n",
            "{\"id\": 2, \"category\": \"Water\", \"name\": \"Replace toilets with low flow toilets\"}\n",
            "{\"id\": 3, \"category\": \"Water\", \"name\": \"Install water efficient toilets\"}\n",
            "{\"id\": 4, \"category\": \"HVAC\", \"name\": \"Inspect and fire side of boiler\"}\n",
            "{\"id\": 5, \"category\": \"HVAC\", \"name\": \"Upgrade HVAC\"}\n",
            "not json\n",
            "{\"category\": \"HVAC\", \"name\": \"Missing id\"}\n",
        ),
    )
    .unwrap();
}

fn run(dir: &Path) -> AuditReport {
    let config = AuditConfig::from_file(dir.join("audit.toml")).unwrap();
    let loaded = loader::load_records(dir.join("measures.jsonl")).unwrap();
    let lemmatizer =
        loader::load_lemmatizer(config.analysis.lemmatizer, config.lemma_dictionary().as_deref())
            .unwrap()
            .unwrap();
    let engine = MeasureEngine::new(loader::load_term_sets(&config).unwrap(), config.engine_config())
        .unwrap()
        .with_lemmatizer(lemmatizer);

    let mut evaluation = engine.evaluate(&loaded.records);
    evaluation.diagnostics.skipped_records = loaded.skipped;
    AuditReport::build(
        &evaluation,
        config.analysis.length_threshold,
        config.analysis.top_n,
    )
}

#[test]
fn test_audit_from_config_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let report = run(dir.path());

    assert_eq!(report.record_count, 5);
    assert_eq!(report.diagnostics.skipped_records, 2);
    assert_eq!(report.diagnostics.lemmatizer.as_deref(), Some("plural"));
    assert!(report.diagnostics.empty_term_lists.is_empty());

    let flagged: Vec<&str> = report
        .flagged_records()
        .map(|r| r.record.id.as_str())
        .collect();
    assert_eq!(flagged, vec!["2", "3", "4", "5"]);
    assert_eq!(report.attested_synonym_groups.len(), 1);
    assert_eq!(report.attested_synonym_groups[0].code, "S01");
}

#[test]
fn test_audit_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let report = run(dir.path());

    let path = dir.path().join("audit.json");
    Reporter::new(OutputFormat::JsonPretty)
        .write_to_file(&report, &path)
        .unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["record_count"], 5);
    assert_eq!(value["records"][3]["error_3"], 1);
    assert_eq!(value["records"][4]["error_7"], 1);
    assert_eq!(value["records"][4]["error_6"], 1);
    assert_eq!(value["total"]["category"], "All");
    assert_eq!(value["diagnostics"]["skipped_records"], 2);
}
