//! Reading records and reference vocabularies from disk
//!
//! Input defects degrade instead of aborting: a malformed record row is
//! skipped and counted, and a missing term list becomes an empty list.
//! Only unreadable (as opposed to absent) files and documents that are not
//! the expected shape at all are errors.

use crate::config::AuditConfig;
use crate::error::ReportError;
use anyhow::Context;
use measure_engine::lemmatizer::DictionaryLemmatizer;
use measure_engine::{Lemmatizer, LemmatizerKind, TermSets};
use measure_types::{MeasureRecord, SynonymGroup, TermList, TermListKind, TermRow};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Records read from one input file
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<MeasureRecord>,
    /// Rows that could not be read as a record
    pub skipped: usize,
}

pub fn load_records<P: AsRef<Path>>(path: P) -> anyhow::Result<LoadedRecords> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;
    let loaded = parse_records(&content)
        .with_context(|| format!("Failed to parse records file: {}", path.display()))?;
    debug!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped,
        "records loaded"
    );
    Ok(loaded)
}

/// Parse a JSON array of records, or one JSON record per line
pub fn parse_records(content: &str) -> Result<LoadedRecords, ReportError> {
    let trimmed = content.trim_start();
    let mut loaded = LoadedRecords::default();

    let rows: Vec<Value> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|e| ReportError::InvalidRecords(e.to_string()))?
    } else {
        let mut rows = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping unreadable record line");
                    loaded.skipped += 1;
                }
            }
        }
        rows
    };

    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<MeasureRecord>(row) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                warn!(row = index + 1, error = %e, "skipping malformed record");
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

/// Load one vocabulary. An unset or missing path yields an empty list.
pub fn load_term_list(path: Option<&Path>, kind: TermListKind) -> anyhow::Result<TermList> {
    let Some(content) = read_optional(path, kind)? else {
        return Ok(TermList::default());
    };
    let list = parse_term_list(&content, kind).map_err(|e| match e {
        ReportError::InvalidTermList { reason, .. } => ReportError::InvalidTermList {
            path: path.map(|p| p.display().to_string()).unwrap_or_default(),
            reason,
        },
        other => other,
    })?;
    debug!(%kind, terms = list.len(), "term list loaded");
    Ok(list)
}

/// Parse a vocabulary in either supported layout.
///
/// JSON input is an array of strings or of `{term, type}` rows; for the
/// element vocabulary only `Element` rows are kept. Anything else is plain
/// text with one term per line and `#` comments.
pub fn parse_term_list(content: &str, kind: TermListKind) -> Result<TermList, ReportError> {
    if !content.trim_start().starts_with('[') {
        return Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .collect());
    }

    let invalid = |reason: String| ReportError::InvalidTermList {
        path: String::new(),
        reason,
    };

    let values: Vec<Value> = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
    if values.iter().all(Value::is_string) {
        return Ok(values.iter().filter_map(Value::as_str).collect());
    }

    let rows: Vec<TermRow> = values
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()
        .map_err(|e| invalid(e.to_string()))?;

    Ok(match kind {
        TermListKind::Element => TermList::from_rows_of_type(&rows, "Element"),
        _ => TermList::new(rows.into_iter().map(|row| row.term)),
    })
}

/// Load synonym groups from a JSON array of `{code, terms}` objects
pub fn load_synonym_groups(path: Option<&Path>) -> anyhow::Result<Vec<SynonymGroup>> {
    let Some(content) = read_optional(path, TermListKind::Synonym)? else {
        return Ok(Vec::new());
    };
    let groups: Vec<SynonymGroup> = serde_json::from_str(&content)
        .map_err(|e| ReportError::InvalidSynonyms(e.to_string()))?;
    debug!(groups = groups.len(), "synonym groups loaded");
    Ok(groups)
}

/// Load all five vocabularies named by the configuration
pub fn load_term_sets(config: &AuditConfig) -> anyhow::Result<TermSets> {
    let paths = config.term_paths();
    Ok(TermSets {
        tentative: load_term_list(paths.tentative.as_deref(), TermListKind::Tentative)?,
        actions: load_term_list(paths.actions.as_deref(), TermListKind::Action)?,
        elements: load_term_list(paths.elements.as_deref(), TermListKind::Element)?,
        vague: load_term_list(paths.vague.as_deref(), TermListKind::Vague)?,
        synonyms: load_synonym_groups(paths.synonyms.as_deref())?,
    })
}

/// Build the configured lemmatizer, layering a lemma dictionary on top when
/// one is given. A missing dictionary file falls back to `kind` alone.
pub fn load_lemmatizer(
    kind: LemmatizerKind,
    dictionary: Option<&Path>,
) -> anyhow::Result<Option<Box<dyn Lemmatizer>>> {
    let Some(path) = dictionary else {
        return Ok(kind.build());
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "lemma dictionary not found; using {} lemmatizer", kind);
            return Ok(kind.build());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read lemma dictionary: {}", path.display())
            })
        }
    };

    let dictionary = DictionaryLemmatizer::from_tsv(&content)
        .with_context(|| format!("Failed to parse lemma dictionary: {}", path.display()))?;
    debug!(entries = dictionary.len(), "lemma dictionary loaded");

    let lemmatizer: Box<dyn Lemmatizer> = match kind.build() {
        Some(fallback) => Box::new(dictionary.with_fallback(fallback)),
        None => Box::new(dictionary),
    };
    Ok(Some(lemmatizer))
}

fn read_optional(path: Option<&Path>, kind: TermListKind) -> anyhow::Result<Option<String>> {
    let Some(path) = path else {
        warn!(%kind, "no term list configured");
        return Ok(None);
    };
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(%kind, path = %path.display(), "term list not found; using an empty list");
            Ok(None)
        }
        Err(e) => Err(e)
            .with_context(|| format!("Failed to read {} term list: {}", kind, path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_records_array() {
        let json = r#"[
            {"id": 1, "category": "Water", "name": "Install flow rate meters"},
            {"id": "2", "category_level1": "HVAC", "category_level2": "Boilers", "name": "Tune boiler"}
        ]"#;
        let loaded = parse_records(json).unwrap();
        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[0].id, "1");
        assert_eq!(loaded.records[0].category_level1, "Water");
        assert_eq!(
            loaded.records[1].category_level2,
            Some("Boilers".to_string())
        );
    }

    #[test]
    fn test_parse_records_skips_bad_rows() {
        let json = r#"[
            {"id": 1, "category": "Water", "name": "Install meters"},
            {"category": "Water", "name": "No id"},
            "not a record",
            {"id": 4, "category": "Water"}
        ]"#;
        let loaded = parse_records(json).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped, 2);
        // Missing name evaluates as empty
        assert_eq!(loaded.records[1].name, "");
    }

    #[test]
    fn test_parse_records_keeps_null_fields() {
        let json = r#"[
            {"id": 1, "category": "Water", "name": null},
            {"id": 2, "category": null, "name": "Install meters"},
            {"id": 3, "category": "HVAC", "document": null, "name": "Seal ducts"}
        ]"#;
        let loaded = parse_records(json).unwrap();
        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.records.len(), 3);
        assert_eq!(loaded.records[0].name, "");
        assert_eq!(loaded.records[1].category_level1, "");

        let engine = measure_engine::MeasureEngine::new(
            measure_engine::TermSets::default(),
            measure_engine::EngineConfig::default(),
        )
        .unwrap();
        let evaluation = engine.evaluate(&loaded.records);
        assert_eq!(evaluation.records.len(), 3);
        assert_eq!(evaluation.diagnostics.empty_names, vec!["1".to_string()]);
    }

    #[test]
    fn test_parse_records_json_lines() {
        let jsonl = "{\"id\": 1, \"name\": \"Install meters\"}\n\n{broken\n{\"id\": 3, \"name\": \"Seal ducts\"}\n";
        let loaded = parse_records(jsonl).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.records[1].name, "Seal ducts");
    }

    #[test]
    fn test_parse_records_rejects_broken_array() {
        assert!(matches!(
            parse_records("[{\"id\": 1"),
            Err(ReportError::InvalidRecords(_))
        ));
    }

    #[test]
    fn test_parse_text_term_list() {
        let list = parse_term_list(
            "# actions\ninstall\n\nReplace\nreplace\n  seal  \n",
            TermListKind::Action,
        )
        .unwrap();
        assert_eq!(list.terms(), &["install", "Replace", "seal"]);
    }

    #[test]
    fn test_parse_json_element_rows() {
        let json = r#"[
            {"term": "boiler", "type": "Element"},
            {"term": "water", "type": "Resource"},
            {"term": "duct", "type": "element"}
        ]"#;
        let list = parse_term_list(json, TermListKind::Element).unwrap();
        assert_eq!(list.terms(), &["boiler", "duct"]);

        let list = parse_term_list(json, TermListKind::Vague).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_parse_json_string_list() {
        let list = parse_term_list(r#"["improve", "upgrade"]"#, TermListKind::Vague).unwrap();
        assert_eq!(list.terms(), &["improve", "upgrade"]);
    }

    #[test]
    fn test_missing_term_list_is_empty() {
        let list = load_term_list(
            Some(Path::new("/nonexistent/actions.txt")),
            TermListKind::Action,
        )
        .unwrap();
        assert!(list.is_empty());
        assert!(load_term_list(None, TermListKind::Vague).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_term_list_names_path() {
        let file = temp_file("[{\"type\": \"Element\"}]");
        let err = load_term_list(Some(file.path()), TermListKind::Element).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_synonym_groups() {
        let file = temp_file(r#"[{"code": "S01", "terms": ["hvac", "heating ventilation air conditioning"]}]"#);
        let groups = load_synonym_groups(Some(file.path())).unwrap();
        assert_eq!(
            groups,
            vec![SynonymGroup::new(
                "S01",
                ["hvac", "heating ventilation air conditioning"]
            )]
        );
        assert!(load_synonym_groups(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_records_from_file() {
        let file = temp_file("[{\"id\": 1, \"name\": \"Install meters\"}]");
        let loaded = load_records(file.path()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert!(load_records("/nonexistent/records.json").is_err());
    }

    #[test]
    fn test_load_lemmatizer_layers_dictionary() {
        let file = temp_file("installing\tinstall\n");
        let lemmatizer = load_lemmatizer(LemmatizerKind::Plural, Some(file.path()))
            .unwrap()
            .unwrap();
        assert_eq!(lemmatizer.name(), "dictionary+plural");
        assert_eq!(lemmatizer.lemmatize("installing"), "install");
        assert_eq!(lemmatizer.lemmatize("meters"), "meter");
    }

    #[test]
    fn test_load_lemmatizer_without_dictionary() {
        assert!(load_lemmatizer(LemmatizerKind::None, None).unwrap().is_none());
        let missing = load_lemmatizer(
            LemmatizerKind::Stemmer,
            Some(Path::new("/nonexistent/lemmas.tsv")),
        )
        .unwrap()
        .unwrap();
        assert_eq!(missing.name(), "stemmer");
    }

    #[test]
    fn test_load_term_sets_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("actions.txt"), "install\nreplace\n").unwrap();
        fs::write(
            dir.path().join("elements.json"),
            r#"[{"term": "meter", "type": "Element"}]"#,
        )
        .unwrap();
        let config_path = dir.path().join("audit.toml");
        fs::write(
            &config_path,
            "[terms]\nactions = \"actions.txt\"\nelements = \"elements.json\"\nvague = \"missing.txt\"\n",
        )
        .unwrap();

        let config = AuditConfig::from_file(&config_path).unwrap();
        let terms = load_term_sets(&config).unwrap();
        assert_eq!(terms.actions.len(), 2);
        assert_eq!(terms.elements.terms(), &["meter"]);
        assert!(terms.vague.is_empty());
        assert!(terms.synonyms.is_empty());
    }
}
