use std::io::Write;
use std::sync::Arc;

use ketav_core::dictionary::{GlossSource, LoadError};
use ketav_lang_hebrew::analysis::WordAnalysisEngine;
use ketav_lang_hebrew::loader::GlossLoader;
use ketav_lang_hebrew::usage::{UsageCounts, UsageLevel};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn gloss_file_overrides_embedded_entries() {
    let file = write_temp(r#"{"𐤀𐤋𐤄𐤉𐤌": "Mighty One", "𐤔𐤋𐤌": "peace"}"#);
    let path = file.path().display().to_string();

    let map = GlossLoader::load_configured(true, &[], &[path]);
    assert_eq!(map.lookup("𐤀𐤋𐤄𐤉𐤌").as_deref(), Some("Mighty One"));
    assert_eq!(map.lookup("𐤔𐤋𐤌").as_deref(), Some("peace"));
    assert_eq!(map.lookup("𐤁𐤓𐤀").as_deref(), Some("created"));
}

#[test]
fn lexicon_file_registers_prefixed_forms() {
    let file = write_temp(
        r#"[
            {"hebrew": "שָׁלוֹם", "gloss": "peace"},
            {"hebrew": "שלום", "gloss": "completeness"}
        ]"#,
    );

    let map = GlossLoader::load_lexicon_file(file.path()).unwrap();
    assert_eq!(map.get("𐤔𐤋𐤅𐤌"), Some("peace"));
    assert_eq!(map.get("𐤅𐤔𐤋𐤅𐤌"), Some("peace"));
    assert_eq!(map.get("𐤁𐤔𐤋𐤅𐤌"), Some("peace"));
    assert_eq!(map.len(), 7);
}

#[test]
fn broken_files_are_skipped() {
    let broken = write_temp("not json");
    let paths = vec![
        broken.path().display().to_string(),
        "/nonexistent/glosses.json".to_string(),
    ];

    let map = GlossLoader::load_configured(false, &paths, &paths);
    assert!(map.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let err = GlossLoader::load_from_file(std::path::Path::new("/nonexistent/glosses.json"))
        .unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
}

#[test]
fn usage_file_feeds_analysis() {
    let file = write_temp("שָׁלוֹם\t237\nbroken line\nבית\tmany\n");
    let usage = UsageCounts::load_from_file(file.path()).unwrap();

    assert_eq!(usage.len(), 1);
    assert_eq!(usage.get_level("שלום"), UsageLevel::Uncommon);

    let engine = WordAnalysisEngine::without_glosses().with_usage(Arc::new(usage));
    let record = engine.analyze("שָׁלוֹם").unwrap();
    assert_eq!(record.usage_count, 237);
    assert_eq!(record.english_gloss, "Ancient Word Analysis");
}
