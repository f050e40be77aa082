//! Integration tests for the document store contract.
//!
//! Each test gets its own temp data directory via `playbook-test-utils`.

use playbook_store::{PlanDocument, PlanStore, StoreConfig, StoreError};
use playbook_test_utils::{
    document_file_exists, empty_store, raw_document_bytes, sample_document, seeded_store,
    write_raw_document,
};

// -----------------------------------------------------------------------
// load / save
// -----------------------------------------------------------------------

#[test]
fn save_then_load_roundtrips() {
    let (_dir, store) = empty_store();
    let doc = sample_document();

    store.save("b2c", &doc).expect("save should succeed");
    let loaded = store.load("b2c").expect("load should succeed");

    assert_eq!(loaded, doc);
}

#[test]
fn save_creates_data_dir() {
    let (dir, _) = empty_store();
    let nested = dir.path().join("nested").join("data");
    let store = PlanStore::new(StoreConfig::new(&nested));

    store
        .save("b2b", &sample_document())
        .expect("save should create missing directories");

    assert!(nested.join("b2b.json").is_file());
}

#[test]
fn save_is_a_full_overwrite() {
    let (_dir, store) = seeded_store("b2c");

    let mut doc = store.load("b2c").expect("load should succeed");
    doc.stages.truncate(1);
    doc.title = "Trimmed".to_owned();
    store.save("b2c", &doc).expect("save should succeed");

    let reloaded = store.load("b2c").expect("reload should succeed");
    assert_eq!(reloaded.title, "Trimmed");
    assert_eq!(reloaded.stages.len(), 1);
}

#[test]
fn saved_file_is_pretty_printed_with_unescaped_unicode() {
    let (_dir, store) = empty_store();
    let mut doc = sample_document();
    doc.title = "Plan für Kürbis — ☃".to_owned();

    store.save("product", &doc).expect("save should succeed");
    let bytes = raw_document_bytes(&store, "product");
    let text = String::from_utf8(bytes).expect("file should be UTF-8");

    assert!(text.contains("Plan für Kürbis — ☃"), "unicode escaped: {text}");
    assert!(text.contains("\n  \"title\""), "not 2-space indented: {text}");
    assert!(!text.contains("\\u00"), "found escape sequences: {text}");
}

#[test]
fn load_unknown_key_performs_no_file_access() {
    let (dir, store) = empty_store();

    let err = store.load("enterprise").unwrap_err();
    assert!(
        matches!(err, StoreError::UnknownPlanKey(_)),
        "expected UnknownPlanKey, got: {err}"
    );

    // The data dir was never created or touched.
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("temp dir should exist")
        .collect();
    assert!(entries.is_empty(), "unexpected file access: {entries:?}");
}

#[test]
fn load_missing_file_is_io_error() {
    let (_dir, store) = empty_store();
    let err = store.load("b2c").unwrap_err();
    assert!(
        matches!(err, StoreError::Io { .. }),
        "expected Io, got: {err}"
    );
}

#[test]
fn load_invalid_json_is_malformed() {
    let (_dir, store) = empty_store();
    write_raw_document(&store, "b2c", b"{ not json at all");

    let err = store.load("b2c").unwrap_err();
    assert!(
        matches!(err, StoreError::MalformedDocument { .. }),
        "expected MalformedDocument, got: {err}"
    );
}

#[test]
fn load_non_object_json_is_malformed() {
    let (_dir, store) = empty_store();
    write_raw_document(&store, "b2c", b"[\"a\", \"b\"]");

    let err = store.load("b2c").unwrap_err();
    assert!(
        matches!(err, StoreError::MalformedDocument { .. }),
        "expected MalformedDocument, got: {err}"
    );
}

// -----------------------------------------------------------------------
// replace_from_import
// -----------------------------------------------------------------------

#[test]
fn import_replaces_document() {
    let (_dir, store) = seeded_store("b2c");

    let replacement = r#"{"title": "Imported", "stages": [{"title": "Only stage", "steps": []}]}"#;
    store
        .replace_from_import("b2c", replacement.as_bytes())
        .expect("import should succeed");

    let loaded = store.load("b2c").expect("load after import should succeed");
    assert_eq!(loaded.title, "Imported");
    assert_eq!(loaded.stages.len(), 1);
}

#[test]
fn import_invalid_json_leaves_file_untouched() {
    let (_dir, store) = seeded_store("b2c");
    let before = raw_document_bytes(&store, "b2c");

    let err = store
        .replace_from_import("b2c", b"{ definitely broken")
        .unwrap_err();
    assert!(
        matches!(err, StoreError::InvalidImport(_)),
        "expected InvalidImport, got: {err}"
    );

    let after = raw_document_bytes(&store, "b2c");
    assert_eq!(before, after, "file changed despite failed import");
}

#[test]
fn import_invalid_json_creates_no_file() {
    let (_dir, store) = empty_store();

    let result = store.replace_from_import("b2b", b"not json");
    assert!(result.is_err());
    assert!(!document_file_exists(&store, "b2b"));
}

#[test]
fn import_accepts_non_document_shape() {
    // Any valid JSON is accepted on import; the subsequent load is what
    // fails.
    let (_dir, store) = seeded_store("b2c");

    store
        .replace_from_import("b2c", br#"{"totally": "unrelated"}"#)
        .expect("shape is not validated on import");

    let err = store.load("b2c").unwrap_err();
    assert!(
        matches!(err, StoreError::MalformedDocument { .. }),
        "expected MalformedDocument, got: {err}"
    );
}

#[test]
fn import_preserves_author_key_order() {
    let (_dir, store) = empty_store();

    // "zeta" before "alpha": insertion order must survive the rewrite.
    store
        .replace_from_import("b2c", br#"{"zeta": 1, "alpha": 2}"#)
        .expect("import should succeed");

    let text = String::from_utf8(raw_document_bytes(&store, "b2c")).unwrap();
    let zeta = text.find("zeta").expect("zeta missing");
    let alpha = text.find("alpha").expect("alpha missing");
    assert!(zeta < alpha, "key order not preserved: {text}");
}

// -----------------------------------------------------------------------
// export
// -----------------------------------------------------------------------

#[test]
fn export_matches_saved_bytes() {
    let (_dir, store) = empty_store();
    let doc = sample_document();
    store.save("product", &doc).expect("save should succeed");

    let exported = PlanStore::export_string(&doc).expect("export should render");
    let on_disk = raw_document_bytes(&store, "product");

    assert_eq!(exported.as_bytes(), on_disk.as_slice());
}

#[test]
fn export_reparses_to_the_same_document() {
    let doc = sample_document();
    let exported = PlanStore::export_string(&doc).expect("export should render");
    let reparsed: PlanDocument =
        serde_json::from_str(&exported).expect("exported JSON should parse");
    assert_eq!(reparsed, doc);
}
