//! Shared test utilities for playbook integration tests.
//!
//! Provides a canonical fixture document and temp-directory-backed stores.
//! Each test gets its own data directory; the returned [`TempDir`] must be
//! kept alive for the duration of the test.

use tempfile::TempDir;

use playbook_store::{PlanDocument, PlanStore, Stage, Step, StoreConfig, ToolRef};

/// A small but fully-populated document covering every field in the model:
/// two stages, duplicate step titles in the second stage (first-match
/// lookup), optional fields both present and absent, and non-ASCII text.
pub fn sample_document() -> PlanDocument {
    PlanDocument {
        title: "B2C Masterplan".to_owned(),
        intro: Some("Work the stages top to bottom. Revisit quarterly.".to_owned()),
        stages: vec![
            Stage {
                id: Some("foundation".to_owned()),
                title: "Foundation".to_owned(),
                description: Some("Get the basics right before spending.".to_owned()),
                steps: vec![
                    Step {
                        id: Some("positioning".to_owned()),
                        title: "Positioning".to_owned(),
                        goal: Some("A one-sentence value proposition".to_owned()),
                        why: Some("Everything downstream depends on it".to_owned()),
                        how: vec![
                            "Interview five recent customers".to_owned(),
                            "Draft three candidate statements".to_owned(),
                            "Test with ad headlines".to_owned(),
                        ],
                        kpis: vec!["Winning headline CTR ≥ 2%".to_owned()],
                        deliverables: vec!["Positioning doc".to_owned()],
                        toolbox: vec![
                            ToolRef {
                                name: "Notion".to_owned(),
                                url: "https://notion.so".to_owned(),
                            },
                            ToolRef {
                                name: "Google Ads".to_owned(),
                                url: "https://ads.google.com".to_owned(),
                            },
                        ],
                    },
                    Step {
                        id: None,
                        title: "Pricing page".to_owned(),
                        goal: None,
                        why: None,
                        how: vec![],
                        kpis: vec![],
                        deliverables: vec![],
                        toolbox: vec![],
                    },
                ],
            },
            Stage {
                id: None,
                title: "Acquisition".to_owned(),
                description: None,
                steps: vec![
                    Step {
                        id: Some("seo-first".to_owned()),
                        title: "SEO".to_owned(),
                        goal: Some("Rank for ten money keywords".to_owned()),
                        why: None,
                        how: vec!["Keyword research".to_owned(), "Publish two posts/week".to_owned()],
                        kpis: vec!["Organic sessions".to_owned()],
                        deliverables: vec!["Content calendar".to_owned()],
                        toolbox: vec![ToolRef {
                            name: "Ahrefs".to_owned(),
                            url: "https://ahrefs.com".to_owned(),
                        }],
                    },
                    Step {
                        id: Some("seo-second".to_owned()),
                        title: "SEO".to_owned(),
                        goal: Some("Duplicate title, must never be found by title".to_owned()),
                        why: None,
                        how: vec![],
                        kpis: vec![],
                        deliverables: vec![],
                        toolbox: vec![],
                    },
                ],
            },
        ],
    }
}

/// Create a store over a fresh temp directory, with no documents seeded.
pub fn empty_store() -> (TempDir, PlanStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = PlanStore::new(StoreConfig::new(dir.path()));
    (dir, store)
}

/// Create a store over a fresh temp directory with the sample document
/// saved under the given plan key.
pub fn seeded_store(key: &str) -> (TempDir, PlanStore) {
    let (dir, store) = empty_store();
    store
        .save(key, &sample_document())
        .expect("seeding the sample document should succeed");
    (dir, store)
}

/// Raw bytes of a plan's backing file, for byte-level assertions.
pub fn raw_document_bytes(store: &PlanStore, key: &str) -> Vec<u8> {
    let path = store
        .document_path(key)
        .expect("key should resolve for raw read");
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// Write raw bytes directly to a plan's backing file, bypassing the store.
pub fn write_raw_document(store: &PlanStore, key: &str, bytes: &[u8]) {
    let path = store
        .document_path(key)
        .expect("key should resolve for raw write");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create data dir");
    }
    std::fs::write(&path, bytes)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

/// True if the plan's backing file exists on disk.
pub fn document_file_exists(store: &PlanStore, key: &str) -> bool {
    store
        .document_path(key)
        .map(|path| path.is_file())
        .unwrap_or(false)
}
