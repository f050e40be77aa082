//! Starter documents for bootstrapping an empty data directory.
//!
//! `playbook data-init` writes one skeleton document per registered plan so
//! a fresh install has something to browse and edit. Existing files are
//! never touched.

use tracing::info;

use crate::models::{PlanDocument, Stage, Step};
use crate::registry::{PLANS, PlanEntry};
use crate::store::{PlanStore, StoreError};

/// Build the skeleton document for a registered plan.
pub fn starter_document(entry: &PlanEntry) -> PlanDocument {
    PlanDocument {
        title: format!("{} Masterplan", entry.display_name),
        intro: Some(
            "Work the stages top to bottom. Each step carries a goal, an SOP, \
             KPIs, deliverables and a toolbox of linked tools. Use `playbook edit` \
             to fill them in."
                .to_owned(),
        ),
        stages: vec![Stage {
            id: Some("stage-1".to_owned()),
            title: "Stage 1".to_owned(),
            description: Some("Rename this stage and add your own steps.".to_owned()),
            steps: vec![Step {
                id: Some("step-1".to_owned()),
                title: "First step".to_owned(),
                goal: None,
                why: None,
                how: vec![],
                kpis: vec![],
                deliverables: vec![],
                toolbox: vec![],
            }],
        }],
    }
}

/// Write a starter document for every registered plan without a backing
/// file. Returns the keys that were seeded, in registry order.
pub fn seed_missing(store: &PlanStore) -> Result<Vec<&'static str>, StoreError> {
    let mut seeded = Vec::new();
    for entry in &PLANS {
        let path = store.document_path(entry.key)?;
        if path.exists() {
            continue;
        }
        store.save(entry.key, &starter_document(entry))?;
        info!(key = entry.key, path = %path.display(), "seeded starter document");
        seeded.push(entry.key);
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::registry;

    #[test]
    fn starter_document_is_usable() {
        let entry = registry::find("b2c").unwrap();
        let doc = starter_document(entry);
        assert_eq!(doc.title, "B2C Masterplan");
        assert!(!doc.stages.is_empty(), "starter must have at least one stage");
        assert!(!doc.stages[0].steps.is_empty());
    }

    #[test]
    fn seed_missing_fills_an_empty_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = PlanStore::new(StoreConfig::new(dir.path()));

        let seeded = seed_missing(&store).expect("seeding should succeed");
        assert_eq!(seeded, vec!["b2c", "product", "b2b"]);

        for entry in &PLANS {
            let doc = store.load(entry.key).expect("seeded doc should load");
            assert_eq!(doc.title, format!("{} Masterplan", entry.display_name));
        }
    }

    #[test]
    fn seed_missing_never_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = PlanStore::new(StoreConfig::new(dir.path()));

        let mut custom = starter_document(registry::find("b2c").unwrap());
        custom.title = "Hand-tuned".to_owned();
        store.save("b2c", &custom).unwrap();

        let seeded = seed_missing(&store).expect("seeding should succeed");
        assert_eq!(seeded, vec!["product", "b2b"], "b2c must be skipped");

        let kept = store.load("b2c").expect("existing doc should load");
        assert_eq!(kept.title, "Hand-tuned");
    }

    #[test]
    fn seed_missing_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = PlanStore::new(StoreConfig::new(dir.path()));

        seed_missing(&store).expect("first run should succeed");
        let second = seed_missing(&store).expect("second run should succeed");
        assert!(second.is_empty(), "second run must seed nothing");
    }
}
