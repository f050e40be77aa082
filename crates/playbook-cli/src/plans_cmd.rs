//! `playbook plans` command: list the registered plans and their state.

use anyhow::Result;

use playbook_store::{PLANS, PlanStore, StoreError};

/// List every registered plan with its backing file and load status.
pub fn run_plans(store: &PlanStore) -> Result<()> {
    println!("Data directory: {}", store.data_dir().display());
    println!();
    println!("{:<10} {:<16} {:<14} STATUS", "KEY", "NAME", "FILE");
    println!("{}", "-".repeat(56));

    for entry in &PLANS {
        let status = match store.load(entry.key) {
            Ok(doc) => {
                let steps: usize = doc.stages.iter().map(|s| s.steps.len()).sum();
                format!("ok ({} stages, {} steps)", doc.stages.len(), steps)
            }
            Err(StoreError::Io { .. }) => "missing (run `playbook data-init`)".to_string(),
            Err(StoreError::MalformedDocument { .. }) => "malformed".to_string(),
            Err(e) => format!("error: {e}"),
        };
        println!(
            "{:<10} {:<16} {:<14} {status}",
            entry.key, entry.display_name, entry.file_name
        );
    }

    Ok(())
}
