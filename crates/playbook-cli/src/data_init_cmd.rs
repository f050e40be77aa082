//! `playbook data-init` command: bootstrap the data directory.

use anyhow::Result;

use playbook_store::{PlanStore, seed};

/// Create the data directory and write a starter document for every
/// registered plan that has no backing file yet. Existing files are never
/// touched, so re-running is safe.
pub fn run_data_init(store: &PlanStore) -> Result<()> {
    println!("Initializing data directory {}...", store.data_dir().display());

    let seeded = seed::seed_missing(store)?;

    if seeded.is_empty() {
        println!("All plans already have documents. Nothing to do.");
    } else {
        println!("Seeded starter documents:");
        for key in &seeded {
            println!("  {key}");
        }
        println!();
        println!("Next: `playbook browse <plan>` or `playbook show <plan>`.");
    }

    Ok(())
}
