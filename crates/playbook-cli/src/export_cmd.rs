//! `playbook export` command: write the stored document as a JSON download.

use std::path::PathBuf;

use anyhow::{Context, Result};

use playbook_core::PlanSession;
use playbook_store::PlanStore;

/// Export a plan's document.
///
/// Destination precedence: `--stdout`, then `--output PATH`, then the
/// registry's export file name in the working directory (the download
/// default).
pub fn run_export(
    store: &PlanStore,
    plan_key: &str,
    output: Option<&str>,
    to_stdout: bool,
) -> Result<()> {
    let session = PlanSession::open(store.clone(), plan_key)?;
    let rendered = session.export_string()?;

    if to_stdout {
        print!("{rendered}");
        return Ok(());
    }

    let path: PathBuf = match output {
        Some(path) => PathBuf::from(path),
        None => {
            let entry = PlanStore::entry(plan_key)?;
            PathBuf::from(entry.export_file_name())
        }
    };

    std::fs::write(&path, &rendered)
        .with_context(|| format!("failed to write to {}", path.display()))?;
    println!("Plan exported to {}", path.display());

    Ok(())
}
