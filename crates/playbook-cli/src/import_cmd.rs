//! `playbook import` command: replace a stored document from a JSON file.

use anyhow::{Context, Result};

use playbook_store::PlanStore;

/// Replace the stored document for `plan_key` with the contents of `file`.
///
/// The file only has to be valid JSON; its shape is not validated. On
/// parse failure the previous document is left byte-for-byte unchanged,
/// since the failure occurs before any write.
pub fn run_import(store: &PlanStore, plan_key: &str, file: &str) -> Result<()> {
    // 1. Read the upload.
    let raw = std::fs::read(file).with_context(|| format!("failed to read import file: {file}"))?;

    // 2. Parse-then-write; the store guarantees no disk mutation on a
    //    parse failure.
    store
        .replace_from_import(plan_key, &raw)
        .context("import rejected; the stored document was not modified")?;

    // 3. Summary, with a reload probe so a shape problem is visible now
    //    rather than on the next `show`.
    println!("Plan {plan_key} replaced from {file} ({} bytes).", raw.len());
    match store.load(plan_key) {
        Ok(doc) => println!("  {} stages loaded.", doc.stages.len()),
        Err(e) => println!("  Warning: the imported document does not load cleanly: {e}"),
    }

    Ok(())
}
