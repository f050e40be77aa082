//! `playbook form` and `playbook edit` commands: emit the step edit form
//! and apply an edited one.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use playbook_core::{PlanSession, SelectBy, parse_step_form, render_step_form};
use playbook_store::PlanStore;

/// Emit the pre-filled edit form for a step, to stdout or a file.
pub fn run_form(
    store: &PlanStore,
    plan_key: &str,
    stage_sel: SelectBy<'_>,
    step_sel: SelectBy<'_>,
    output: Option<&str>,
) -> Result<()> {
    let session = PlanSession::open(store.clone(), plan_key)?;
    let step = session.step(stage_sel, step_sel)?;
    let form = render_step_form(step);

    match output {
        Some(path) => {
            std::fs::write(path, &form).with_context(|| format!("failed to write to {path}"))?;
            println!("Form written to {path}");
            println!("Edit it, then apply with: playbook edit {plan_key} ... --form {path}");
        }
        None => {
            print!("{form}");
        }
    }

    Ok(())
}

/// Apply an edited form to a step and persist the document.
///
/// With `--form FILE` the form is read from disk; otherwise the current
/// form is written to a temp file and `$VISUAL`/`$EDITOR` is opened on it.
pub fn run_edit(
    store: &PlanStore,
    plan_key: &str,
    stage_sel: SelectBy<'_>,
    step_sel: SelectBy<'_>,
    form_path: Option<&str>,
) -> Result<()> {
    // 1. Open the session; resolve the step up front so a bad selector
    //    fails before any editor is spawned.
    let mut session = PlanSession::open(store.clone(), plan_key)?;
    let current_form = render_step_form(session.step(stage_sel, step_sel)?);

    // 2. Obtain the edited form text.
    let form_text = match form_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read form file: {path}"))?,
        None => edit_in_editor(&current_form)?,
    };

    // 3. Parse it into an edit bundle. A malformed form fails here, before
    //    anything is modified.
    let edit = parse_step_form(&form_text)
        .context("form rejected; the step was not modified")?;

    // 4. Apply and persist.
    session.edit_step(stage_sel, step_sel, &edit)?;

    // 5. Summary.
    println!("Step saved.");
    println!();
    println!("  Plan:   {}", session.key());
    println!("  Title:  {}", edit.title);
    let items = |text: &str| text.lines().filter(|l| !l.trim().is_empty()).count();
    println!("  How:    {} item(s)", items(&edit.how_text));
    println!("  KPIs:   {} item(s)", items(&edit.kpis_text));
    println!("  Tools:  {} entry(ies)", items(&edit.toolbox_text));

    Ok(())
}

/// Round-trip a form through `$VISUAL`/`$EDITOR` on a temp file.
fn edit_in_editor(form: &str) -> Result<String> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .map_err(|_| {
            anyhow::anyhow!(
                "no $VISUAL or $EDITOR set; use `playbook form` + `playbook edit --form FILE` instead"
            )
        })?;

    let path: PathBuf =
        std::env::temp_dir().join(format!("playbook-step-{}.md", std::process::id()));
    std::fs::write(&path, form)
        .with_context(|| format!("failed to write temp form {}", path.display()))?;

    let status = std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("failed to launch editor {editor:?}"))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        bail!("editor {editor:?} exited with {status}; edit aborted");
    }

    let edited = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read edited form {}", path.display()))?;
    let _ = std::fs::remove_file(&path);
    Ok(edited)
}
