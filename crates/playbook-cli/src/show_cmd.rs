//! `playbook show` command: render a plan, stage or step to stdout.

use anyhow::Result;

use playbook_core::{PlanSession, SelectBy};
use playbook_store::{PlanStore, Stage, Step};

use crate::logo;

/// Run the show command.
///
/// With no stage criterion, prints the plan overview. With a stage, prints
/// that stage and its step titles. With a stage and a step, prints the full
/// step detail.
pub fn run_show(
    store: &PlanStore,
    plan_key: &str,
    stage_sel: Option<SelectBy<'_>>,
    step_sel: Option<SelectBy<'_>>,
) -> Result<()> {
    let session = PlanSession::open(store.clone(), plan_key)?;

    match (stage_sel, step_sel) {
        (None, _) => show_plan(&session),
        (Some(stage), None) => {
            let stage = session.stage(stage)?;
            show_stage(stage);
            Ok(())
        }
        (Some(stage_sel), Some(step_sel)) => {
            let stage = session.stage(stage_sel)?;
            let step = session.step(stage_sel, step_sel)?;
            println!("{} / {}", stage.title, step.title);
            println!();
            show_step(step);
            Ok(())
        }
    }
}

/// Plan overview: title, intro, stage listing with step counts.
fn show_plan(session: &PlanSession) -> Result<()> {
    let document = session.document();

    println!("Plan: {}", document.title);
    if let Some(intro) = &document.intro {
        println!();
        for line in intro.lines() {
            println!("  {line}");
        }
    }
    println!();

    if document.stages.is_empty() {
        println!("No stages found in the plan.");
        return Ok(());
    }

    println!("Stages:");
    for stage in &document.stages {
        println!("  {} ({} steps)", stage.title, stage.steps.len());
        if let Some(desc) = &stage.description {
            println!("    {}", truncate(desc, 76));
        }
    }

    Ok(())
}

fn show_stage(stage: &Stage) {
    println!("Stage: {}", stage.title);
    if let Some(id) = &stage.id {
        println!("  ID: {id}");
    }
    if let Some(desc) = &stage.description {
        println!();
        for line in desc.lines() {
            println!("  {line}");
        }
    }
    println!();

    if stage.steps.is_empty() {
        println!("This stage has no steps.");
        return;
    }

    println!("Steps:");
    for step in &stage.steps {
        match &step.goal {
            Some(goal) => println!("  {} -- {}", step.title, truncate(goal, 60)),
            None => println!("  {}", step.title),
        }
    }
}

fn show_step(step: &Step) {
    if let Some(id) = &step.id {
        println!("ID: {id}");
    }
    if let Some(goal) = &step.goal {
        println!("Goal: {goal}");
    }
    if let Some(why) = &step.why {
        println!("Why it matters: {why}");
    }

    print_list("SOP / How", &step.how);
    print_list("KPIs", &step.kpis);
    print_list("Deliverables", &step.deliverables);

    if !step.toolbox.is_empty() {
        println!();
        println!("Toolbox:");
        for tool in &step.toolbox {
            match logo::logo_url(&tool.url) {
                Some(logo) => println!("  {} <{}> (logo: {logo})", tool.name, tool.url),
                None => println!("  {} <{}>", tool.name, tool.url),
            }
        }
    }
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{heading}:");
    for item in items {
        println!("  - {item}");
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_long_string_appends_ellipsis() {
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Multi-byte characters must not be split.
        assert_eq!(truncate("ähñé", 2), "äh...");
    }
}
