//! Read accessors over the in-memory document tree.
//!
//! Stages and steps carry an optional stable `id` alongside a mutable
//! `title`; both act as lookup keys. The criterion is a single tagged type
//! resolved by one linear scan per container, so no caller special-cases
//! the id-vs-title choice. With duplicate titles, the first match in
//! sequence order wins.

use playbook_store::{PlanDocument, Stage, Step};

/// Lookup criterion for stages and steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectBy<'a> {
    /// Match on the stable identifier. Entries without an id never match.
    Id(&'a str),
    /// Match on the title.
    Title(&'a str),
}

impl SelectBy<'_> {
    fn matches(&self, id: Option<&str>, title: &str) -> bool {
        match self {
            SelectBy::Id(wanted) => id == Some(*wanted),
            SelectBy::Title(wanted) => title == *wanted,
        }
    }
}

/// Find the first stage matching the criterion, in sequence order.
pub fn find_stage<'a>(document: &'a PlanDocument, sel: SelectBy<'_>) -> Option<&'a Stage> {
    document
        .stages
        .iter()
        .find(|stage| sel.matches(stage.id.as_deref(), &stage.title))
}

/// Mutable variant of [`find_stage`].
pub fn find_stage_mut<'a>(
    document: &'a mut PlanDocument,
    sel: SelectBy<'_>,
) -> Option<&'a mut Stage> {
    document
        .stages
        .iter_mut()
        .find(|stage| sel.matches(stage.id.as_deref(), &stage.title))
}

/// Find the first step matching the criterion within a stage.
pub fn find_step<'a>(stage: &'a Stage, sel: SelectBy<'_>) -> Option<&'a Step> {
    stage
        .steps
        .iter()
        .find(|step| sel.matches(step.id.as_deref(), &step.title))
}

/// Mutable variant of [`find_step`].
pub fn find_step_mut<'a>(stage: &'a mut Stage, sel: SelectBy<'_>) -> Option<&'a mut Step> {
    stage
        .steps
        .iter_mut()
        .find(|step| sel.matches(step.id.as_deref(), &step.title))
}

/// Stage titles in display order.
pub fn stage_titles(document: &PlanDocument) -> Vec<&str> {
    document.stages.iter().map(|s| s.title.as_str()).collect()
}

/// Step titles in display order.
pub fn step_titles(stage: &Stage) -> Vec<&str> {
    stage.steps.iter().map(|s| s.title.as_str()).collect()
}
