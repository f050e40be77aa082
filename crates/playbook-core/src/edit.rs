//! Step editing: the edit bundle and its text form.
//!
//! An edit arrives as a [`StepEdit`] bundle of raw field values. The bundle
//! travels as a markdown-sectioned form, one `## <Field>` heading per
//! field, which an external editor (or any other presentation adapter) can
//! round-trip: [`render_step_form`] emits the form pre-filled from a step,
//! [`parse_step_form`] parses an edited form back into a bundle. A
//! malformed form fails before a bundle exists, so the step is never
//! half-modified.

use thiserror::Error;

use playbook_store::Step;

use crate::transcode::{list_to_text, text_to_list, text_to_toolbox, toolbox_to_text};

/// Raw values collected from one editing pass over a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEdit {
    pub title: String,
    pub goal: String,
    pub why: String,
    /// Multi-line text, one SOP item per line.
    pub how_text: String,
    /// Multi-line text, one KPI per line.
    pub kpis_text: String,
    /// Multi-line text, one deliverable per line.
    pub deliverables_text: String,
    /// Multi-line text, one `Name - url` tool per line.
    pub toolbox_text: String,
}

impl StepEdit {
    /// Apply the bundle to a step, in place.
    ///
    /// Scalar fields are overwritten verbatim; an empty `goal`/`why` clears
    /// the field. List fields go through the transcoder, which strips blank
    /// lines. Persistence is the caller's job.
    pub fn apply_to(&self, step: &mut Step) {
        step.title = self.title.clone();
        step.goal = optional(&self.goal);
        step.why = optional(&self.why);
        step.how = text_to_list(&self.how_text);
        step.kpis = text_to_list(&self.kpis_text);
        step.deliverables = text_to_list(&self.deliverables_text);
        step.toolbox = text_to_toolbox(&self.toolbox_text);
    }
}

fn optional(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Errors from parsing an edit form.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("edit form is missing required section {0:?}")]
    MissingField(&'static str),

    #[error("edit form has unknown section {0:?}")]
    UnknownSection(String),

    #[error("edit form has content before the first section heading: {0:?}")]
    Preamble(String),
}

const SECTIONS: [&str; 7] = [
    "Title",
    "Goal",
    "Why",
    "How",
    "KPIs",
    "Deliverables",
    "Toolbox",
];

/// Render the edit form for a step, pre-filled with its current values.
pub fn render_step_form(step: &Step) -> String {
    let mut out = String::new();
    push_section(&mut out, "Title", &step.title);
    push_section(&mut out, "Goal", step.goal.as_deref().unwrap_or(""));
    push_section(&mut out, "Why", step.why.as_deref().unwrap_or(""));
    push_section(&mut out, "How (one item per line)", &list_to_text(&step.how));
    push_section(&mut out, "KPIs (one per line)", &list_to_text(&step.kpis));
    push_section(
        &mut out,
        "Deliverables (one per line)",
        &list_to_text(&step.deliverables),
    );
    push_section(
        &mut out,
        "Toolbox (Name - https://url, one per line)",
        &toolbox_to_text(&step.toolbox),
    );
    out
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    out.push_str("## ");
    out.push_str(heading);
    out.push('\n');
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
    out.push('\n');
}

/// Parse an edited form back into a bundle.
///
/// Section headings are `## <Field>`; a parenthesized hint after the field
/// name is ignored, so edited forms keep working if the hint is deleted or
/// left in place. All seven sections are required (an empty section is a
/// valid empty value). Duplicate sections resolve to the first occurrence.
pub fn parse_step_form(text: &str) -> Result<StepEdit, EditError> {
    let mut sections: Vec<(String, Vec<&str>)> = Vec::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("## ") {
            let name = match rest.split_once(" (") {
                Some((name, _hint)) => name,
                None => rest,
            };
            sections.push((name.trim().to_owned(), Vec::new()));
        } else if let Some((_, body)) = sections.last_mut() {
            body.push(line);
        } else if !line.trim().is_empty() {
            return Err(EditError::Preamble(line.trim().to_owned()));
        }
    }

    for (name, _) in &sections {
        if !SECTIONS.contains(&name.as_str()) {
            return Err(EditError::UnknownSection(name.clone()));
        }
    }

    let take = |wanted: &'static str| -> Result<String, EditError> {
        sections
            .iter()
            .find(|(name, _)| name == wanted)
            .map(|(_, body)| body.join("\n").trim().to_owned())
            .ok_or(EditError::MissingField(wanted))
    };

    Ok(StepEdit {
        title: take("Title")?,
        goal: take("Goal")?,
        why: take("Why")?,
        how_text: take("How")?,
        kpis_text: take("KPIs")?,
        deliverables_text: take("Deliverables")?,
        toolbox_text: take("Toolbox")?,
    })
}
