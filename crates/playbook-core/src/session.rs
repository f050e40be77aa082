//! Session-scoped handle over one loaded plan document.
//!
//! The document is loaded once at session start and owned by the handle;
//! every read and edit goes through it explicitly. Edits mutate the
//! in-memory tree and then persist the whole document -- there is no other
//! mutation path and no ambient global state.

use thiserror::Error;
use tracing::info;

use playbook_store::{PlanDocument, PlanStore, Stage, Step, StoreError};

use crate::edit::StepEdit;
use crate::lookup::{self, SelectBy};

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stage not found: {0}")]
    StageNotFound(String),

    #[error("step not found in stage {stage:?}: {step}")]
    StepNotFound { stage: String, step: String },
}

/// An open editing session for one plan key.
#[derive(Debug)]
pub struct PlanSession {
    store: PlanStore,
    key: String,
    document: PlanDocument,
}

impl PlanSession {
    /// Load the document for `key` and take ownership of it for the
    /// session.
    pub fn open(store: PlanStore, key: &str) -> Result<Self, SessionError> {
        let entry = PlanStore::entry(key)?;
        let document = store.load(key)?;
        Ok(Self {
            store,
            key: entry.key.to_owned(),
            document,
        })
    }

    /// The canonical (short) plan key this session is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn document(&self) -> &PlanDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut PlanDocument {
        &mut self.document
    }

    /// Resolve a stage, surfacing a not-found error with the criterion.
    pub fn stage(&self, sel: SelectBy<'_>) -> Result<&Stage, SessionError> {
        lookup::find_stage(&self.document, sel).ok_or_else(|| stage_not_found(sel))
    }

    /// Resolve a step within a stage.
    pub fn step(
        &self,
        stage_sel: SelectBy<'_>,
        step_sel: SelectBy<'_>,
    ) -> Result<&Step, SessionError> {
        let stage = self.stage(stage_sel)?;
        lookup::find_step(stage, step_sel).ok_or_else(|| step_not_found(stage, step_sel))
    }

    pub fn stage_titles(&self) -> Vec<&str> {
        lookup::stage_titles(&self.document)
    }

    pub fn step_titles(&self, stage_sel: SelectBy<'_>) -> Result<Vec<&str>, SessionError> {
        Ok(lookup::step_titles(self.stage(stage_sel)?))
    }

    /// Apply an edit bundle to one step and persist the whole document.
    ///
    /// On a lookup miss nothing is modified, in memory or on disk.
    pub fn edit_step(
        &mut self,
        stage_sel: SelectBy<'_>,
        step_sel: SelectBy<'_>,
        edit: &StepEdit,
    ) -> Result<(), SessionError> {
        let stage = lookup::find_stage_mut(&mut self.document, stage_sel)
            .ok_or_else(|| stage_not_found(stage_sel))?;
        let stage_title = stage.title.clone();
        let step = match lookup::find_step_mut(stage, step_sel) {
            Some(step) => step,
            None => {
                return Err(SessionError::StepNotFound {
                    stage: stage_title,
                    step: criterion_display(step_sel),
                });
            }
        };

        edit.apply_to(step);
        let step_title = step.title.clone();

        self.store.save(&self.key, &self.document)?;
        info!(key = %self.key, stage = %stage_title, step = %step_title, "step edited and saved");
        Ok(())
    }

    /// Persist the current in-memory document as-is.
    pub fn save(&self) -> Result<(), SessionError> {
        self.store.save(&self.key, &self.document)?;
        Ok(())
    }

    /// The document rendered exactly as the store writes it, for the
    /// export surface.
    pub fn export_string(&self) -> Result<String, SessionError> {
        Ok(PlanStore::export_string(&self.document)?)
    }
}

fn criterion_display(sel: SelectBy<'_>) -> String {
    match sel {
        SelectBy::Id(id) => format!("id {id:?}"),
        SelectBy::Title(title) => format!("title {title:?}"),
    }
}

fn stage_not_found(sel: SelectBy<'_>) -> SessionError {
    SessionError::StageNotFound(criterion_display(sel))
}

fn step_not_found(stage: &Stage, sel: SelectBy<'_>) -> SessionError {
    SessionError::StepNotFound {
        stage: stage.title.clone(),
        step: criterion_display(sel),
    }
}
