//! Domain logic for playbook documents: tree lookup, field transcoding,
//! step editing, and the session handle that ties them to the store.

pub mod edit;
pub mod lookup;
pub mod session;
pub mod transcode;

pub use edit::{EditError, StepEdit, parse_step_form, render_step_form};
pub use lookup::{SelectBy, find_stage, find_stage_mut, find_step, find_step_mut};
pub use session::{PlanSession, SessionError};
