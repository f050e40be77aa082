//! File-backed storage for playbook documents.
//!
//! A playbook is a JSON document describing a marketing plan as a tree of
//! stages and steps. This crate owns the document shape ([`models`]), the
//! fixed plan-key registry ([`registry`]), and the load/save/import store
//! over the backing files ([`store`]).

pub mod config;
pub mod models;
pub mod registry;
pub mod seed;
pub mod store;

pub use config::StoreConfig;
pub use models::{PlanDocument, Stage, Step, ToolRef};
pub use registry::{PLANS, PlanEntry};
pub use store::{PlanStore, StoreError};
