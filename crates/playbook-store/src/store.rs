//! Load/save/import store over the plan document files.
//!
//! Every operation resolves the plan key through the [`registry`] first, so
//! an unknown key never touches the filesystem. Saves are whole-file
//! overwrites of the pretty-printed document; there is no partial or merge
//! write. Import accepts arbitrary JSON (see
//! [`PlanStore::replace_from_import`]).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::models::PlanDocument;
use crate::registry::{self, PlanEntry};

/// Errors that can occur while loading, saving or importing a document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key has no entry in the fixed plan registry.
    #[error("unknown plan key {0:?} (expected one of: b2c, product, b2b)")]
    UnknownPlanKey(String),

    /// Reading or writing a backing file failed.
    #[error("{context} {path}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The backing file is not valid JSON or not document-shaped.
    #[error("malformed plan document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Imported bytes are not valid JSON. Nothing was written to disk.
    #[error("import rejected, not valid JSON: {0}")]
    InvalidImport(serde_json::Error),

    /// Serializing a document failed.
    #[error("failed to serialize document: {0}")]
    Serialize(serde_json::Error),
}

/// File-backed store for plan documents.
#[derive(Debug, Clone)]
pub struct PlanStore {
    config: StoreConfig,
}

impl PlanStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Directory holding the plan document files.
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Resolve a plan key to its registry entry.
    pub fn entry(key: &str) -> Result<&'static PlanEntry, StoreError> {
        registry::find(key).ok_or_else(|| StoreError::UnknownPlanKey(key.to_owned()))
    }

    /// Resolve a plan key to the path of its backing file.
    pub fn document_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let entry = Self::entry(key)?;
        Ok(self.config.data_dir.join(entry.file_name))
    }

    /// Load the document for a plan key.
    pub fn load(&self, key: &str) -> Result<PlanDocument, StoreError> {
        let path = self.document_path(key)?;
        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            context: "failed to read",
            path: path.clone(),
            source,
        })?;
        let document: PlanDocument =
            serde_json::from_str(&contents).map_err(|source| StoreError::MalformedDocument {
                path: path.clone(),
                source,
            })?;
        debug!(key, path = %path.display(), stages = document.stages.len(), "loaded plan document");
        Ok(document)
    }

    /// Save the full document for a plan key, overwriting the backing file.
    ///
    /// Output is pretty-printed with 2-space indentation, field order
    /// following the struct declaration order, and non-ASCII text left
    /// unescaped. Creates the data directory if missing.
    pub fn save(&self, key: &str, document: &PlanDocument) -> Result<(), StoreError> {
        let path = self.document_path(key)?;
        let rendered = Self::export_string(document)?;
        self.write_file(&path, &rendered)?;
        debug!(key, path = %path.display(), "saved plan document");
        Ok(())
    }

    /// Replace the stored document from raw imported bytes.
    ///
    /// The bytes are parsed as arbitrary JSON; on parse failure nothing on
    /// disk is touched. On success the parsed value is written verbatim,
    /// WITHOUT validating that it matches the document shape. A value that
    /// does not parse as a [`PlanDocument`] is logged as a warning, since
    /// the next `load` of this key will fail.
    pub fn replace_from_import(&self, key: &str, raw: &[u8]) -> Result<(), StoreError> {
        let path = self.document_path(key)?;

        let value: serde_json::Value =
            serde_json::from_slice(raw).map_err(StoreError::InvalidImport)?;

        if serde_json::from_value::<PlanDocument>(value.clone()).is_err() {
            warn!(key, "imported JSON is not plan-document-shaped; writing it anyway");
        }

        let mut rendered = serde_json::to_string_pretty(&value).map_err(StoreError::Serialize)?;
        rendered.push('\n');
        self.write_file(&path, &rendered)?;
        debug!(key, path = %path.display(), bytes = raw.len(), "replaced plan document from import");
        Ok(())
    }

    /// Render a document exactly as [`PlanStore::save`] writes it. This is
    /// the payload for the export surface.
    pub fn export_string(document: &PlanDocument) -> Result<String, StoreError> {
        let mut rendered =
            serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;
        rendered.push('\n');
        Ok(rendered)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.config.data_dir).map_err(|source| StoreError::Io {
            context: "failed to create data directory",
            path: self.config.data_dir.clone(),
            source,
        })?;
        std::fs::write(path, contents).map_err(|source| StoreError::Io {
            context: "failed to write",
            path: path.to_path_buf(),
            source,
        })
    }
}
