//! File-backed storage for the VitaSync document.

use std::fs;
use std::path::{Path, PathBuf};

use super::document::{read_document, write_document};
use super::error::DocumentError;
use crate::models::VitaSyncData;

/// Loads and saves the aggregate as a JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Conventional file name for the document.
    pub const DEFAULT_FILE_NAME: &'static str = "vitaSyncData.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the document from disk.
    ///
    /// A missing file is an I/O error; use [`load_or_create`](Self::load_or_create)
    /// to start fresh instead.
    pub fn load(&self) -> Result<VitaSyncData, DocumentError> {
        let text = fs::read_to_string(&self.path).map_err(|e| DocumentError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        read_document(&text)
    }

    /// Loads the document, or returns an empty aggregate named `name` if
    /// the file doesn't exist yet.
    pub fn load_or_create(&self, name: &str) -> Result<VitaSyncData, DocumentError> {
        if self.exists() {
            self.load()
        } else {
            Ok(VitaSyncData::new(name))
        }
    }

    /// Writes the document, replacing any previous contents.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, data: &VitaSyncData) -> Result<(), DocumentError> {
        let text = write_document(data)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DocumentError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&self.path, text).map_err(|e| DocumentError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}
