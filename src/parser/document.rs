//! Document loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a document could not be loaded
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("{} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The raw text of a study-notes file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read the whole file into memory
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::new(path, content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DocumentError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(source) => Err(DocumentError::Unreadable {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
