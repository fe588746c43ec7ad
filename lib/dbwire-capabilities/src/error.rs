use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the scaffold operation can surface, one per fallible step.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to create directory at {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {path:?}: {source}")]
    WriteFile { path: PathBuf, source: io::Error },
}
