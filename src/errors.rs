//! Typed error definitions for dir_flatten.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Only the propagated failure class lives here: a missing root and a
//! destination conflict are diagnostic events (see `report`), not errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("Failed to read directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Failed to move '{}' -> '{}': {source}", .from.display(), .to.display())]
    MoveFile {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Failed to remove emptied directory '{}': {source}", .path.display())]
    RemoveDir { path: PathBuf, source: io::Error },
}

impl FlattenError {
    /// Stable short code for structured logging.
    pub fn code(&self) -> &'static str {
        match self {
            FlattenError::ReadDir { .. } => "read_dir",
            FlattenError::MoveFile { .. } => "move_file",
            FlattenError::RemoveDir { .. } => "remove_dir",
        }
    }
}
