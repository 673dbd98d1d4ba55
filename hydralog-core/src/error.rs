//! Error types for the hydration core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by store mutations.
///
/// None of these are fatal; callers are expected to report them and
/// re-prompt. The state is left untouched when a mutation fails.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Intake and target amounts must be positive milliliter counts.
    #[error("Amount must be a positive number of milliliters, got {0}")]
    InvalidAmount(i32),
}

/// Errors that can occur reading or writing the persisted snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing the snapshot file.
    #[error("I/O error for {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    /// The in-memory state could not be serialized.
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}
