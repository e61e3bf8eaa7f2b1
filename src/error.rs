use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. All three abort the run before the output file is
/// replaced; there is no partial or best-effort output.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("no compiled artifact for unit '{unit}' at {}", .path.display())]
    NotFound { unit: String, path: PathBuf },

    #[error("malformed artifact for unit '{unit}' at {}: {reason}", .path.display())]
    MalformedArtifact {
        unit: String,
        path: PathBuf,
        reason: String,
    },

    #[error("failed to write merged ABI to {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },
}
