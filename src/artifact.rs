use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::MergeError;
use crate::fragment::AbiFragment;

/// The parts of a compiler artifact document the merger reads. Everything
/// else in the document (bytecode, metadata, source maps) is ignored.
#[derive(Debug, Deserialize)]
pub struct CompiledArtifact {
    pub abi: Vec<AbiFragment>,
}

/// Read-only view of the compiler output directory: one artifact document
/// per contract source unit at `<root>/<Unit>.sol/<Unit>.json`.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expected location of the artifact document for `unit`.
    ///
    /// The `.sol` suffix on the unit name is optional: `FeeCollector` and
    /// `FeeCollector.sol` resolve to the same document.
    pub fn artifact_path(&self, unit: &str) -> PathBuf {
        let stem = unit.trim().strip_suffix(".sol").unwrap_or(unit.trim());
        self.root
            .join(format!("{stem}.sol"))
            .join(format!("{stem}.json"))
    }

    /// Load and parse the compiled artifact for `unit`, extracting its ABI
    /// fragment collection.
    pub fn load(&self, unit: &str) -> Result<CompiledArtifact, MergeError> {
        let path = self.artifact_path(unit);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(MergeError::NotFound {
                    unit: unit.to_string(),
                    path,
                })
            }
            Err(e) => {
                return Err(MergeError::MalformedArtifact {
                    unit: unit.to_string(),
                    path,
                    reason: format!("read failed: {e}"),
                })
            }
        };

        let artifact: CompiledArtifact =
            serde_json::from_str(&text).map_err(|e| MergeError::MalformedArtifact {
                unit: unit.to_string(),
                path: path.clone(),
                reason: e.to_string(),
            })?;

        debug!(unit, fragments = artifact.abi.len(), "loaded artifact");
        Ok(artifact)
    }
}
