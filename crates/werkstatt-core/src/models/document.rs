//! The `.mltutor` import/export document.
//!
//! A document is self-contained: one project including its phases and
//! features, with no references to other projects. An optional SHA-256 hash
//! over the canonical project JSON guards against transport corruption.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::WorkspaceProject;
use crate::error::Result;

/// Version written into new export documents.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Document versions the importer accepts.
pub const SUPPORTED_VERSIONS: [&str; 1] = ["1.0.0"];

/// Transportable envelope around a single project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    /// Document format version
    pub version: String,

    /// When the document was produced (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<Timestamp>,

    /// The exported project
    pub project: WorkspaceProject,

    /// SHA-256 hex digest over the canonical project JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl ProjectDocument {
    /// Wraps a project into a current-version document with integrity hash.
    pub fn seal(project: WorkspaceProject, now: Timestamp) -> Result<Self> {
        let hash = integrity_hash(&project)?;
        Ok(Self {
            version: EXPORT_VERSION.to_string(),
            exported_at: Some(now),
            project,
            hash: Some(hash),
        })
    }

    /// Whether this document's version is one the importer accepts.
    pub fn version_supported(&self) -> bool {
        SUPPORTED_VERSIONS.contains(&self.version.as_str())
    }

    /// Verifies the embedded hash against the project payload.
    /// Returns `None` when the document carries no hash.
    pub fn verify_hash(&self) -> Result<Option<bool>> {
        match &self.hash {
            Some(expected) => Ok(Some(integrity_hash(&self.project)? == *expected)),
            None => Ok(None),
        }
    }
}

/// SHA-256 hex digest over the canonical JSON serialization of a project.
pub fn integrity_hash(project: &WorkspaceProject) -> Result<String> {
    let canonical = serde_json::to_string(project)?;
    let digest = Sha256::digest(canonical.as_bytes());
    Ok(hex::encode(digest))
}
