//! High-level workspace API for managing projects.
//!
//! This module provides the main [`Workspace`] interface of the DS Werkstatt
//! engine. The workspace coordinates between the SQLite project store, the
//! embedded example registry, and the import/export layer, and owns the
//! workspace-level settings (onboarding flag and storage mode).
//!
//! Every operation is async and opens its own database connection inside
//! `spawn_blocking`, so the workspace handle itself stays cheap to clone and
//! share.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ProjectSummary;

pub mod builder;
pub mod project_ops;
pub mod settings_ops;
pub mod transfer;


pub use builder::WorkspaceBuilder;
pub use transfer::{export_file_name, ImportOutcome, ImportValidation};

pub(crate) const SETTING_ONBOARDING_DONE: &str = "onboarding_done";
pub(crate) const SETTING_MODE: &str = "mode";

/// Main workspace interface for managing projects.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub(crate) db_path: PathBuf,
}

impl Workspace {
    /// Creates a new workspace with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &PathBuf {
        &self.db_path
    }
}

/// Where workspace data lives. `Sync` is reserved for a future backend mode;
/// the engine treats it as an opaque preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    #[default]
    Local,
    Sync,
}

impl WorkspaceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkspaceMode::Local => "local",
            WorkspaceMode::Sync => "sync",
        }
    }
}

impl FromStr for WorkspaceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(WorkspaceMode::Local),
            "sync" => Ok(WorkspaceMode::Sync),
            _ => Err(format!("Invalid workspace mode: {s}")),
        }
    }
}

/// Snapshot of the workspace: settings plus project summaries in creation
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    pub onboarding_done: bool,
    pub mode: WorkspaceMode,
    pub projects: Vec<ProjectSummary>,
}
