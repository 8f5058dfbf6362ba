//! Compact project summary for list displays.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{CrispDmPhaseId, ProjectType, WorkspaceProject};

/// Summary of a project for list views: essential metadata plus progress
/// counts, without the full feature and phase payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub current_phase: CrispDmPhaseId,
    pub completed_phases: usize,
    pub total_phases: usize,
    pub feature_count: usize,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&WorkspaceProject> for ProjectSummary {
    fn from(project: &WorkspaceProject) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            project_type: project.project_type,
            current_phase: project.current_phase,
            completed_phases: project.completed_phases_count(),
            total_phases: project.phases.len(),
            feature_count: project.features.len(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
