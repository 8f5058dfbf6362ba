//! Mutation strategies for project sessions.
//!
//! A session picks its strategy once, at open time, based on the project's id
//! namespace: stored user projects get [`DirectMutator`], example templates
//! get [`CloneOnWriteMutator`]. Every mutation reports a [`MutationOutcome`]
//! so the caller can follow an identity swap without side channels.

use std::path::Path;

use jiff::Timestamp;

use crate::{
    db::Database,
    error::{Result, WerkstattError},
    ids,
    models::{default_phases, CrispDmPhase, CrispDmPhaseId, Feature, PhaseStatus, WorkspaceProject},
    params::{FeatureUpdate, UpdateProject},
};

/// A single edit applied through a session.
#[derive(Debug, Clone)]
pub enum ProjectEdit {
    /// Navigate to a phase
    SetCurrentPhase(CrispDmPhaseId),
    /// Change the status of one phase
    SetPhaseStatus {
        phase: CrispDmPhaseId,
        status: PhaseStatus,
    },
    /// Append a feature
    AddFeature(Feature),
    /// Partially update a feature
    UpdateFeature {
        params: FeatureUpdate,
        feature_type: Option<crate::models::FeatureType>,
    },
    /// Remove a feature by id
    RemoveFeature(String),
    /// Partially update project metadata
    UpdateMetadata {
        params: UpdateProject,
        project_type: Option<crate::models::ProjectType>,
    },
    /// Replace the whole project state (id and created_at keep)
    Replace(Box<WorkspaceProject>),
}

/// What a mutation did to the session's project.
#[derive(Debug, Clone)]
pub enum MutationOutcome {
    /// The project was updated in place
    Updated(WorkspaceProject),
    /// The edit materialized a read-only example into a new stored project.
    /// `replaced_id` is the example id the session was opened on.
    Materialized {
        project: WorkspaceProject,
        replaced_id: String,
    },
}

impl MutationOutcome {
    /// The project state after the mutation.
    pub fn project(&self) -> &WorkspaceProject {
        match self {
            MutationOutcome::Updated(project) => project,
            MutationOutcome::Materialized { project, .. } => project,
        }
    }
}

/// Unpersisted session-local state for an example project: navigation and
/// phase progress the learner accumulated before the first structural edit.
#[derive(Debug, Clone, Default)]
pub struct DraftOverlay {
    pub current_phase: Option<CrispDmPhaseId>,
    pub phases: Option<Vec<CrispDmPhase>>,
}

impl DraftOverlay {
    /// Whether the overlay holds anything.
    pub fn is_empty(&self) -> bool {
        self.current_phase.is_none() && self.phases.is_none()
    }

    /// Applies the overlay onto a pristine project snapshot.
    pub fn apply(&self, project: &mut WorkspaceProject) {
        if let Some(phase) = self.current_phase {
            project.current_phase = phase;
        }
        if let Some(ref phases) = self.phases {
            project.phases = phases.clone();
        }
    }
}

/// Strategy for persisting session edits.
pub(super) trait ProjectMutator: Send + Sync {
    fn mutate(
        &self,
        db_path: &Path,
        project: &WorkspaceProject,
        edit: &ProjectEdit,
    ) -> Result<MutationOutcome>;
}

/// Strategy for stored user projects: every edit is a store update.
pub(super) struct DirectMutator;

impl ProjectMutator for DirectMutator {
    fn mutate(
        &self,
        db_path: &Path,
        project: &WorkspaceProject,
        edit: &ProjectEdit,
    ) -> Result<MutationOutcome> {
        let now = Timestamp::now();
        let mut updated = project.clone();
        apply_edit(&mut updated, edit, now)?;
        updated.updated_at = now;

        let mut db = Database::new(db_path)?;
        if !db.replace_project(&updated)? {
            return Err(WerkstattError::ProjectNotFound {
                id: updated.id.clone(),
            });
        }
        Ok(MutationOutcome::Updated(updated))
    }
}

/// Strategy for example templates: the first structural edit clones the
/// example (including whatever the session drafted) into a new stored user
/// project, in one transaction, and reports the identity swap.
pub(super) struct CloneOnWriteMutator;

impl ProjectMutator for CloneOnWriteMutator {
    fn mutate(
        &self,
        db_path: &Path,
        project: &WorkspaceProject,
        edit: &ProjectEdit,
    ) -> Result<MutationOutcome> {
        let now = Timestamp::now();
        let replaced_id = project.id.clone();

        // The given project is the session view: the pristine template with
        // the draft overlay already applied. The clone keeps that state.
        let mut clone = project.clone();
        clone.id = ids::mint_project_id();
        clone.created_at = now;
        clone.updated_at = now;
        apply_edit(&mut clone, edit, now)?;

        let mut db = Database::new(db_path)?;
        db.insert_project(&clone)?;

        Ok(MutationOutcome::Materialized {
            project: clone,
            replaced_id,
        })
    }
}

/// Applies an edit to an in-memory project.
pub(super) fn apply_edit(
    project: &mut WorkspaceProject,
    edit: &ProjectEdit,
    now: Timestamp,
) -> Result<()> {
    match edit {
        ProjectEdit::SetCurrentPhase(phase) => {
            project.current_phase = *phase;
        }
        ProjectEdit::SetPhaseStatus { phase, status } => {
            let record = &mut project.phases[phase.index()];
            record.status = *status;
            record.completed_at = match status {
                PhaseStatus::Completed => Some(now),
                _ => None,
            };
        }
        ProjectEdit::AddFeature(feature) => {
            project.features.push(feature.clone());
        }
        ProjectEdit::UpdateFeature {
            params,
            feature_type,
        } => {
            let feature = project
                .features
                .iter_mut()
                .find(|f| f.id == params.id)
                .ok_or_else(|| WerkstattError::FeatureNotFound {
                    id: params.id.clone(),
                })?;
            if let Some(ref name) = params.name {
                feature.name = name.clone();
            }
            if let Some(feature_type) = feature_type {
                feature.feature_type = *feature_type;
            }
            if let Some(ref description) = params.description {
                feature.description = description.clone();
            }
            if let Some(is_target) = params.is_target {
                feature.is_target = is_target;
            }
        }
        ProjectEdit::RemoveFeature(feature_id) => {
            let before = project.features.len();
            project.features.retain(|f| f.id != *feature_id);
            if project.features.len() == before {
                return Err(WerkstattError::FeatureNotFound {
                    id: feature_id.clone(),
                });
            }
        }
        ProjectEdit::UpdateMetadata {
            params,
            project_type,
        } => {
            if let Some(ref name) = params.name {
                project.name = name.clone();
            }
            if let Some(ref description) = params.description {
                project.description = description.clone();
            }
            if let Some(project_type) = project_type {
                project.project_type = *project_type;
            }
            if let Some(ref business_goal) = params.business_goal {
                project.business_goal = Some(business_goal.clone());
            }
            if let Some(ref success_criteria) = params.success_criteria {
                project.success_criteria = Some(success_criteria.clone());
            }
            if let Some(ref data_source) = params.data_source {
                project.data_source = Some(data_source.clone());
            }
            if let Some(ref selected_dataset) = params.selected_dataset {
                project.selected_dataset = Some(selected_dataset.clone());
            }
        }
        ProjectEdit::Replace(replacement) => {
            let id = project.id.clone();
            let created_at = project.created_at;
            *project = (**replacement).clone();
            project.id = id;
            project.created_at = created_at;
            // Replacements may carry phases in any order; SetPhaseStatus
            // indexes by canonical position, so restore that order here.
            let mut canonical = default_phases();
            for phase in project.phases.drain(..) {
                let idx = phase.id.index();
                canonical[idx] = phase;
            }
            project.phases = canonical;
        }
    }
    Ok(())
}
