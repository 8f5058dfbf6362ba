//! Project sessions: focused work on one open project.
//!
//! A [`ProjectSession`] wraps one project for phase navigation, phase status
//! changes, feature work and metadata edits. Sessions over stored user
//! projects persist every edit directly. Sessions over read-only example
//! templates accumulate navigation and phase progress in a session-local
//! draft, and the first structural edit (features, metadata) materializes the
//! example into a new stored project carrying that draft along; the caller
//! learns about the identity swap through [`MutationOutcome::Materialized`].

use std::sync::Arc;

use tokio::task;

use crate::{
    error::{Result, WerkstattError},
    guidance::{self, PhaseGuidance, PrerequisitePolicy, TutorHint},
    ids,
    models::{CrispDmPhaseId, Feature, PhaseStatus, WorkspaceProject},
    params::{FeatureCreate, FeatureUpdate, UpdateProject},
    workspace::Workspace,
};

mod mutator;


pub use mutator::{DraftOverlay, MutationOutcome, ProjectEdit};
use mutator::{CloneOnWriteMutator, DirectMutator, ProjectMutator};

/// An open project with its mutation strategy and guidance policy.
pub struct ProjectSession {
    workspace: Workspace,
    project_id: String,
    project: WorkspaceProject,
    draft: DraftOverlay,
    mutator: Arc<dyn ProjectMutator>,
    policy: PrerequisitePolicy,
}

impl ProjectSession {
    /// Opens a session on a project: the user store is consulted first, then
    /// the example registry. The mutation strategy is fixed here and changes
    /// only through materialization.
    pub async fn open(workspace: &Workspace, id: &str) -> Result<ProjectSession> {
        let project = workspace
            .get_project(id)
            .await?
            .ok_or_else(|| WerkstattError::ProjectNotFound { id: id.to_string() })?;

        let mutator: Arc<dyn ProjectMutator> = if ids::is_example_id(id) {
            Arc::new(CloneOnWriteMutator)
        } else {
            Arc::new(DirectMutator)
        };

        Ok(ProjectSession {
            workspace: workspace.clone(),
            project_id: id.to_string(),
            project,
            draft: DraftOverlay::default(),
            mutator,
            policy: PrerequisitePolicy::default(),
        })
    }

    /// Replaces the guidance policy for this session.
    pub fn with_policy(mut self, policy: PrerequisitePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Id of the open project. Changes when an example materializes.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The current session view of the project, including any draft state.
    pub fn project(&self) -> &WorkspaceProject {
        &self.project
    }

    /// Whether edits persist directly. False only for a still-pristine
    /// example session.
    pub fn is_materialized(&self) -> bool {
        !ids::is_example_id(&self.project_id)
    }

    /// The unpersisted draft. Empty for materialized sessions.
    pub fn draft(&self) -> &DraftOverlay {
        &self.draft
    }

    // Phase navigation. Viewing is unrestricted: prerequisite warnings are
    // advisory and never block.

    /// Navigates to a phase. Draft-only for unmaterialized examples.
    pub async fn go_to_phase(&mut self, phase: CrispDmPhaseId) -> Result<MutationOutcome> {
        if self.is_materialized() {
            self.mutate(ProjectEdit::SetCurrentPhase(phase)).await
        } else {
            self.project.current_phase = phase;
            self.draft.current_phase = Some(phase);
            Ok(MutationOutcome::Updated(self.project.clone()))
        }
    }

    /// Moves one phase forward. A no-op at the last phase.
    pub async fn go_to_next_phase(&mut self) -> Result<MutationOutcome> {
        match self.project.current_phase.next() {
            Some(next) => self.go_to_phase(next).await,
            None => Ok(MutationOutcome::Updated(self.project.clone())),
        }
    }

    /// Moves one phase back. A no-op at the first phase.
    pub async fn go_to_previous_phase(&mut self) -> Result<MutationOutcome> {
        match self.project.current_phase.previous() {
            Some(previous) => self.go_to_phase(previous).await,
            None => Ok(MutationOutcome::Updated(self.project.clone())),
        }
    }

    /// Marks the current phase completed. Draft-only for unmaterialized
    /// examples.
    pub async fn complete_current_phase(&mut self) -> Result<MutationOutcome> {
        self.set_phase_status(self.project.current_phase, PhaseStatus::Completed)
            .await
    }

    /// Marks a phase as in progress. Draft-only for unmaterialized examples.
    pub async fn mark_phase_in_progress(
        &mut self,
        phase: CrispDmPhaseId,
    ) -> Result<MutationOutcome> {
        self.set_phase_status(phase, PhaseStatus::InProgress).await
    }

    async fn set_phase_status(
        &mut self,
        phase: CrispDmPhaseId,
        status: PhaseStatus,
    ) -> Result<MutationOutcome> {
        if self.is_materialized() {
            self.mutate(ProjectEdit::SetPhaseStatus { phase, status })
                .await
        } else {
            let now = jiff::Timestamp::now();
            mutator::apply_edit(
                &mut self.project,
                &ProjectEdit::SetPhaseStatus { phase, status },
                now,
            )?;
            self.draft.phases = Some(self.project.phases.clone());
            Ok(MutationOutcome::Updated(self.project.clone()))
        }
    }

    // Structural edits. These go through the mutation strategy and
    // materialize an example session on first use.

    /// Adds a feature with a freshly minted feature id.
    pub async fn add_feature(&mut self, params: &FeatureCreate) -> Result<MutationOutcome> {
        let feature_type = params.validate()?;
        let feature = Feature {
            id: ids::mint_feature_id(),
            name: params.name.clone(),
            feature_type,
            description: params.description.clone().unwrap_or_default(),
            is_target: params.is_target,
        };
        self.mutate(ProjectEdit::AddFeature(feature)).await
    }

    /// Partially updates a feature.
    pub async fn update_feature(&mut self, params: &FeatureUpdate) -> Result<MutationOutcome> {
        let feature_type = params.validate()?;
        self.mutate(ProjectEdit::UpdateFeature {
            params: params.clone(),
            feature_type,
        })
        .await
    }

    /// Removes a feature by id.
    pub async fn remove_feature(&mut self, feature_id: &str) -> Result<MutationOutcome> {
        self.mutate(ProjectEdit::RemoveFeature(feature_id.to_string()))
            .await
    }

    /// Partially updates project metadata.
    pub async fn update_project(&mut self, params: &UpdateProject) -> Result<MutationOutcome> {
        let project_type = params.validate()?;
        self.mutate(ProjectEdit::UpdateMetadata {
            params: params.clone(),
            project_type,
        })
        .await
    }

    /// Replaces the whole project state, keeping id and creation time.
    pub async fn replace_project(&mut self, project: WorkspaceProject) -> Result<MutationOutcome> {
        self.mutate(ProjectEdit::Replace(Box::new(project))).await
    }

    /// Re-reads the project from its source. For an unmaterialized example
    /// the draft is re-applied on top of the pristine template.
    pub async fn refresh(&mut self) -> Result<()> {
        let mut project = self
            .workspace
            .get_project(&self.project_id)
            .await?
            .ok_or_else(|| WerkstattError::ProjectNotFound {
                id: self.project_id.clone(),
            })?;
        if !self.is_materialized() {
            self.draft.apply(&mut project);
        }
        self.project = project;
        Ok(())
    }

    // Derived accessors over the session view.

    /// Index of the current phase in the canonical sequence.
    pub fn current_phase_index(&self) -> usize {
        self.project.current_phase_index()
    }

    /// Overall progress as a rounded percentage.
    pub fn progress_percent(&self) -> u8 {
        guidance::progress_percent(&self.project)
    }

    /// Guidance block for a phase, evaluated against the session view.
    pub fn phase_guidance(&self, phase: CrispDmPhaseId) -> PhaseGuidance {
        guidance::phase_guidance(&self.project, phase, &self.policy)
    }

    /// Static hints for the current phase.
    pub fn tutor_hints(&self) -> Vec<TutorHint> {
        guidance::contextual_hints(&self.project)
    }

    async fn mutate(&mut self, edit: ProjectEdit) -> Result<MutationOutcome> {
        let mutator = Arc::clone(&self.mutator);
        let db_path = self.workspace.database_path().clone();
        let project = self.project.clone();

        let outcome = task::spawn_blocking(move || mutator.mutate(&db_path, &project, &edit))
            .await
            .map_err(|e| WerkstattError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        match &outcome {
            MutationOutcome::Updated(project) => {
                self.project = project.clone();
            }
            MutationOutcome::Materialized { project, .. } => {
                // Identity swap order: id, then strategy, then draft.
                self.project_id = project.id.clone();
                self.project = project.clone();
                self.mutator = Arc::new(DirectMutator);
                self.draft = DraftOverlay::default();
            }
        }
        Ok(outcome)
    }
}
