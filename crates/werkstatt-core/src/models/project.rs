//! Workspace project model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{default_phases, CrispDmPhase, CrispDmPhaseId, Feature, PhaseStatus, ProjectType};

/// A single learner project walking through the six CRISP-DM phases.
///
/// The `phases` array always has exactly one entry per [`CrispDmPhaseId`], in
/// canonical order, regardless of how the learner navigates. `current_phase`
/// is always a member of that sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProject {
    /// Opaque identifier; user projects and example templates use disjoint
    /// namespaces (see [`crate::ids`])
    pub id: String,

    /// Project name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Kind of project (classification, regression, clustering)
    #[serde(rename = "type", default)]
    pub project_type: ProjectType,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,

    /// The phase currently open in the workspace
    pub current_phase: CrispDmPhaseId,

    /// Per-phase status records, canonical order, always 6 entries
    pub phases: Vec<CrispDmPhase>,

    /// Described dataset columns, insertion order
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Business Understanding: goal statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_goal: Option<String>,

    /// Business Understanding: measurable success criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_criteria: Option<String>,

    /// Data Understanding: where the data comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// Id of a sample dataset from the open-data registry, if one is attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_dataset: Option<String>,

    /// Whether the project came pre-populated with sample data
    #[serde(default)]
    pub has_demo_data: bool,
}

impl WorkspaceProject {
    /// A freshly scaffolded project: first phase active, all phases pending,
    /// no features.
    pub fn scaffold(id: String, name: String, now: Timestamp) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            project_type: ProjectType::default(),
            created_at: now,
            updated_at: now,
            current_phase: CrispDmPhaseId::BusinessUnderstanding,
            phases: default_phases(),
            features: Vec::new(),
            business_goal: None,
            success_criteria: None,
            data_source: None,
            selected_dataset: None,
            has_demo_data: false,
        }
    }

    /// Index of `current_phase` in the canonical sequence.
    pub fn current_phase_index(&self) -> usize {
        self.current_phase.index()
    }

    /// Number of phases marked completed.
    pub fn completed_phases_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|p| p.status == PhaseStatus::Completed)
            .count()
    }

    /// Status record for one phase. The canonical-order invariant makes this
    /// an index lookup.
    pub fn phase(&self, id: CrispDmPhaseId) -> Option<&CrispDmPhase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Whether the given phase is marked completed.
    pub fn phase_completed(&self, id: CrispDmPhaseId) -> bool {
        self.phase(id)
            .is_some_and(|p| p.status == PhaseStatus::Completed)
    }

    /// Feature lookup by id.
    pub fn feature(&self, feature_id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == feature_id)
    }
}
