//! CRISP-DM phase identifiers and per-phase status records.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The six CRISP-DM phases in their canonical order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CrispDmPhaseId {
    BusinessUnderstanding,
    DataUnderstanding,
    DataPreparation,
    Modeling,
    Evaluation,
    Deployment,
}

impl CrispDmPhaseId {
    /// Canonical phase sequence. Every project's `phases` array follows this
    /// order, one entry per variant.
    pub const ALL: [CrispDmPhaseId; 6] = [
        CrispDmPhaseId::BusinessUnderstanding,
        CrispDmPhaseId::DataUnderstanding,
        CrispDmPhaseId::DataPreparation,
        CrispDmPhaseId::Modeling,
        CrispDmPhaseId::Evaluation,
        CrispDmPhaseId::Deployment,
    ];

    /// Position of this phase in the canonical sequence (0-based).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The phase after this one, if any.
    pub fn next(self) -> Option<CrispDmPhaseId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The phase before this one, if any.
    pub fn previous(self) -> Option<CrispDmPhaseId> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Kebab-case string representation used in storage and documents.
    pub fn as_str(self) -> &'static str {
        match self {
            CrispDmPhaseId::BusinessUnderstanding => "business-understanding",
            CrispDmPhaseId::DataUnderstanding => "data-understanding",
            CrispDmPhaseId::DataPreparation => "data-preparation",
            CrispDmPhaseId::Modeling => "modeling",
            CrispDmPhaseId::Evaluation => "evaluation",
            CrispDmPhaseId::Deployment => "deployment",
        }
    }

    /// Human-readable phase name.
    pub fn name(self) -> &'static str {
        match self {
            CrispDmPhaseId::BusinessUnderstanding => "Business Understanding",
            CrispDmPhaseId::DataUnderstanding => "Data Understanding",
            CrispDmPhaseId::DataPreparation => "Data Preparation",
            CrispDmPhaseId::Modeling => "Modeling",
            CrispDmPhaseId::Evaluation => "Evaluation",
            CrispDmPhaseId::Deployment => "Deployment",
        }
    }

    /// Short label for stepper-style displays.
    pub fn short_name(self) -> &'static str {
        match self {
            CrispDmPhaseId::BusinessUnderstanding => "Business",
            CrispDmPhaseId::DataUnderstanding => "Daten",
            CrispDmPhaseId::DataPreparation => "Vorbereitung",
            CrispDmPhaseId::Modeling => "Modell",
            CrispDmPhaseId::Evaluation => "Bewertung",
            CrispDmPhaseId::Deployment => "Deployment",
        }
    }

    /// One-line learner-facing description.
    pub fn description(self) -> &'static str {
        match self {
            CrispDmPhaseId::BusinessUnderstanding => "Projektziele verstehen und definieren",
            CrispDmPhaseId::DataUnderstanding => "Daten erkunden und Qualität prüfen",
            CrispDmPhaseId::DataPreparation => "Daten bereinigen und transformieren",
            CrispDmPhaseId::Modeling => "ML-Modelle trainieren und optimieren",
            CrispDmPhaseId::Evaluation => "Modellperformance bewerten",
            CrispDmPhaseId::Deployment => "Modell in Produktion bringen",
        }
    }
}

impl FromStr for CrispDmPhaseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business-understanding" => Ok(CrispDmPhaseId::BusinessUnderstanding),
            "data-understanding" => Ok(CrispDmPhaseId::DataUnderstanding),
            "data-preparation" => Ok(CrispDmPhaseId::DataPreparation),
            "modeling" => Ok(CrispDmPhaseId::Modeling),
            "evaluation" => Ok(CrispDmPhaseId::Evaluation),
            "deployment" => Ok(CrispDmPhaseId::Deployment),
            _ => Err(format!("Invalid CRISP-DM phase: {s}")),
        }
    }
}

impl fmt::Display for CrispDmPhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe enumeration of per-phase completion statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    /// Phase has not been started yet
    #[default]
    Pending,

    /// Phase is being worked on
    InProgress,

    /// Phase has been completed
    Completed,
}

impl FromStr for PhaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PhaseStatus::Pending),
            "in-progress" | "in_progress" => Ok(PhaseStatus::InProgress),
            "completed" => Ok(PhaseStatus::Completed),
            _ => Err(format!("Invalid phase status: {s}")),
        }
    }
}

impl PhaseStatus {
    /// Convert to database string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseStatus::Pending => "pending",
            PhaseStatus::InProgress => "in-progress",
            PhaseStatus::Completed => "completed",
        }
    }

    /// Status with a consistent icon for display.
    pub fn with_icon(self) -> &'static str {
        match self {
            PhaseStatus::Completed => "✓ Abgeschlossen",
            PhaseStatus::InProgress => "➤ In Arbeit",
            PhaseStatus::Pending => "○ Offen",
        }
    }
}

/// Per-phase status record within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrispDmPhase {
    /// Which phase this record tracks
    pub id: CrispDmPhaseId,

    /// Current completion status
    #[serde(default)]
    pub status: PhaseStatus,

    /// Timestamp of completion; set when status becomes `Completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl CrispDmPhase {
    /// A pristine record for the given phase.
    pub fn pending(id: CrispDmPhaseId) -> Self {
        Self {
            id,
            status: PhaseStatus::Pending,
            completed_at: None,
        }
    }
}

/// The canonical 6-entry, all-pending phase sequence every new project
/// starts with.
pub fn default_phases() -> Vec<CrispDmPhase> {
    CrispDmPhaseId::ALL.iter().map(|&id| CrispDmPhase::pending(id)).collect()
}
