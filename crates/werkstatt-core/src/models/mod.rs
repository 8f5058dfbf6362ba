//! Data models for workspace projects.
//!
//! This module contains the core domain models of the DS Werkstatt engine:
//! the six-phase CRISP-DM sequence, per-phase status records, features, the
//! project itself, list summaries, and the `.mltutor` transport document.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation.

pub mod document;
pub mod feature;
pub mod phase;
pub mod project;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use document::{integrity_hash, ProjectDocument, EXPORT_VERSION, SUPPORTED_VERSIONS};
pub use feature::{Feature, FeatureType, ProjectType};
pub use phase::{default_phases, CrispDmPhase, CrispDmPhaseId, PhaseStatus};
pub use project::WorkspaceProject;
pub use summary::ProjectSummary;
