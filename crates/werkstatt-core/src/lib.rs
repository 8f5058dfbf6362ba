//! Core library of the DS Werkstatt workspace engine.
//!
//! This crate provides the business logic for the CRISP-DM learning
//! workspace: project and feature management, phase navigation with
//! clone-on-write example sessions, the embedded example registry, the
//! guidance engine, and `.mltutor` import/export.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use werkstatt_core::{WorkspaceBuilder, params::CreateProject, ProjectSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open a workspace
//! let workspace = WorkspaceBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a project
//! let create_params = CreateProject {
//!     name: "Kundenabwanderung".to_string(),
//!     project_type: Some("klassifikation".to_string()),
//!     ..Default::default()
//! };
//! let project = workspace.create_project(&create_params).await?;
//! println!("Angelegt: {}", project);
//!
//! // Work on it through a session
//! let mut session = ProjectSession::open(&workspace, &project.id).await?;
//! session.complete_current_phase().await?;
//! println!("Fortschritt: {}%", session.progress_percent());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod guidance;
pub mod ids;
pub mod models;
pub mod params;
pub mod registry;
pub mod session;
pub mod workspace;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Features, LocalDateTime, MaterializedNotice, OperationStatus,
    ProjectSummaries, UpdateResult,
};
pub use error::{Result, WerkstattError};
pub use guidance::{PhaseGuidance, PrerequisitePolicy, TutorHint};
pub use models::{
    CrispDmPhase, CrispDmPhaseId, Feature, FeatureType, PhaseStatus, ProjectDocument,
    ProjectSummary, ProjectType, WorkspaceProject,
};
pub use params::{CreateProject, FeatureCreate, FeatureUpdate, UpdateProject};
pub use session::{MutationOutcome, ProjectEdit, ProjectSession};
pub use workspace::{
    ImportOutcome, ImportValidation, Workspace, WorkspaceBuilder, WorkspaceMode, WorkspaceState,
};
