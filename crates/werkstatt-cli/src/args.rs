//! Command-line argument definitions using clap.
//!
//! This module implements the parameter wrapper pattern: each command gets a
//! clap-specific argument structure with an explicit conversion into the core
//! parameter types, so the core stays free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use werkstatt_core::params::{CreateProject, FeatureCreate, FeatureUpdate, UpdateProject};
use werkstatt_core::WorkspaceMode;

/// Main command-line interface of the DS Werkstatt workspace engine
///
/// DS Werkstatt guides learners through data science projects along the six
/// CRISP-DM phases. The CLI manages projects and their features, navigates
/// phases with tutor guidance, and imports/exports `.mltutor` project files.
#[derive(Parser)]
#[command(version, about, name = "dsw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/werkstatt/werkstatt.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the DS Werkstatt CLI
///
/// The CLI is organized into four command categories:
/// - `project`: Manage workspace projects (create, list, clone, export, ...)
/// - `phase`: Navigate the CRISP-DM phases of a project
/// - `feature`: Manage the features of a project
/// - `workspace`: Workspace-level settings and state
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Navigate the CRISP-DM phases of a project
    #[command(alias = "ph")]
    Phase {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Manage the features of a project
    #[command(alias = "f")]
    Feature {
        #[command(subcommand)]
        command: FeatureCommands,
    },
    /// Workspace settings and state
    #[command(alias = "w")]
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
}

/// Create a new project
#[derive(ClapArgs)]
pub struct CreateProjectArgs {
    /// Name of the project
    pub name: String,
    /// Optional description providing more context about the project
    #[arg(short, long)]
    pub description: Option<String>,
    /// Kind of project: klassifikation, regression or clustering
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,
    /// Business goal statement
    #[arg(long)]
    pub business_goal: Option<String>,
    /// Measurable success criteria
    #[arg(long)]
    pub success_criteria: Option<String>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            description: val.description,
            project_type: val.project_type,
            business_goal: val.business_goal,
            success_criteria: val.success_criteria,
        }
    }
}

/// Show details of a specific project
#[derive(ClapArgs)]
pub struct ShowProjectArgs {
    /// Id of the project to display (user project or example)
    pub id: String,
}

/// Update project metadata
#[derive(ClapArgs)]
pub struct UpdateProjectArgs {
    /// Id of the project to update
    pub id: String,
    /// New project name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New project type: klassifikation, regression or clustering
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,
    /// Business goal statement
    #[arg(long)]
    pub business_goal: Option<String>,
    /// Measurable success criteria
    #[arg(long)]
    pub success_criteria: Option<String>,
    /// Where the data comes from
    #[arg(long)]
    pub data_source: Option<String>,
    /// Id of an attached sample dataset
    #[arg(long)]
    pub selected_dataset: Option<String>,
}

impl From<UpdateProjectArgs> for UpdateProject {
    fn from(val: UpdateProjectArgs) -> Self {
        UpdateProject {
            id: val.id,
            name: val.name,
            description: val.description,
            project_type: val.project_type,
            business_goal: val.business_goal,
            success_criteria: val.success_criteria,
            data_source: val.data_source,
            selected_dataset: val.selected_dataset,
        }
    }
}

/// Delete a project permanently
#[derive(ClapArgs)]
pub struct DeleteProjectArgs {
    /// Id of the project to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Clone a project into a fresh copy
#[derive(ClapArgs)]
pub struct CloneProjectArgs {
    /// Id of the project or example to clone
    pub id: String,
}

/// Export a project to a `.mltutor` file
#[derive(ClapArgs)]
pub struct ExportProjectArgs {
    /// Id of the project to export
    pub id: String,
    /// Output file path. Defaults to a name derived from the project name
    /// and today's date
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Import a project from a `.mltutor` file
#[derive(ClapArgs)]
pub struct ImportProjectArgs {
    /// Path of the `.mltutor` file to import
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List all projects
    #[command(aliases = ["l", "ls"])]
    List,
    /// List the built-in example projects
    #[command(alias = "e")]
    Examples,
    /// Show details of a specific project
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Update project metadata
    #[command(alias = "u")]
    Update(UpdateProjectArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
    /// Clone a project or example into a fresh copy
    Clone(CloneProjectArgs),
    /// Export a project to a `.mltutor` file
    Export(ExportProjectArgs),
    /// Import a project from a `.mltutor` file
    Import(ImportProjectArgs),
}

/// Navigate to a specific phase
#[derive(ClapArgs)]
pub struct GotoPhaseArgs {
    /// Id of the project to work on
    pub id: String,
    /// Target phase, e.g. "data-understanding"
    pub phase: String,
}

/// Operate on the current phase of a project
#[derive(ClapArgs)]
pub struct ProjectIdArg {
    /// Id of the project to work on
    pub id: String,
}

/// Mark a phase as being worked on
#[derive(ClapArgs)]
pub struct StartPhaseArgs {
    /// Id of the project to work on
    pub id: String,
    /// Phase to mark as in progress, e.g. "modeling"
    pub phase: String,
}

/// Show tutor guidance for a phase
#[derive(ClapArgs)]
pub struct GuidePhaseArgs {
    /// Id of the project to show guidance for
    pub id: String,
    /// Phase to show guidance for. Defaults to the project's current phase
    pub phase: Option<String>,
}

#[derive(Subcommand)]
pub enum PhaseCommands {
    /// Navigate to a specific phase
    #[command(alias = "g")]
    Goto(GotoPhaseArgs),
    /// Move one phase forward
    #[command(alias = "n")]
    Next(ProjectIdArg),
    /// Move one phase back
    #[command(alias = "p")]
    Prev(ProjectIdArg),
    /// Mark the current phase as completed
    #[command(alias = "c")]
    Complete(ProjectIdArg),
    /// Mark a phase as being worked on
    Start(StartPhaseArgs),
    /// Show tutor guidance for a phase
    Guide(GuidePhaseArgs),
}

/// Add a new feature to a project
#[derive(ClapArgs)]
pub struct AddFeatureArgs {
    /// Id of the project to add the feature to
    pub project_id: String,
    /// Column name of the feature
    pub name: String,
    /// Data type: numerisch, kategorial, text or datum
    #[arg(short = 't', long = "type")]
    pub feature_type: Option<String>,
    /// What the column contains
    #[arg(short, long)]
    pub description: Option<String>,
    /// Mark this feature as the prediction target
    #[arg(long)]
    pub target: bool,
}

impl From<AddFeatureArgs> for FeatureCreate {
    fn from(val: AddFeatureArgs) -> Self {
        FeatureCreate {
            name: val.name,
            feature_type: val.feature_type,
            description: val.description,
            is_target: val.target,
        }
    }
}

/// Update a feature of a project
#[derive(ClapArgs)]
pub struct UpdateFeatureArgs {
    /// Id of the project the feature belongs to
    pub project_id: String,
    /// Id of the feature to update
    pub feature_id: String,
    /// New column name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New data type: numerisch, kategorial, text or datum
    #[arg(short = 't', long = "type")]
    pub feature_type: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Set or clear the prediction target flag
    #[arg(long)]
    pub target: Option<bool>,
}

impl From<UpdateFeatureArgs> for FeatureUpdate {
    fn from(val: UpdateFeatureArgs) -> Self {
        FeatureUpdate {
            id: val.feature_id,
            name: val.name,
            feature_type: val.feature_type,
            description: val.description,
            is_target: val.target,
        }
    }
}

/// Remove a feature from a project
#[derive(ClapArgs)]
pub struct RemoveFeatureArgs {
    /// Id of the project the feature belongs to
    pub project_id: String,
    /// Id of the feature to remove
    pub feature_id: String,
}

#[derive(Subcommand)]
pub enum FeatureCommands {
    /// Add a new feature to a project
    #[command(alias = "a")]
    Add(AddFeatureArgs),
    /// List the features of a project
    #[command(aliases = ["l", "ls"])]
    List(ProjectIdArg),
    /// Update a feature of a project
    #[command(alias = "u")]
    Update(UpdateFeatureArgs),
    /// Remove a feature from a project
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveFeatureArgs),
}

/// Set the workspace storage mode
#[derive(ClapArgs)]
pub struct SetModeArgs {
    /// Storage mode to use
    #[arg(value_enum)]
    pub mode: ModeArg,
}

/// Reset the workspace, removing all projects and settings
#[derive(ClapArgs)]
pub struct ResetWorkspaceArgs {
    /// Confirm the reset (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum WorkspaceCommands {
    /// Show workspace settings and project summaries
    #[command(alias = "s")]
    Status,
    /// Mark onboarding as completed
    Onboard,
    /// Set the workspace storage mode
    Mode(SetModeArgs),
    /// Reset the workspace, removing all projects and settings
    Reset(ResetWorkspaceArgs),
}

/// Command-line argument representation of the workspace storage mode
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Keep all data in the local database
    Local,
    /// Reserved for a future sync backend
    Sync,
}

impl From<ModeArg> for WorkspaceMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Local => WorkspaceMode::Local,
            ModeArg::Sync => WorkspaceMode::Sync,
        }
    }
}
