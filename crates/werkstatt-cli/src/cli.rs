//! Command handlers bridging clap arguments and the core workspace API.

use anyhow::{Context, Result};
use werkstatt_core::{
    params::parse_phase, CreateResult, DeleteResult, Features, MaterializedNotice,
    MutationOutcome, OperationStatus, ProjectSession, ProjectSummaries, ProjectSummary,
    UpdateResult, Workspace,
};

use crate::args::{FeatureCommands, PhaseCommands, ProjectCommands, WorkspaceCommands};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher holding the workspace and the output renderer.
pub struct Cli {
    workspace: Workspace,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(workspace: Workspace, renderer: TerminalRenderer) -> Self {
        Self {
            workspace,
            renderer,
        }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self
                    .workspace
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(&CreateResult(project).to_string())
            }
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Examples => {
                let summaries: Vec<ProjectSummary> = self
                    .workspace
                    .example_projects()
                    .context("Failed to load example projects")?
                    .iter()
                    .map(ProjectSummary::from)
                    .collect();
                self.renderer
                    .render(&ProjectSummaries::new(summaries).to_string())
            }
            ProjectCommands::Show(args) => {
                match self
                    .workspace
                    .get_project(&args.id)
                    .await
                    .context("Failed to load project")?
                {
                    Some(project) => self.renderer.render(&project.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Kein Projekt mit der ID `{}` gefunden.",
                            args.id
                        ))
                        .to_string(),
                    ),
                }
            }
            ProjectCommands::Update(args) => {
                let id = args.id.clone();
                match self
                    .workspace
                    .update_project(&args.into())
                    .await
                    .context("Failed to update project")?
                {
                    Some(project) => self.renderer.render(&UpdateResult(project).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Kein Projekt mit der ID `{id}` gefunden."
                        ))
                        .to_string(),
                    ),
                }
            }
            ProjectCommands::Delete(args) => {
                if !args.confirm {
                    return self.renderer.render(
                        &OperationStatus::failure(
                            "Löschen nicht bestätigt. Wiederhole den Befehl mit --confirm.",
                        )
                        .to_string(),
                    );
                }
                let existed = self
                    .workspace
                    .delete_project(&args.id)
                    .await
                    .context("Failed to delete project")?;
                self.renderer
                    .render(&DeleteResult::new(args.id, existed).to_string())
            }
            ProjectCommands::Clone(args) => {
                let clone = self
                    .workspace
                    .clone_project(&args.id)
                    .await
                    .context("Failed to clone project")?;
                self.renderer.render(&CreateResult(clone).to_string())
            }
            ProjectCommands::Export(args) => {
                let path = self
                    .workspace
                    .export_to_file(&args.id, args.output)
                    .await
                    .context("Failed to export project")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Projekt exportiert nach `{}`.",
                        path.display()
                    ))
                    .to_string(),
                )
            }
            ProjectCommands::Import(args) => {
                let outcome = self
                    .workspace
                    .import_from_file(&args.file)
                    .await
                    .context("Failed to import project")?;
                for warning in &outcome.warnings {
                    self.renderer
                        .render(&OperationStatus::failure(warning.as_str()).to_string())?;
                }
                self.renderer
                    .render(&CreateResult(outcome.project).to_string())
            }
        }
    }

    pub async fn handle_phase_command(&self, command: PhaseCommands) -> Result<()> {
        match command {
            PhaseCommands::Goto(args) => {
                let phase = parse_phase(&args.phase)?;
                let mut session = self.open_session(&args.id).await?;
                let outcome = session
                    .go_to_phase(phase)
                    .await
                    .context("Failed to change phase")?;
                self.render_outcome(&session, &outcome)
            }
            PhaseCommands::Next(args) => {
                let mut session = self.open_session(&args.id).await?;
                let outcome = session
                    .go_to_next_phase()
                    .await
                    .context("Failed to change phase")?;
                self.render_outcome(&session, &outcome)
            }
            PhaseCommands::Prev(args) => {
                let mut session = self.open_session(&args.id).await?;
                let outcome = session
                    .go_to_previous_phase()
                    .await
                    .context("Failed to change phase")?;
                self.render_outcome(&session, &outcome)
            }
            PhaseCommands::Complete(args) => {
                let mut session = self.open_session(&args.id).await?;
                let outcome = session
                    .complete_current_phase()
                    .await
                    .context("Failed to complete phase")?;
                self.render_outcome(&session, &outcome)
            }
            PhaseCommands::Start(args) => {
                let phase = parse_phase(&args.phase)?;
                let mut session = self.open_session(&args.id).await?;
                let outcome = session
                    .mark_phase_in_progress(phase)
                    .await
                    .context("Failed to change phase status")?;
                self.render_outcome(&session, &outcome)
            }
            PhaseCommands::Guide(args) => {
                let session = self.open_session(&args.id).await?;
                let phase = match args.phase {
                    Some(ref phase) => parse_phase(phase)?,
                    None => session.project().current_phase,
                };
                let guidance = session.phase_guidance(phase);

                let mut output = String::new();
                output.push_str(&format!("# {}\n\n", phase.name()));
                output.push_str(&format!("{}\n", guidance.introduction));
                if let Some(ref warning) = guidance.prerequisite.warning {
                    output.push_str(&format!("\n⚠ {warning}\n"));
                }
                output.push_str("\n## Ziele\n\n");
                for objective in guidance.objectives {
                    output.push_str(&format!("- {objective}\n"));
                }
                output.push_str("\n## Nächste Schritte\n\n");
                for step in guidance.next_steps {
                    output.push_str(&format!("- {step}\n"));
                }
                if !guidance.hints.is_empty() {
                    output.push_str("\n## Hinweise\n\n");
                    for hint in &guidance.hints {
                        output.push_str(&format!("**{}**: {}\n", hint.title, hint.content));
                    }
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_feature_command(&self, command: FeatureCommands) -> Result<()> {
        match command {
            FeatureCommands::Add(args) => {
                let mut session = self.open_session(&args.project_id).await?;
                let outcome = session
                    .add_feature(&args.into())
                    .await
                    .context("Failed to add feature")?;
                self.render_outcome(&session, &outcome)
            }
            FeatureCommands::List(args) => {
                let session = self.open_session(&args.id).await?;
                let features = Features::new(session.project().features.clone());
                self.renderer.render(&features.to_string())
            }
            FeatureCommands::Update(args) => {
                let mut session = self.open_session(&args.project_id).await?;
                let outcome = session
                    .update_feature(&args.into())
                    .await
                    .context("Failed to update feature")?;
                self.render_outcome(&session, &outcome)
            }
            FeatureCommands::Remove(args) => {
                let mut session = self.open_session(&args.project_id).await?;
                let outcome = session
                    .remove_feature(&args.feature_id)
                    .await
                    .context("Failed to remove feature")?;
                self.render_outcome(&session, &outcome)
            }
        }
    }

    pub async fn handle_workspace_command(&self, command: WorkspaceCommands) -> Result<()> {
        match command {
            WorkspaceCommands::Status => {
                let state = self
                    .workspace
                    .state()
                    .await
                    .context("Failed to load workspace state")?;
                let mut output = String::new();
                output.push_str("# Workspace\n\n");
                output.push_str(&format!(
                    "**Onboarding:** {}\n",
                    if state.onboarding_done {
                        "abgeschlossen"
                    } else {
                        "offen"
                    }
                ));
                output.push_str(&format!("**Modus:** {}\n\n", state.mode.as_str()));
                output.push_str(&ProjectSummaries::new(state.projects).to_string());
                self.renderer.render(&output)
            }
            WorkspaceCommands::Onboard => {
                self.workspace
                    .set_onboarding_done(true)
                    .await
                    .context("Failed to update onboarding state")?;
                self.renderer.render(
                    &OperationStatus::success("Onboarding als abgeschlossen markiert.")
                        .to_string(),
                )
            }
            WorkspaceCommands::Mode(args) => {
                let mode: werkstatt_core::WorkspaceMode = args.mode.into();
                self.workspace
                    .set_mode(mode)
                    .await
                    .context("Failed to set workspace mode")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Workspace-Modus auf `{}` gesetzt.",
                        mode.as_str()
                    ))
                    .to_string(),
                )
            }
            WorkspaceCommands::Reset(args) => {
                if !args.confirm {
                    return self.renderer.render(
                        &OperationStatus::failure(
                            "Zurücksetzen nicht bestätigt. Wiederhole den Befehl mit --confirm.",
                        )
                        .to_string(),
                    );
                }
                self.workspace
                    .reset()
                    .await
                    .context("Failed to reset workspace")?;
                self.renderer.render(
                    &OperationStatus::success("Workspace zurückgesetzt.").to_string(),
                )
            }
        }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let summaries: Vec<ProjectSummary> = self
            .workspace
            .list_projects()
            .await
            .context("Failed to list projects")?
            .iter()
            .map(ProjectSummary::from)
            .collect();
        self.renderer
            .render(&ProjectSummaries::new(summaries).to_string())
    }

    async fn open_session(&self, id: &str) -> Result<ProjectSession> {
        ProjectSession::open(&self.workspace, id)
            .await
            .context("Failed to open project")
    }

    fn render_outcome(&self, session: &ProjectSession, outcome: &MutationOutcome) -> Result<()> {
        if let Some(notice) = MaterializedNotice::from_outcome(outcome) {
            self.renderer.render(&notice.to_string())?;
            self.renderer.render("")?;
        }
        let project = session.project();
        self.renderer.render(&format!(
            "{project}\n**Fortschritt:** {}%\n",
            session.progress_percent()
        ))
    }
}
