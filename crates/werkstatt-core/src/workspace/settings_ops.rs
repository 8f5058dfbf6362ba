//! Workspace settings and state operations.

use tokio::task;

use super::{Workspace, WorkspaceMode, WorkspaceState, SETTING_MODE, SETTING_ONBOARDING_DONE};
use crate::{
    db::Database,
    error::{Result, WerkstattError},
    models::ProjectSummary,
};

impl Workspace {
    /// Whether the learner has completed onboarding. Unset means false.
    pub async fn onboarding_done(&self) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok(db.get_setting(SETTING_ONBOARDING_DONE)?.as_deref() == Some("true"))
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Records whether onboarding has been completed.
    pub async fn set_onboarding_done(&self, done: bool) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_setting(SETTING_ONBOARDING_DONE, if done { "true" } else { "false" })
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// The configured storage mode. Unknown or unset values fall back to
    /// local.
    pub async fn mode(&self) -> Result<WorkspaceMode> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let mode = db
                .get_setting(SETTING_MODE)?
                .and_then(|v| v.parse::<WorkspaceMode>().ok())
                .unwrap_or_default();
            Ok(mode)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Sets the storage mode preference.
    pub async fn set_mode(&self, mode: WorkspaceMode) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_setting(SETTING_MODE, mode.as_str())
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// One-shot snapshot of the workspace: settings plus project summaries.
    pub async fn state(&self) -> Result<WorkspaceState> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let onboarding_done =
                db.get_setting(SETTING_ONBOARDING_DONE)?.as_deref() == Some("true");
            let mode = db
                .get_setting(SETTING_MODE)?
                .and_then(|v| v.parse::<WorkspaceMode>().ok())
                .unwrap_or_default();
            let projects = db
                .list_projects()?
                .iter()
                .map(ProjectSummary::from)
                .collect();

            Ok(WorkspaceState {
                onboarding_done,
                mode,
                projects,
            })
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes all projects and settings. The example registry is embedded
    /// and unaffected.
    pub async fn reset(&self) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.reset_workspace()
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
