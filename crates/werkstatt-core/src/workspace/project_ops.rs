//! Project operations for the Workspace.

use jiff::Timestamp;
use tokio::task;

use super::Workspace;
use crate::{
    db::Database,
    error::{Result, WerkstattError},
    ids,
    models::WorkspaceProject,
    params::{CreateProject, UpdateProject},
    registry,
};

impl Workspace {
    /// Creates a new empty project: first phase active, all phases pending,
    /// no features, freshly minted user-namespace id.
    pub async fn create_project(&self, params: &CreateProject) -> Result<WorkspaceProject> {
        let project_type = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut project = WorkspaceProject::scaffold(
                ids::mint_project_id(),
                params.name.clone(),
                Timestamp::now(),
            );
            project.description = params.description.clone().unwrap_or_default();
            project.project_type = project_type;
            project.business_goal = params.business_goal.clone();
            project.success_criteria = params.success_criteria.clone();

            let mut db = Database::new(&db_path)?;
            db.insert_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Resolves a project by id: the user store first, then the example
    /// registry. Registry hits are pristine template copies.
    pub async fn get_project(&self, id: &str) -> Result<Option<WorkspaceProject>> {
        let db_path = self.db_path.clone();
        let id_owned = id.to_string();

        let stored = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_project(&id_owned)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        if stored.is_some() {
            return Ok(stored);
        }
        registry::find_example(id)
    }

    /// Lists all user projects in creation order. Example templates are not
    /// included; see [`Workspace::example_projects`].
    pub async fn list_projects(&self) -> Result<Vec<WorkspaceProject>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_projects()
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// All example templates from the embedded registry.
    pub fn example_projects(&self) -> Result<Vec<WorkspaceProject>> {
        registry::example_projects()
    }

    /// Applies a partial metadata update to a stored project.
    /// Returns the updated project, or `None` if no project with that id
    /// exists. Example ids are rejected outright; examples are edited through
    /// a session, which clones on the first write.
    pub async fn update_project(
        &self,
        params: &UpdateProject,
    ) -> Result<Option<WorkspaceProject>> {
        if ids::is_example_id(&params.id) {
            return Err(WerkstattError::ExampleImmutable {
                id: params.id.clone(),
            });
        }
        let project_type = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_project(&params, project_type)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a stored project. Deleting an absent project is
    /// not an error; the returned bool says whether anything was removed.
    /// Example ids are rejected; the registry cannot lose entries.
    pub async fn delete_project(&self, id: &str) -> Result<bool> {
        if ids::is_example_id(id) {
            return Err(WerkstattError::ExampleImmutable { id: id.to_string() });
        }
        let db_path = self.db_path.clone();
        let id_owned = id.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_project(&id_owned)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Clones a project into a fresh, independent user project.
    ///
    /// Example templates clone with a pristine phase sequence and
    /// `has_demo_data` cleared; user projects clone as deep copies keeping
    /// their progress. Either way the clone gets a new id, a "Kopie: " name
    /// prefix, and current timestamps.
    pub async fn clone_project(&self, id: &str) -> Result<WorkspaceProject> {
        let now = Timestamp::now();
        let clone = if ids::is_example_id(id) {
            let example = registry::find_example(id)?.ok_or_else(|| {
                WerkstattError::ExampleNotFound { id: id.to_string() }
            })?;
            registry::clone_from_example(&example, ids::mint_project_id(), now)
        } else {
            let original = self
                .get_project(id)
                .await?
                .ok_or_else(|| WerkstattError::ProjectNotFound { id: id.to_string() })?;
            WorkspaceProject {
                id: ids::mint_project_id(),
                name: format!("Kopie: {}", original.name),
                created_at: now,
                updated_at: now,
                ..original
            }
        };

        let db_path = self.db_path.clone();
        let stored = clone.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_project(&stored)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(clone)
    }
}
