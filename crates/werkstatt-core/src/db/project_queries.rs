//! Project CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WerkstattError},
    models::{CrispDmPhaseId, ProjectType, WorkspaceProject},
    params::UpdateProject,
};

use super::{feature_queries, phase_queries};

// SQL queries as const strings
const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (id, name, description, project_type, current_phase, business_goal, success_criteria, data_source, selected_dataset, has_demo_data, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const PROJECT_COLUMNS: &str = "id, name, description, project_type, current_phase, business_goal, success_criteria, data_source, selected_dataset, has_demo_data, created_at, updated_at";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a project from a database row, without
    /// its phases and features.
    fn build_project_from_row(row: &Row) -> rusqlite::Result<WorkspaceProject> {
        let type_str: String = row.get(3)?;
        let project_type = type_str.parse::<ProjectType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid project type: {type_str}").into(),
            )
        })?;

        let phase_str: String = row.get(4)?;
        let current_phase = phase_str.parse::<CrispDmPhaseId>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid phase: {phase_str}").into(),
            )
        })?;

        Ok(WorkspaceProject {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            project_type,
            current_phase,
            business_goal: row.get(5)?,
            success_criteria: row.get(6)?,
            data_source: row.get(7)?,
            selected_dataset: row.get(8)?,
            has_demo_data: row.get(9)?,
            created_at: row.get::<_, String>(10)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(11)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
            })?,
            phases: Vec::new(),
            features: Vec::new(),
        })
    }

    /// Inserts a complete project, including its phase records and features,
    /// in one transaction. Used for creation, cloning, import, and
    /// clone-on-write materialization alike.
    pub fn insert_project(&mut self, project: &WorkspaceProject) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                project.id,
                project.name,
                project.description,
                project.project_type.as_str(),
                project.current_phase.as_str(),
                project.business_goal,
                project.success_criteria,
                project.data_source,
                project.selected_dataset,
                project.has_demo_data,
                project.created_at.to_string(),
                project.updated_at.to_string()
            ],
        )
        .db_context("Failed to insert project")?;

        phase_queries::insert_phases(&tx, &project.id, &project.phases)?;
        feature_queries::insert_features(&tx, &project.id, &project.features)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Retrieves a project by its id, with phases canonicalized and features
    /// in insertion order.
    pub fn get_project(&self, id: &str) -> Result<Option<WorkspaceProject>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1"))
            .db_context("Failed to prepare query")?;

        let mut project = stmt
            .query_row(params![id], Self::build_project_from_row)
            .optional()
            .db_context("Failed to query project")?;

        if let Some(ref mut project) = project {
            project.phases = self.load_phases(&project.id)?;
            project.features = self.load_features(&project.id)?;
        }

        Ok(project)
    }

    /// Lists all projects in creation order.
    pub fn list_projects(&self) -> Result<Vec<WorkspaceProject>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY rowid"))
            .db_context("Failed to prepare query")?;

        let mut projects: Vec<WorkspaceProject> = stmt
            .query_map([], Self::build_project_from_row)
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch projects")?;

        for project in &mut projects {
            project.phases = self.load_phases(&project.id)?;
            project.features = self.load_features(&project.id)?;
        }

        Ok(projects)
    }

    /// Applies a partial metadata update to a project. Fields that are `None`
    /// stay untouched; `updated_at` is always refreshed.
    /// Returns the updated project, or `None` if no project with that id
    /// exists.
    pub fn update_project(
        &mut self,
        params: &UpdateProject,
        project_type: Option<ProjectType>,
    ) -> Result<Option<WorkspaceProject>> {
        let now = Timestamp::now().to_string();

        let mut assignments = vec!["updated_at = ?"];
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(ref name) = params.name {
            assignments.push("name = ?");
            values.push(Box::new(name.clone()));
        }
        if let Some(ref description) = params.description {
            assignments.push("description = ?");
            values.push(Box::new(description.clone()));
        }
        if let Some(project_type) = project_type {
            assignments.push("project_type = ?");
            values.push(Box::new(project_type.as_str().to_string()));
        }
        if let Some(ref business_goal) = params.business_goal {
            assignments.push("business_goal = ?");
            values.push(Box::new(business_goal.clone()));
        }
        if let Some(ref success_criteria) = params.success_criteria {
            assignments.push("success_criteria = ?");
            values.push(Box::new(success_criteria.clone()));
        }
        if let Some(ref data_source) = params.data_source {
            assignments.push("data_source = ?");
            values.push(Box::new(data_source.clone()));
        }
        if let Some(ref selected_dataset) = params.selected_dataset {
            assignments.push("selected_dataset = ?");
            values.push(Box::new(selected_dataset.clone()));
        }

        let query = format!(
            "UPDATE projects SET {} WHERE id = ?",
            assignments.join(", ")
        );
        values.push(Box::new(params.id.clone()));

        let values_refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|b| &**b).collect();
        let rows_affected = self
            .connection
            .execute(&query, &values_refs[..])
            .db_context("Failed to update project")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        self.get_project(&params.id)
    }

    /// Overwrites a stored project with the given state, including phases and
    /// features, in one transaction. `created_at` is preserved as stored;
    /// everything else comes from the given project.
    /// Returns `false` if no project with that id exists.
    pub fn replace_project(&mut self, project: &WorkspaceProject) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                "UPDATE projects SET name = ?1, description = ?2, project_type = ?3, current_phase = ?4, business_goal = ?5, success_criteria = ?6, data_source = ?7, selected_dataset = ?8, has_demo_data = ?9, updated_at = ?10 WHERE id = ?11",
                params![
                    project.name,
                    project.description,
                    project.project_type.as_str(),
                    project.current_phase.as_str(),
                    project.business_goal,
                    project.success_criteria,
                    project.data_source,
                    project.selected_dataset,
                    project.has_demo_data,
                    project.updated_at.to_string(),
                    project.id
                ],
            )
            .db_context("Failed to update project")?;

        if rows_affected == 0 {
            return Ok(false);
        }

        phase_queries::delete_phases(&tx, &project.id)?;
        phase_queries::insert_phases(&tx, &project.id, &project.phases)?;
        feature_queries::delete_features(&tx, &project.id)?;
        feature_queries::insert_features(&tx, &project.id, &project.features)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(true)
    }

    /// Permanently deletes a project and its phase records and features.
    /// Returns `false` if no project with that id exists; deleting an absent
    /// project is not an error.
    pub fn delete_project(&mut self, id: &str) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check project existence")?;

        if !exists {
            return Ok(false);
        }

        // Cascade handles phases and features, but we delete explicitly in
        // case foreign keys are disabled on the connection.
        phase_queries::delete_phases(&tx, id)?;
        feature_queries::delete_features(&tx, id)?;
        tx.execute(DELETE_PROJECT_SQL, params![id])
            .db_context("Failed to delete project")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(true)
    }

    /// Looks up a project, failing with [`WerkstattError::ProjectNotFound`]
    /// when absent.
    pub fn require_project(&self, id: &str) -> Result<WorkspaceProject> {
        self.get_project(id)?
            .ok_or_else(|| WerkstattError::ProjectNotFound { id: id.to_string() })
    }
}
