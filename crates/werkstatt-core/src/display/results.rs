//! Operation result types with display implementations.

use std::fmt;

use crate::models::{Feature, WorkspaceProject};
use crate::session::MutationOutcome;

/// Result of a create operation.
#[derive(Debug, Clone)]
pub struct CreateResult<T>(pub T);

impl fmt::Display for CreateResult<WorkspaceProject> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projekt **{}** angelegt.", self.0.name)?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CreateResult<Feature> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feature hinzugefügt:")?;
        write!(f, "{}", self.0)
    }
}

/// Result of an update operation.
#[derive(Debug, Clone)]
pub struct UpdateResult<T>(pub T);

impl fmt::Display for UpdateResult<WorkspaceProject> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projekt **{}** aktualisiert.", self.0.name)?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Result of a delete operation by id.
#[derive(Debug, Clone)]
pub struct DeleteResult {
    pub id: String,
    pub existed: bool,
}

impl DeleteResult {
    pub fn new(id: impl Into<String>, existed: bool) -> Self {
        Self {
            id: id.into(),
            existed,
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.existed {
            write!(f, "Projekt `{}` gelöscht.", self.id)
        } else {
            write!(f, "Kein Projekt mit der ID `{}` gefunden.", self.id)
        }
    }
}

/// Notice that an edit turned a read-only example into a stored project.
///
/// Built from a [`MutationOutcome`]; nothing to show for in-place updates.
#[derive(Debug, Clone)]
pub struct MaterializedNotice {
    pub new_id: String,
    pub replaced_id: String,
}

impl MaterializedNotice {
    pub fn from_outcome(outcome: &MutationOutcome) -> Option<Self> {
        match outcome {
            MutationOutcome::Updated(_) => None,
            MutationOutcome::Materialized {
                project,
                replaced_id,
            } => Some(Self {
                new_id: project.id.clone(),
                replaced_id: replaced_id.clone(),
            }),
        }
    }
}

impl fmt::Display for MaterializedNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Das Beispiel `{}` wurde als eigenes Projekt übernommen. Neue Projekt-ID: `{}`",
            self.replaced_id, self.new_id
        )
    }
}

/// Generic status line for operations without a richer result.
#[derive(Debug, Clone)]
pub struct OperationStatus {
    message: String,
    success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "✓ {}", self.message)
        } else {
            write!(f, "✗ {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_result_messages() {
        let deleted = DeleteResult::new("project-1-1", true);
        assert!(deleted.to_string().contains("gelöscht"));

        let missing = DeleteResult::new("project-1-1", false);
        assert!(missing.to_string().contains("Kein Projekt"));
    }

    #[test]
    fn test_materialized_notice_only_for_materialization() {
        let project = crate::models::WorkspaceProject::scaffold(
            "project-9-9".to_string(),
            "Neu".to_string(),
            jiff::Timestamp::UNIX_EPOCH,
        );

        let updated = MutationOutcome::Updated(project.clone());
        assert!(MaterializedNotice::from_outcome(&updated).is_none());

        let materialized = MutationOutcome::Materialized {
            project,
            replaced_id: "example-iris".to_string(),
        };
        let notice = MaterializedNotice::from_outcome(&materialized).unwrap();
        assert_eq!(notice.new_id, "project-9-9");
        assert!(notice.to_string().contains("example-iris"));
    }

    #[test]
    fn test_operation_status_icons() {
        assert!(OperationStatus::success("ok").to_string().starts_with('✓'));
        assert!(OperationStatus::failure("nein").to_string().starts_with('✗'));
    }
}
