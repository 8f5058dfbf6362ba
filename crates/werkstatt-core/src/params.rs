//! Parameter structures for workspace operations.
//!
//! Shared parameter structures that can be used across different interfaces
//! (CLI today, other frontends later) without framework-specific derives.
//! Interface layers wrap these with their own derives (clap args etc.) and
//! convert via `From`/`Into`, keeping the core free of UI dependencies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WerkstattError},
    models::{CrispDmPhaseId, FeatureType, ProjectType},
};

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    /// Name of the project (required)
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Kind of project ('klassifikation', 'regression', or 'clustering')
    pub project_type: Option<String>,
    /// Optional business goal statement
    pub business_goal: Option<String>,
    /// Optional measurable success criteria
    pub success_criteria: Option<String>,
}

impl CreateProject {
    /// Validates the parameters and parses the project type.
    pub fn validate(&self) -> Result<ProjectType> {
        if self.name.trim().is_empty() {
            return Err(WerkstattError::invalid_input(
                "name",
                "Project name must not be empty",
            ));
        }
        parse_project_type(self.project_type.as_deref()).map(Option::unwrap_or_default)
    }
}

/// Parameters for a partial project update.
///
/// `None` fields are left untouched. Optional text columns cannot be cleared
/// through this structure, only replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// Id of the project to update (required)
    pub id: String,
    /// New project name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New project type ('klassifikation', 'regression', or 'clustering')
    pub project_type: Option<String>,
    /// New business goal statement
    pub business_goal: Option<String>,
    /// New success criteria
    pub success_criteria: Option<String>,
    /// New data source note
    pub data_source: Option<String>,
    /// New attached sample dataset id
    pub selected_dataset: Option<String>,
}

impl UpdateProject {
    /// Validates the parameters and parses the project type, if given.
    pub fn validate(&self) -> Result<Option<ProjectType>> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(WerkstattError::invalid_input(
                "name",
                "Project name must not be empty",
            ));
        }
        parse_project_type(self.project_type.as_deref())
    }

    /// Whether any field besides the id is set.
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.project_type.is_some()
            || self.business_goal.is_some()
            || self.success_criteria.is_some()
            || self.data_source.is_some()
            || self.selected_dataset.is_some()
    }
}

/// Parameters for adding a feature to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCreate {
    /// Column name (required)
    pub name: String,
    /// Data type ('numerisch', 'kategorial', 'text', or 'datum')
    pub feature_type: Option<String>,
    /// What the column contains
    pub description: Option<String>,
    /// Whether this column is the prediction target
    #[serde(default)]
    pub is_target: bool,
}

impl FeatureCreate {
    /// Validates the parameters and parses the feature type.
    pub fn validate(&self) -> Result<FeatureType> {
        if self.name.trim().is_empty() {
            return Err(WerkstattError::invalid_input(
                "name",
                "Feature name must not be empty",
            ));
        }
        parse_feature_type(self.feature_type.as_deref()).map(Option::unwrap_or_default)
    }
}

/// Parameters for a partial feature update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureUpdate {
    /// Id of the feature to update (required)
    pub id: String,
    /// New column name
    pub name: Option<String>,
    /// New data type ('numerisch', 'kategorial', 'text', or 'datum')
    pub feature_type: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New target flag
    pub is_target: Option<bool>,
}

impl FeatureUpdate {
    /// Validates the parameters and parses the feature type, if given.
    pub fn validate(&self) -> Result<Option<FeatureType>> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(WerkstattError::invalid_input(
                "name",
                "Feature name must not be empty",
            ));
        }
        parse_feature_type(self.feature_type.as_deref())
    }
}

/// Parses a phase argument, producing an input validation error on failure.
pub fn parse_phase(value: &str) -> Result<CrispDmPhaseId> {
    CrispDmPhaseId::from_str(value).map_err(|_| WerkstattError::InvalidInput {
        field: "phase".to_string(),
        reason: format!(
            "Invalid phase: {value}. Must be one of 'business-understanding', \
             'data-understanding', 'data-preparation', 'modeling', 'evaluation', \
             or 'deployment'"
        ),
    })
}

fn parse_project_type(value: Option<&str>) -> Result<Option<ProjectType>> {
    match value {
        Some(s) => {
            let parsed = ProjectType::from_str(s).map_err(|_| WerkstattError::InvalidInput {
                field: "project_type".to_string(),
                reason: format!(
                    "Invalid project type: {s}. Must be 'klassifikation', 'regression', \
                     or 'clustering'"
                ),
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

fn parse_feature_type(value: Option<&str>) -> Result<Option<FeatureType>> {
    match value {
        Some(s) => {
            let parsed = FeatureType::from_str(s).map_err(|_| WerkstattError::InvalidInput {
                field: "feature_type".to_string(),
                reason: format!(
                    "Invalid feature type: {s}. Must be 'numerisch', 'kategorial', \
                     'text', or 'datum'"
                ),
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_defaults_type() {
        let params = CreateProject {
            name: "Mein Projekt".to_string(),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), ProjectType::Klassifikation);
    }

    #[test]
    fn test_create_project_rejects_empty_name() {
        let params = CreateProject {
            name: "   ".to_string(),
            ..Default::default()
        };
        match params.validate().unwrap_err() {
            WerkstattError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_project_rejects_unknown_type() {
        let params = CreateProject {
            name: "Projekt".to_string(),
            project_type: Some("zeitreihe".to_string()),
            ..Default::default()
        };
        match params.validate().unwrap_err() {
            WerkstattError::InvalidInput { field, reason } => {
                assert_eq!(field, "project_type");
                assert!(reason.contains("zeitreihe"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_project_accepts_english_alias() {
        let params = UpdateProject {
            id: "project-1".to_string(),
            project_type: Some("classification".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap(),
            Some(ProjectType::Klassifikation)
        );
    }

    #[test]
    fn test_update_project_has_changes() {
        let mut params = UpdateProject {
            id: "project-1".to_string(),
            ..Default::default()
        };
        assert!(!params.has_changes());
        params.data_source = Some("CSV-Export aus dem CRM".to_string());
        assert!(params.has_changes());
    }

    #[test]
    fn test_feature_create_parses_type() {
        let params = FeatureCreate {
            name: "Alter".to_string(),
            feature_type: Some("numerisch".to_string()),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), FeatureType::Numerisch);
    }

    #[test]
    fn test_feature_update_rejects_unknown_type() {
        let params = FeatureUpdate {
            id: "feature-1".to_string(),
            feature_type: Some("boolean".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_parse_phase() {
        assert_eq!(
            parse_phase("modeling").unwrap(),
            CrispDmPhaseId::Modeling
        );
        assert!(parse_phase("model").is_err());
    }
}
