//! Feature and project-type definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of data-science project a workspace project models.
///
/// Labels are learner-facing and match the shipped (German) course content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Klassifikation,
    Regression,
    Clustering,
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "klassifikation" | "classification" => Ok(ProjectType::Klassifikation),
            "regression" => Ok(ProjectType::Regression),
            "clustering" => Ok(ProjectType::Clustering),
            _ => Err(format!("Invalid project type: {s}")),
        }
    }
}

impl ProjectType {
    /// Convert to database string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Klassifikation => "klassifikation",
            ProjectType::Regression => "regression",
            ProjectType::Clustering => "clustering",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data type of a feature column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    #[default]
    Numerisch,
    Kategorial,
    Text,
    Datum,
}

impl FromStr for FeatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numerisch" | "numeric" => Ok(FeatureType::Numerisch),
            "kategorial" | "categorical" => Ok(FeatureType::Kategorial),
            "text" => Ok(FeatureType::Text),
            "datum" | "date" => Ok(FeatureType::Datum),
            _ => Err(format!("Invalid feature type: {s}")),
        }
    }
}

impl FeatureType {
    /// Convert to database string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureType::Numerisch => "numerisch",
            FeatureType::Kategorial => "kategorial",
            FeatureType::Text => "text",
            FeatureType::Datum => "datum",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dataset column the learner has described for their project.
///
/// Feature ids are unique within their owning project only; display order is
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Identifier, unique per project
    pub id: String,

    /// Column name
    pub name: String,

    /// Data type of the column
    #[serde(rename = "type")]
    pub feature_type: FeatureType,

    /// What the column contains
    #[serde(default)]
    pub description: String,

    /// Whether this column is the prediction target
    #[serde(default)]
    pub is_target: bool,
}
