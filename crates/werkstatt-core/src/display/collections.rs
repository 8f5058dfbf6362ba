//! Collection wrapper types with display implementations.
//!
//! Newtype wrappers so lists of domain models can be rendered directly,
//! including a friendly message for empty collections.

use std::fmt;
use std::ops::Index;

use crate::models::{Feature, ProjectSummary};

/// Wrapper around a list of project summaries.
#[derive(Debug, Clone)]
pub struct ProjectSummaries(Vec<ProjectSummary>);

impl ProjectSummaries {
    pub fn new(summaries: Vec<ProjectSummary>) -> Self {
        Self(summaries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl From<Vec<ProjectSummary>> for ProjectSummaries {
    fn from(summaries: Vec<ProjectSummary>) -> Self {
        Self(summaries)
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectSummaries {
    type Item = ProjectSummary;
    type IntoIter = std::vec::IntoIter<ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "Keine Projekte vorhanden.");
        }
        writeln!(f, "# Projekte ({})", self.0.len())?;
        for summary in &self.0 {
            writeln!(f)?;
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Wrapper around a list of features.
#[derive(Debug, Clone)]
pub struct Features(Vec<Feature>);

impl Features {
    pub fn new(features: Vec<Feature>) -> Self {
        Self(features)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.0.iter()
    }
}

impl From<Vec<Feature>> for Features {
    fn from(features: Vec<Feature>) -> Self {
        Self(features)
    }
}

impl Index<usize> for Features {
    type Output = Feature;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Features {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Features {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "Noch keine Features beschrieben.");
        }
        writeln!(f, "# Features ({})", self.0.len())?;
        writeln!(f)?;
        for feature in &self.0 {
            writeln!(f, "{feature}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::{FeatureType, WorkspaceProject};

    use super::*;

    #[test]
    fn test_empty_summaries_message() {
        let summaries = ProjectSummaries::new(Vec::new());
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "Keine Projekte vorhanden.");
    }

    #[test]
    fn test_summaries_display_counts() {
        let project = WorkspaceProject::scaffold(
            "project-1-1".to_string(),
            "Testprojekt".to_string(),
            Timestamp::UNIX_EPOCH,
        );
        let summaries = ProjectSummaries::new(vec![ProjectSummary::from(&project)]);
        let output = summaries.to_string();
        assert!(output.contains("# Projekte (1)"));
        assert!(output.contains("Testprojekt"));
    }

    #[test]
    fn test_empty_features_message() {
        let features = Features::new(Vec::new());
        assert_eq!(features.to_string(), "Noch keine Features beschrieben.");
    }

    #[test]
    fn test_features_indexing() {
        let features = Features::new(vec![Feature {
            id: "feature-1-1".to_string(),
            name: "Alter".to_string(),
            feature_type: FeatureType::Numerisch,
            description: String::new(),
            is_target: false,
        }]);
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Alter");
        assert!(features.get(1).is_none());
    }
}
