//! Read-only registry of example project templates.
//!
//! The example catalog ships embedded in the binary and never touches the
//! database. Every access hands out an owned copy with a pristine phase
//! sequence, so callers can never mutate the templates through a shared
//! reference, and a template can never surface with leftover progress.

use std::sync::OnceLock;

use jiff::Timestamp;

use crate::{
    error::Result,
    ids,
    models::{default_phases, WorkspaceProject},
};

static EXAMPLE_PROJECTS_JSON: &str = include_str!("../assets/example_projects.json");

static CATALOG: OnceLock<Vec<WorkspaceProject>> = OnceLock::new();

fn catalog() -> Result<&'static [WorkspaceProject]> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let parsed: Vec<WorkspaceProject> = serde_json::from_str(EXAMPLE_PROJECTS_JSON)?;
    Ok(CATALOG.get_or_init(|| parsed))
}

/// All example templates, in catalog order, each with a pristine phase
/// sequence.
pub fn example_projects() -> Result<Vec<WorkspaceProject>> {
    let templates = catalog()?;
    Ok(templates.iter().map(normalized_copy).collect())
}

/// Looks up one example template by id. Ids outside the example namespace
/// resolve to `None` without scanning the catalog.
pub fn find_example(id: &str) -> Result<Option<WorkspaceProject>> {
    if !ids::is_example_id(id) {
        return Ok(None);
    }
    let templates = catalog()?;
    Ok(templates.iter().find(|p| p.id == id).map(normalized_copy))
}

/// Builds an independent user project from an example template.
///
/// The clone gets the given freshly minted user-namespace id, a "Kopie: "
/// name prefix, current timestamps, a pristine phase sequence, and
/// `has_demo_data` cleared. Features carry over.
pub fn clone_from_example(example: &WorkspaceProject, id: String, now: Timestamp) -> WorkspaceProject {
    WorkspaceProject {
        id,
        name: format!("Kopie: {}", example.name),
        created_at: now,
        updated_at: now,
        phases: default_phases(),
        has_demo_data: false,
        ..example.clone()
    }
}

fn normalized_copy(template: &WorkspaceProject) -> WorkspaceProject {
    WorkspaceProject {
        phases: default_phases(),
        ..template.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CrispDmPhaseId, PhaseStatus};

    #[test]
    fn test_catalog_parses_and_is_namespaced() {
        let templates = example_projects().unwrap();
        assert!(!templates.is_empty());
        for template in &templates {
            assert!(ids::is_example_id(&template.id), "bad id: {}", template.id);
            assert_eq!(template.phases.len(), 6);
            assert!(template.has_demo_data);
        }
    }

    #[test]
    fn test_templates_come_out_pristine() {
        let templates = example_projects().unwrap();
        for template in &templates {
            assert_eq!(
                template.current_phase,
                CrispDmPhaseId::BusinessUnderstanding
            );
            for phase in &template.phases {
                assert_eq!(phase.status, PhaseStatus::Pending);
                assert!(phase.completed_at.is_none());
            }
        }
    }

    #[test]
    fn test_find_example_churn() {
        let example = find_example("example-churn").unwrap().unwrap();
        assert_eq!(example.name, "Kundenabwanderung vorhersagen");
        assert_eq!(example.features.len(), 5);
        assert!(example
            .features
            .iter()
            .any(|f| f.name == "Churn" && f.is_target));
    }

    #[test]
    fn test_find_example_skips_user_namespace() {
        assert!(find_example("project-1700000000000-0").unwrap().is_none());
        assert!(find_example("example-does-not-exist").unwrap().is_none());
    }

    #[test]
    fn test_clone_from_example() {
        let example = find_example("example-churn").unwrap().unwrap();
        let clone = clone_from_example(
            &example,
            "project-1700000000000-7".to_string(),
            Timestamp::now(),
        );
        assert_eq!(clone.name, "Kopie: Kundenabwanderung vorhersagen");
        assert!(!ids::is_example_id(&clone.id));
        assert!(!clone.has_demo_data);
        assert_eq!(clone.features, example.features);
        assert_eq!(clone.business_goal, example.business_goal);
        for phase in &clone.phases {
            assert_eq!(phase.status, PhaseStatus::Pending);
        }
    }
}
