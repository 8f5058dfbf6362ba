//! Tests for the data models.

use jiff::Timestamp;

use super::*;

fn sample_project() -> WorkspaceProject {
    WorkspaceProject::scaffold(
        "project-1700000000000-0".to_string(),
        "Testprojekt".to_string(),
        Timestamp::now(),
    )
}

#[test]
fn test_phase_sequence_is_canonical() {
    assert_eq!(CrispDmPhaseId::ALL.len(), 6);
    assert_eq!(CrispDmPhaseId::ALL[0], CrispDmPhaseId::BusinessUnderstanding);
    assert_eq!(CrispDmPhaseId::ALL[5], CrispDmPhaseId::Deployment);

    for (i, phase) in CrispDmPhaseId::ALL.iter().enumerate() {
        assert_eq!(phase.index(), i);
    }
}

#[test]
fn test_phase_adjacency() {
    assert_eq!(
        CrispDmPhaseId::BusinessUnderstanding.next(),
        Some(CrispDmPhaseId::DataUnderstanding)
    );
    assert_eq!(CrispDmPhaseId::Deployment.next(), None);
    assert_eq!(CrispDmPhaseId::BusinessUnderstanding.previous(), None);
    assert_eq!(
        CrispDmPhaseId::Modeling.previous(),
        Some(CrispDmPhaseId::DataPreparation)
    );
}

#[test]
fn test_phase_id_string_round_trip() {
    for phase in CrispDmPhaseId::ALL {
        let parsed: CrispDmPhaseId = phase.as_str().parse().expect("round trip");
        assert_eq!(parsed, phase);
    }
    assert!("business_understanding".parse::<CrispDmPhaseId>().is_err());
}

#[test]
fn test_phase_status_string_round_trip() {
    for status in [
        PhaseStatus::Pending,
        PhaseStatus::InProgress,
        PhaseStatus::Completed,
    ] {
        let parsed: PhaseStatus = status.as_str().parse().expect("round trip");
        assert_eq!(parsed, status);
    }
    // Alternative spelling accepted on parse
    assert_eq!(
        "in_progress".parse::<PhaseStatus>().expect("parse"),
        PhaseStatus::InProgress
    );
}

#[test]
fn test_default_phases_shape() {
    let phases = default_phases();
    assert_eq!(phases.len(), 6);
    for (record, id) in phases.iter().zip(CrispDmPhaseId::ALL) {
        assert_eq!(record.id, id);
        assert_eq!(record.status, PhaseStatus::Pending);
        assert!(record.completed_at.is_none());
    }
}

#[test]
fn test_scaffold_defaults() {
    let project = sample_project();
    assert_eq!(project.current_phase, CrispDmPhaseId::BusinessUnderstanding);
    assert_eq!(project.current_phase_index(), 0);
    assert_eq!(project.phases.len(), 6);
    assert!(project.features.is_empty());
    assert!(!project.has_demo_data);
    assert_eq!(project.completed_phases_count(), 0);
}

#[test]
fn test_completed_phases_count() {
    let mut project = sample_project();
    project.phases[0].status = PhaseStatus::Completed;
    project.phases[1].status = PhaseStatus::InProgress;
    project.phases[2].status = PhaseStatus::Completed;
    assert_eq!(project.completed_phases_count(), 2);
    assert!(project.phase_completed(CrispDmPhaseId::BusinessUnderstanding));
    assert!(!project.phase_completed(CrispDmPhaseId::DataUnderstanding));
}

#[test]
fn test_project_json_round_trip() {
    let mut project = sample_project();
    project.features.push(Feature {
        id: "feature-1".to_string(),
        name: "Alter".to_string(),
        feature_type: FeatureType::Numerisch,
        description: "Alter in Jahren".to_string(),
        is_target: false,
    });
    project.business_goal = Some("Churn senken".to_string());

    let json = serde_json::to_string(&project).expect("serialize");
    let back: WorkspaceProject = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, project);
}

#[test]
fn test_project_json_field_names() {
    let project = sample_project();
    let value = serde_json::to_value(&project).expect("serialize");
    // Wire names match the original document format
    assert_eq!(value["currentPhase"], "business-understanding");
    assert!(value["phases"].as_array().is_some_and(|a| a.len() == 6));
    assert_eq!(value["hasDemoData"], false);
}

#[test]
fn test_document_seal_and_verify() {
    let project = sample_project();
    let doc = ProjectDocument::seal(project, Timestamp::now()).expect("seal");
    assert_eq!(doc.version, EXPORT_VERSION);
    assert!(doc.version_supported());
    assert_eq!(doc.verify_hash().expect("verify"), Some(true));
}

#[test]
fn test_document_detects_tampering() {
    let project = sample_project();
    let mut doc = ProjectDocument::seal(project, Timestamp::now()).expect("seal");
    doc.project.name = "Umbenannt".to_string();
    assert_eq!(doc.verify_hash().expect("verify"), Some(false));
}

#[test]
fn test_document_without_hash() {
    let project = sample_project();
    let doc = ProjectDocument {
        version: EXPORT_VERSION.to_string(),
        exported_at: None,
        project,
        hash: None,
    };
    assert_eq!(doc.verify_hash().expect("verify"), None);
}

#[test]
fn test_summary_from_project() {
    let mut project = sample_project();
    project.phases[0].status = PhaseStatus::Completed;
    let summary = ProjectSummary::from(&project);
    assert_eq!(summary.id, project.id);
    assert_eq!(summary.completed_phases, 1);
    assert_eq!(summary.total_phases, 6);
    assert_eq!(summary.feature_count, 0);
}
