//! Phase guidance engine.
//!
//! Pure functions over a project snapshot: nothing in this module mutates a
//! project, and every answer is recomputed from the snapshot it is given.
//! Guidance is advisory. Prerequisite checks produce warnings for the display
//! layer; they never block navigation.

use serde::{Deserialize, Serialize};

use crate::models::{CrispDmPhaseId, WorkspaceProject};

mod content;

/// Weight of a tutor hint for display purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HintPriority {
    Info,
    Tip,
    Warning,
}

/// A single piece of static tutor advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorHint {
    /// Stable hint identifier
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    /// Glossary term ids this hint links to
    pub glossary_terms: &'static [&'static str],
    pub priority: HintPriority,
}

/// A single prerequisite a phase can demand from the project state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// The project has described at least this many features
    MinFeatures(usize),
    /// The given phase is marked completed
    PhaseCompleted(CrispDmPhaseId),
    /// A business goal has been written down
    BusinessGoalDocumented,
}

impl Requirement {
    fn is_met(&self, project: &WorkspaceProject) -> bool {
        match self {
            Requirement::MinFeatures(n) => project.features.len() >= *n,
            Requirement::PhaseCompleted(phase) => project.phase_completed(*phase),
            Requirement::BusinessGoalDocumented => project
                .business_goal
                .as_deref()
                .is_some_and(|goal| !goal.trim().is_empty()),
        }
    }

    fn warning(&self) -> String {
        match self {
            Requirement::MinFeatures(1) => {
                "Noch keine Features beschrieben – lege mindestens ein Feature an.".to_string()
            }
            Requirement::MinFeatures(n) => {
                format!("Beschreibe mindestens {n} Features, bevor du hier weiterarbeitest.")
            }
            Requirement::PhaseCompleted(phase) => {
                format!(
                    "Die Phase \"{}\" ist noch nicht abgeschlossen.",
                    phase.name()
                )
            }
            Requirement::BusinessGoalDocumented => {
                "Das Geschäftsziel ist noch nicht dokumentiert.".to_string()
            }
        }
    }
}

/// One policy rule: the prerequisites of a single phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRule {
    pub phase: CrispDmPhaseId,
    pub requirements: Vec<Requirement>,
}

/// Configurable prerequisite rules, one entry per phase that demands
/// anything. Phases without a rule are always met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisitePolicy {
    rules: Vec<PhaseRule>,
}

/// Result of evaluating one phase against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteCheck {
    pub met: bool,
    /// Learner-facing warning for the first unmet requirement
    pub warning: Option<String>,
}

impl PrerequisiteCheck {
    fn met() -> Self {
        Self {
            met: true,
            warning: None,
        }
    }
}

impl Default for PrerequisitePolicy {
    /// The shipped policy: each phase from data preparation on requires its
    /// predecessor completed, and data understanding wants at least one
    /// feature described.
    fn default() -> Self {
        Self {
            rules: vec![
                PhaseRule {
                    phase: CrispDmPhaseId::DataUnderstanding,
                    requirements: vec![Requirement::MinFeatures(1)],
                },
                PhaseRule {
                    phase: CrispDmPhaseId::DataPreparation,
                    requirements: vec![Requirement::PhaseCompleted(
                        CrispDmPhaseId::DataUnderstanding,
                    )],
                },
                PhaseRule {
                    phase: CrispDmPhaseId::Modeling,
                    requirements: vec![Requirement::PhaseCompleted(
                        CrispDmPhaseId::DataPreparation,
                    )],
                },
                PhaseRule {
                    phase: CrispDmPhaseId::Evaluation,
                    requirements: vec![Requirement::PhaseCompleted(CrispDmPhaseId::Modeling)],
                },
                PhaseRule {
                    phase: CrispDmPhaseId::Deployment,
                    requirements: vec![Requirement::PhaseCompleted(CrispDmPhaseId::Evaluation)],
                },
            ],
        }
    }
}

impl PrerequisitePolicy {
    /// A policy with custom rules.
    pub fn new(rules: Vec<PhaseRule>) -> Self {
        Self { rules }
    }

    /// A policy without any prerequisites.
    pub fn permissive() -> Self {
        Self { rules: Vec::new() }
    }

    /// Evaluates the prerequisites of one phase against a project snapshot.
    pub fn check(&self, project: &WorkspaceProject, phase: CrispDmPhaseId) -> PrerequisiteCheck {
        let Some(rule) = self.rules.iter().find(|r| r.phase == phase) else {
            return PrerequisiteCheck::met();
        };

        match rule.requirements.iter().find(|req| !req.is_met(project)) {
            Some(unmet) => PrerequisiteCheck {
                met: false,
                warning: Some(unmet.warning()),
            },
            None => PrerequisiteCheck::met(),
        }
    }
}

/// Full guidance block for one phase of a project: static learner content
/// plus the evaluated prerequisite check.
#[derive(Debug, Clone)]
pub struct PhaseGuidance {
    pub phase: CrispDmPhaseId,
    pub introduction: &'static str,
    pub objectives: &'static [&'static str],
    pub hints: Vec<TutorHint>,
    pub next_steps: &'static [&'static str],
    pub prerequisite: PrerequisiteCheck,
}

/// Guidance for one phase of a project.
pub fn phase_guidance(
    project: &WorkspaceProject,
    phase: CrispDmPhaseId,
    policy: &PrerequisitePolicy,
) -> PhaseGuidance {
    let content = content::content_for(phase);
    PhaseGuidance {
        phase,
        introduction: content.introduction,
        objectives: content.objectives,
        hints: content.hints.to_vec(),
        next_steps: content.next_steps,
        prerequisite: policy.check(project, phase),
    }
}

/// Static hints for the project's current phase.
pub fn contextual_hints(project: &WorkspaceProject) -> Vec<TutorHint> {
    content::content_for(project.current_phase).hints.to_vec()
}

/// Recommended next steps for a phase.
pub fn next_steps(phase: CrispDmPhaseId) -> &'static [&'static str] {
    content::content_for(phase).next_steps
}

/// One-line introductions for all six phases, in canonical order.
pub fn phase_introductions() -> Vec<(CrispDmPhaseId, &'static str)> {
    CrispDmPhaseId::ALL
        .iter()
        .map(|&phase| (phase, content::content_for(phase).introduction))
        .collect()
}

/// Overall progress as a percentage, rounded to whole percent.
pub fn progress_percent(project: &WorkspaceProject) -> u8 {
    let total = project.phases.len();
    if total == 0 {
        return 0;
    }
    let completed = project.completed_phases_count();
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::PhaseStatus;

    fn project() -> WorkspaceProject {
        WorkspaceProject::scaffold(
            "project-1700000000000-0".to_string(),
            "Testprojekt".to_string(),
            Timestamp::now(),
        )
    }

    fn complete(project: &mut WorkspaceProject, phase: CrispDmPhaseId) {
        project.phases[phase.index()].status = PhaseStatus::Completed;
    }

    #[test]
    fn test_business_understanding_always_met() {
        let policy = PrerequisitePolicy::default();
        let check = policy.check(&project(), CrispDmPhaseId::BusinessUnderstanding);
        assert!(check.met);
        assert!(check.warning.is_none());
    }

    #[test]
    fn test_data_understanding_wants_a_feature() {
        let policy = PrerequisitePolicy::default();
        let mut p = project();

        let check = policy.check(&p, CrispDmPhaseId::DataUnderstanding);
        assert!(!check.met);
        assert!(check.warning.is_some());

        p.features.push(crate::models::Feature {
            id: "feature-1".to_string(),
            name: "Alter".to_string(),
            feature_type: Default::default(),
            description: String::new(),
            is_target: false,
        });
        assert!(policy.check(&p, CrispDmPhaseId::DataUnderstanding).met);
    }

    #[test]
    fn test_later_phases_chain_on_completion() {
        let policy = PrerequisitePolicy::default();
        let mut p = project();

        assert!(!policy.check(&p, CrispDmPhaseId::Modeling).met);

        complete(&mut p, CrispDmPhaseId::DataPreparation);
        assert!(policy.check(&p, CrispDmPhaseId::Modeling).met);

        assert!(!policy.check(&p, CrispDmPhaseId::Deployment).met);
        complete(&mut p, CrispDmPhaseId::Evaluation);
        assert!(policy.check(&p, CrispDmPhaseId::Deployment).met);
    }

    #[test]
    fn test_permissive_policy_never_warns() {
        let policy = PrerequisitePolicy::permissive();
        let p = project();
        for phase in CrispDmPhaseId::ALL {
            assert!(policy.check(&p, phase).met);
        }
    }

    #[test]
    fn test_business_goal_requirement() {
        let req = Requirement::BusinessGoalDocumented;
        let mut p = project();
        assert!(!req.is_met(&p));
        p.business_goal = Some("  ".to_string());
        assert!(!req.is_met(&p));
        p.business_goal = Some("Churn-Rate um 15% senken".to_string());
        assert!(req.is_met(&p));
    }

    #[test]
    fn test_progress_percent_rounding() {
        let mut p = project();
        assert_eq!(progress_percent(&p), 0);

        complete(&mut p, CrispDmPhaseId::BusinessUnderstanding);
        assert_eq!(progress_percent(&p), 17); // 1/6 rounds to 17

        complete(&mut p, CrispDmPhaseId::DataUnderstanding);
        assert_eq!(progress_percent(&p), 33);

        for phase in CrispDmPhaseId::ALL {
            complete(&mut p, phase);
        }
        assert_eq!(progress_percent(&p), 100);
    }

    #[test]
    fn test_guidance_carries_content_and_check() {
        let policy = PrerequisitePolicy::default();
        let p = project();
        let guidance = phase_guidance(&p, CrispDmPhaseId::Evaluation, &policy);
        assert_eq!(guidance.phase, CrispDmPhaseId::Evaluation);
        assert!(!guidance.introduction.is_empty());
        assert_eq!(guidance.objectives.len(), 3);
        assert_eq!(guidance.hints.len(), 1);
        assert!(!guidance.prerequisite.met);
    }

    #[test]
    fn test_every_phase_has_content() {
        for (phase, intro) in phase_introductions() {
            assert!(!intro.is_empty(), "missing intro for {phase}");
            assert!(!next_steps(phase).is_empty());
        }
    }
}
