//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI. Phase tables follow the
//! canonical phase order; feature lists follow insertion order.

use std::fmt;

use crate::models::{Feature, ProjectSummary, WorkspaceProject};

use super::datetime::LocalDateTime;

impl fmt::Display for WorkspaceProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "**ID:** {}", self.id)?;
        writeln!(f, "**Typ:** {}", self.project_type)?;
        if !self.description.is_empty() {
            writeln!(f, "**Beschreibung:** {}", self.description)?;
        }
        writeln!(f, "**Erstellt:** {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "**Geändert:** {}", LocalDateTime(&self.updated_at))?;
        if let Some(ref business_goal) = self.business_goal {
            writeln!(f, "**Geschäftsziel:** {business_goal}")?;
        }
        if let Some(ref success_criteria) = self.success_criteria {
            writeln!(f, "**Erfolgskriterien:** {success_criteria}")?;
        }
        if let Some(ref data_source) = self.data_source {
            writeln!(f, "**Datenquelle:** {data_source}")?;
        }
        if let Some(ref selected_dataset) = self.selected_dataset {
            writeln!(f, "**Datensatz:** {selected_dataset}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Phasen")?;
        writeln!(f)?;
        writeln!(f, "| Phase | Status |")?;
        writeln!(f, "|-------|--------|")?;
        for phase in &self.phases {
            let marker = if phase.id == self.current_phase {
                " ◀"
            } else {
                ""
            };
            writeln!(
                f,
                "| {} | {}{marker} |",
                phase.id.name(),
                phase.status.with_icon()
            )?;
        }

        if !self.features.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Features")?;
            writeln!(f)?;
            for feature in &self.features {
                writeln!(f, "{feature}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = if self.is_target { " 🎯 Zielvariable" } else { "" };
        write!(f, "- **{}** ({}){target}", self.name, self.feature_type)?;
        if !self.description.is_empty() {
            write!(f, " – {}", self.description)?;
        }
        write!(f, " `{}`", self.id)
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, self.id)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        writeln!(
            f,
            "**Typ:** {} | **Phase:** {} | **Fortschritt:** {}/{} | **Features:** {}",
            self.project_type,
            self.current_phase.name(),
            self.completed_phases,
            self.total_phases,
            self.feature_count
        )?;
        writeln!(f, "**Geändert:** {}", LocalDateTime(&self.updated_at))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::{CrispDmPhaseId, FeatureType, PhaseStatus};

    use super::*;

    fn sample_project() -> WorkspaceProject {
        let mut project = WorkspaceProject::scaffold(
            "project-1-1".to_string(),
            "Kundenabwanderung".to_string(),
            Timestamp::UNIX_EPOCH,
        );
        project.phases[0].status = PhaseStatus::Completed;
        project.current_phase = CrispDmPhaseId::DataUnderstanding;
        project.features.push(Feature {
            id: "feature-1-1".to_string(),
            name: "Vertragsart".to_string(),
            feature_type: FeatureType::Kategorial,
            description: "Monatlich oder Jahresvertrag".to_string(),
            is_target: false,
        });
        project
    }

    #[test]
    fn test_project_display_contains_phase_table_and_marker() {
        let output = sample_project().to_string();
        assert!(output.contains("# Kundenabwanderung"));
        assert!(output.contains("| Business Understanding | ✓ Abgeschlossen |"));
        assert!(output.contains("| Data Understanding | ○ Offen ◀ |"));
        assert!(output.contains("## Features"));
        assert!(output.contains("**Vertragsart** (kategorial)"));
    }

    #[test]
    fn test_feature_display_marks_target() {
        let feature = Feature {
            id: "feature-1-2".to_string(),
            name: "Churn".to_string(),
            feature_type: FeatureType::Kategorial,
            description: String::new(),
            is_target: true,
        };
        let output = feature.to_string();
        assert!(output.contains("Zielvariable"));
        assert!(output.contains("`feature-1-2`"));
    }

    #[test]
    fn test_summary_display_shows_progress() {
        let project = sample_project();
        let output = ProjectSummary::from(&project).to_string();
        assert!(output.contains("## Kundenabwanderung (project-1-1)"));
        assert!(output.contains("**Fortschritt:** 1/6"));
        assert!(output.contains("**Features:** 1"));
    }
}
