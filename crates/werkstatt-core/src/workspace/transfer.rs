//! Import and export of `.mltutor` project documents.
//!
//! Export seals a single project into a versioned JSON envelope with a
//! SHA-256 integrity hash. Import validates structure and version, rejects
//! tampered documents, normalizes the phase sequence, and always ingests the
//! project under a freshly minted id so an import can never collide with or
//! overwrite an existing project.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use tokio::task;

use super::Workspace;
use crate::{
    db::Database,
    error::{Result, WerkstattError},
    ids,
    models::{
        default_phases, CrispDmPhase, ProjectDocument, WorkspaceProject, SUPPORTED_VERSIONS,
    },
};

/// Result of validating a document before import.
#[derive(Debug, Clone, Default)]
pub struct ImportValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ImportValidation {
    /// Whether the document can be imported. Warnings do not block.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A successfully imported project plus any non-fatal findings.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub project: WorkspaceProject,
    pub warnings: Vec<String>,
}

impl Workspace {
    /// Exports a project (stored or example) as a sealed document.
    pub async fn export_project(&self, id: &str) -> Result<ProjectDocument> {
        let project = self
            .get_project(id)
            .await?
            .ok_or_else(|| WerkstattError::ProjectNotFound { id: id.to_string() })?;
        ProjectDocument::seal(project, Timestamp::now())
    }

    /// Exports a project to a `.mltutor` file. Without an explicit path the
    /// file lands in the current directory under a name derived from the
    /// project name and today's date.
    pub async fn export_to_file(&self, id: &str, path: Option<PathBuf>) -> Result<PathBuf> {
        let document = self.export_project(id).await?;
        let path = match path {
            Some(path) => path,
            None => PathBuf::from(export_file_name(
                &document.project.name,
                Timestamp::now(),
            )),
        };

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&path, json).map_err(|e| WerkstattError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    /// Imports a project from document JSON. The project is stored under a
    /// freshly minted id regardless of the id embedded in the document.
    pub async fn import_document(&self, content: &str) -> Result<ImportOutcome> {
        let validation = validate_document(content);
        if !validation.is_valid() {
            return Err(WerkstattError::invalid_input(
                "document",
                format!("Import fehlgeschlagen: {}", validation.errors.join(" ")),
            ));
        }

        let document: ProjectDocument = serde_json::from_str(content)?;

        // Tampered documents are rejected, not merely warned about.
        if document.verify_hash()? == Some(false) {
            return Err(WerkstattError::invalid_input(
                "hash",
                "Hash-Prüfung fehlgeschlagen – die Daten wurden möglicherweise verändert.",
            ));
        }

        let now = Timestamp::now();
        let mut project = document.project;
        project.id = ids::mint_project_id();
        project.updated_at = now;
        project.phases = canonicalized(project.phases);

        let db_path = self.db_path.clone();
        let stored = project.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_project(&stored)
        })
        .await
        .map_err(|e| WerkstattError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(ImportOutcome {
            project,
            warnings: validation.warnings,
        })
    }

    /// Imports a project from a `.mltutor` file.
    pub async fn import_from_file<P: AsRef<Path>>(&self, path: P) -> Result<ImportOutcome> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| WerkstattError::FileSystem {
                path: path.as_ref().to_path_buf(),
                source: e,
            })?;
        self.import_document(&content).await
    }
}

/// Validates document JSON without importing it.
pub fn validate_document(content: &str) -> ImportValidation {
    let mut result = ImportValidation::default();

    let Ok(value) = serde_json::from_str::<serde_json::Value>(content) else {
        result
            .errors
            .push("Die Datei enthält kein gültiges JSON.".to_string());
        return result;
    };

    let Some(obj) = value.as_object() else {
        result
            .errors
            .push("Datei enthält kein gültiges JSON-Objekt.".to_string());
        return result;
    };

    let Some(version) = obj.get("version").and_then(|v| v.as_str()) else {
        result
            .errors
            .push("Fehlende oder ungültige Versionsnummer.".to_string());
        return result;
    };
    if !SUPPORTED_VERSIONS.contains(&version) {
        result.errors.push(format!(
            "Version \"{version}\" wird nicht unterstützt. Unterstützte Versionen: {}.",
            SUPPORTED_VERSIONS.join(", ")
        ));
        return result;
    }

    if obj.get("exportedAt").and_then(|v| v.as_str()).is_none() {
        result.warnings.push("Fehlender Exportzeitpunkt.".to_string());
    }

    let Some(project) = obj.get("project").and_then(|v| v.as_object()) else {
        result.errors.push("Fehlende Projektdaten.".to_string());
        return result;
    };

    for field in ["id", "name", "type", "currentPhase", "phases", "features"] {
        if project.get(field).map_or(true, |v| v.is_null()) {
            result.errors.push(format!(
                "Pflichtfeld \"{field}\" fehlt in den Projektdaten."
            ));
        }
    }

    match project.get("phases").and_then(|v| v.as_array()) {
        Some(phases) => {
            if phases.len() != 6 {
                result.warnings.push(format!(
                    "Erwartete 6 CRISP-DM-Phasen, aber {} gefunden.",
                    phases.len()
                ));
            }
        }
        None => {
            if project.get("phases").is_some_and(|v| !v.is_null()) {
                result
                    .errors
                    .push("Phasen-Daten sind kein Array.".to_string());
            }
        }
    }

    if project
        .get("features")
        .is_some_and(|v| !v.is_null() && !v.is_array())
    {
        result
            .errors
            .push("Features-Daten sind kein Array.".to_string());
    }

    result
}

/// Derives a `.mltutor` file name from a project name and a date:
/// lowercased slug, non-alphanumerics collapsed to single dashes.
pub fn export_file_name(project_name: &str, now: Timestamp) -> String {
    let mut slug = String::new();
    let mut last_was_dash = true;
    for c in project_name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
        if slug.len() >= 60 {
            break;
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "projekt" } else { slug };
    format!("{slug}-{}.mltutor", now.strftime("%Y-%m-%d"))
}

/// Overlays parsed phase records onto the canonical six-phase sequence.
/// Duplicates keep the last occurrence; unknown entries cannot exist since
/// phase ids are parsed into the enum.
fn canonicalized(phases: Vec<CrispDmPhase>) -> Vec<CrispDmPhase> {
    let mut canonical = default_phases();
    for phase in phases {
        let idx = phase.id.index();
        canonical[idx] = phase;
    }
    canonical
}
