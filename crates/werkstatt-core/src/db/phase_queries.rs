//! Phase record queries.
//!
//! Phase rows are always read back through the canonical six-phase sequence:
//! loading starts from the pristine default sequence and overlays whatever
//! rows exist, so a project can never surface with missing, duplicated, or
//! reordered phases regardless of what the table holds.

use jiff::Timestamp;
use rusqlite::{params, Transaction};

use crate::{
    error::{DatabaseResultExt, Result, WerkstattError},
    models::{default_phases, CrispDmPhase, CrispDmPhaseId, PhaseStatus},
};

const SELECT_PHASES_SQL: &str =
    "SELECT phase, status, completed_at FROM phases WHERE project_id = ?1 ORDER BY position";
const INSERT_PHASE_SQL: &str = "INSERT INTO phases (project_id, phase, status, completed_at, position) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_PHASES_SQL: &str = "DELETE FROM phases WHERE project_id = ?1";

impl super::Database {
    /// Loads the phase records of a project, canonicalized to the six-phase
    /// sequence. Unknown phase rows are ignored; missing ones come back
    /// pending.
    pub(super) fn load_phases(&self, project_id: &str) -> Result<Vec<CrispDmPhase>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PHASES_SQL)
            .db_context("Failed to prepare phase query")?;

        let rows: Vec<(String, String, Option<String>)> = stmt
            .query_map(params![project_id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .db_context("Failed to query phases")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch phases")?;

        let mut phases = default_phases();
        for (phase_str, status_str, completed_at_str) in rows {
            let Ok(phase_id) = phase_str.parse::<CrispDmPhaseId>() else {
                continue;
            };
            let status = status_str.parse::<PhaseStatus>().map_err(|reason| {
                WerkstattError::invalid_input("status", reason)
            })?;
            let completed_at = completed_at_str
                .map(|s| s.parse::<Timestamp>())
                .transpose()
                .map_err(|e| WerkstattError::invalid_input("completed_at", e.to_string()))?;

            phases[phase_id.index()] = CrispDmPhase {
                id: phase_id,
                status,
                completed_at,
            };
        }

        Ok(phases)
    }
}

/// Writes the full phase sequence of a project inside a transaction.
pub(super) fn insert_phases(
    tx: &Transaction,
    project_id: &str,
    phases: &[CrispDmPhase],
) -> Result<()> {
    for (position, phase) in phases.iter().enumerate() {
        tx.execute(
            INSERT_PHASE_SQL,
            params![
                project_id,
                phase.id.as_str(),
                phase.status.as_str(),
                phase.completed_at.map(|t| t.to_string()),
                position as i64
            ],
        )
        .db_context("Failed to insert phase record")?;
    }
    Ok(())
}

/// Removes all phase rows of a project inside a transaction.
pub(super) fn delete_phases(tx: &Transaction, project_id: &str) -> Result<()> {
    tx.execute(DELETE_PHASES_SQL, params![project_id])
        .db_context("Failed to delete phase records")?;
    Ok(())
}
