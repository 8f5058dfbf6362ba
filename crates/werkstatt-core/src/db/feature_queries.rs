//! Feature queries.
//!
//! Features are stored per project with an explicit position column so that
//! the insertion order survives round trips through the database.

use rusqlite::{params, types::Type, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Feature, FeatureType},
};

const SELECT_FEATURES_SQL: &str = "SELECT id, name, feature_type, description, is_target FROM features WHERE project_id = ?1 ORDER BY position";
const INSERT_FEATURE_SQL: &str = "INSERT INTO features (project_id, id, name, feature_type, description, is_target, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_FEATURES_SQL: &str = "DELETE FROM features WHERE project_id = ?1";

impl super::Database {
    /// Loads the features of a project in insertion order.
    pub(super) fn load_features(&self, project_id: &str) -> Result<Vec<Feature>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FEATURES_SQL)
            .db_context("Failed to prepare feature query")?;

        let features = stmt
            .query_map(params![project_id], |row| {
                let type_str: String = row.get(2)?;
                let feature_type = type_str.parse::<FeatureType>().map_err(|_| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        Type::Text,
                        format!("Invalid feature type: {type_str}").into(),
                    )
                })?;

                Ok(Feature {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    feature_type,
                    description: row.get(3)?,
                    is_target: row.get(4)?,
                })
            })
            .db_context("Failed to query features")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch features")?;

        Ok(features)
    }
}

/// Writes the full feature list of a project inside a transaction.
pub(super) fn insert_features(
    tx: &Transaction,
    project_id: &str,
    features: &[Feature],
) -> Result<()> {
    for (position, feature) in features.iter().enumerate() {
        tx.execute(
            INSERT_FEATURE_SQL,
            params![
                project_id,
                feature.id,
                feature.name,
                feature.feature_type.as_str(),
                feature.description,
                feature.is_target,
                position as i64
            ],
        )
        .db_context("Failed to insert feature")?;
    }
    Ok(())
}

/// Removes all feature rows of a project inside a transaction.
pub(super) fn delete_features(tx: &Transaction, project_id: &str) -> Result<()> {
    tx.execute(DELETE_FEATURES_SQL, params![project_id])
        .db_context("Failed to delete features")?;
    Ok(())
}
