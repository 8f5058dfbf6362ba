//! Database operations and SQLite management for workspace projects.
//!
//! This module provides the low-level storage operations for the DS Werkstatt
//! workspace engine. It handles SQLite database connections, schema
//! management, and query interfaces for projects, their phase records and
//! features, and workspace settings.
//!
//! Only user-created projects live here. The read-only example templates are
//! served from the embedded registry and never touch the database.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod feature_queries;
pub mod phase_queries;
pub mod project_queries;
pub mod settings_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}
