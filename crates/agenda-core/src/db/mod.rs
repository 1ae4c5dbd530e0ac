//! SQLite persistence for plan records.
//!
//! Plans are stored one row each, with the AI-authored content and event
//! details kept as JSON text. Timestamps are RFC 3339 strings so that
//! `ORDER BY created_at` sorts chronologically.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;

/// A schema-ready connection to the plan database.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Connection::open(path)
            .db_context("Failed to open database connection")
            .and_then(Self::prepared)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Connection::open_in_memory()
            .db_context("Failed to open in-memory database")
            .and_then(Self::prepared)
    }

    fn prepared(connection: Connection) -> Result<Self> {
        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
