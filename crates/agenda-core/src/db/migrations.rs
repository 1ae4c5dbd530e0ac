//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Columns added after the first schema version, with their definitions.
const ADDED_COLUMNS: &[(&str, &str)] = &[
    ("event_details", "TEXT"),
    ("user_id", "TEXT"),
    ("channel_id", "TEXT"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Adds columns missing from database files created by older versions.
    fn apply_migrations(&self) -> Result<()> {
        for (column, definition) in ADDED_COLUMNS {
            let present: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('plans') WHERE name = ?1",
                    [column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context("Failed to inspect plans table")?;

            if !present {
                self.connection
                    .execute(&format!("ALTER TABLE plans ADD COLUMN {column} {definition}"), [])
                    .db_context(&format!("Failed to add {column} column to plans table"))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use super::super::Database;

    #[test]
    fn test_old_database_gains_missing_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE plans (
                    plan_id TEXT PRIMARY KEY NOT NULL,
                    event_type TEXT NOT NULL DEFAULT 'general',
                    user_request TEXT NOT NULL,
                    ai_response TEXT,
                    status TEXT NOT NULL DEFAULT 'generated',
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                INSERT INTO plans (plan_id, user_request, created_at, updated_at)
                VALUES ('legacy', 'Plan a party', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z');",
            )
            .unwrap();
        }

        let db = Database::new(&path).unwrap();
        let plan = db.get_plan("legacy").unwrap().unwrap();
        assert_eq!(plan.user_request, "Plan a party");
        assert_eq!(plan.event_details, None);
    }
}
