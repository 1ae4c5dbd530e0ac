//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};
use serde_json::Value;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{PlanFilter, PlanRecord, PlanStatus},
};

const PLAN_COLUMNS: &str = "plan_id, event_type, user_request, ai_response, event_details, user_id, channel_id, status, created_at, updated_at";
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (plan_id, event_type, user_request, ai_response, event_details, user_id, channel_id, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_STATUS_SQL: &str = "UPDATE plans SET status = ?1, updated_at = ?2 WHERE plan_id = ?3";

impl super::Database {
    /// Stores a new plan record.
    pub fn insert_plan(&self, record: &PlanRecord) -> Result<()> {
        let ai_response = record.ai_response.as_ref().map(Value::to_string);
        let event_details = record.event_details.as_ref().map(Value::to_string);

        self.connection
            .execute(
                INSERT_PLAN_SQL,
                params![
                    record.plan_id,
                    record.event_type,
                    record.user_request,
                    ai_response,
                    event_details,
                    record.user_id,
                    record.channel_id,
                    record.status.as_str(),
                    record.created_at.to_string(),
                    record.updated_at.to_string(),
                ],
            )
            .db_context("Failed to insert plan")?;
        Ok(())
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, plan_id: &str) -> Result<Option<PlanRecord>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {PLAN_COLUMNS} FROM plans WHERE plan_id = ?1"))
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![plan_id], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Sets a plan's status. Returns `false` if no plan has this ID.
    pub fn update_plan_status(
        &self,
        plan_id: &str,
        status: &PlanStatus,
        updated_at: Timestamp,
    ) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                UPDATE_STATUS_SQL,
                params![status.as_str(), updated_at.to_string(), plan_id],
            )
            .db_context("Failed to update plan status")?;
        Ok(changed > 0)
    }

    /// Lists plans matching the filter, newest first.
    pub fn list_plans(&self, filter: &PlanFilter) -> Result<Vec<PlanRecord>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM plans");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(ref status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(status.as_str().to_string());
        }

        if let Some(ref event_type) = filter.event_type {
            conditions.push("event_type = ? COLLATE NOCASE");
            params_vec.push(event_type.clone());
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC, plan_id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map(rusqlite::params_from_iter(params_vec.iter()), plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;
        Ok(plans)
    }
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<PlanRecord> {
    Ok(PlanRecord {
        plan_id: row.get(0)?,
        event_type: row.get(1)?,
        user_request: row.get(2)?,
        ai_response: json_column(row, 3)?,
        event_details: json_column(row, 4)?,
        user_id: row.get(5)?,
        channel_id: row.get(6)?,
        status: PlanStatus::from(row.get::<_, String>(7)?),
        created_at: timestamp_column(row, 8)?,
        updated_at: timestamp_column(row, 9)?,
    })
}

fn json_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<Value>> {
    row.get::<_, Option<String>>(index)?
        .map(|text| {
            serde_json::from_str(&text).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use serde_json::json;

    use super::super::Database;
    use super::*;

    fn plan(id: &str, event_type: &str, created_at: Timestamp) -> PlanRecord {
        PlanRecord {
            plan_id: id.to_string(),
            event_type: event_type.to_string(),
            user_request: format!("Request for {id}"),
            ai_response: Some(json!({"title": id})),
            event_details: Some(json!({"venue": "Hall"})),
            user_id: Some("u-1".to_string()),
            channel_id: None,
            status: PlanStatus::Generated,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_insert_and_get_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let record = plan("a", "wedding", Timestamp::UNIX_EPOCH);
        db.insert_plan(&record).unwrap();

        assert_eq!(db.get_plan("a").unwrap(), Some(record));
        assert_eq!(db.get_plan("missing").unwrap(), None);
    }

    #[test]
    fn test_duplicate_id_is_a_database_error() {
        let db = Database::open_in_memory().unwrap();
        let record = plan("a", "wedding", Timestamp::UNIX_EPOCH);
        db.insert_plan(&record).unwrap();
        assert!(db.insert_plan(&record).is_err());
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let base = Timestamp::UNIX_EPOCH;
        db.insert_plan(&plan("old", "Wedding", base)).unwrap();
        db.insert_plan(&plan("new", "wedding", base + 1.hour())).unwrap();
        db.insert_plan(&plan("other", "conference", base + 2.hours()))
            .unwrap();

        let all = db.list_plans(&PlanFilter::default()).unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.plan_id.as_str()).collect();
        assert_eq!(ids, ["other", "new", "old"]);

        let weddings = db
            .list_plans(&PlanFilter {
                event_type: Some("WEDDING".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(weddings.len(), 2);

        assert!(db
            .update_plan_status("old", &PlanStatus::Exported, base + 3.hours())
            .unwrap());
        let exported = db
            .list_plans(&PlanFilter {
                status: Some(PlanStatus::Exported),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].updated_at, base + 3.hours());
    }

    #[test]
    fn test_update_unknown_plan_reports_false() {
        let db = Database::open_in_memory().unwrap();
        assert!(!db
            .update_plan_status("nope", &PlanStatus::Exported, Timestamp::UNIX_EPOCH)
            .unwrap());
    }
}
