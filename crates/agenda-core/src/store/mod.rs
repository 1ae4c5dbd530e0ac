//! Key-value access to plan records.
//!
//! The export path only ever reads through [`PlanStore::get`]; the other
//! methods back the import and status operations. Implementations must be
//! safe to share between blocking worker threads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use jiff::Timestamp;

use crate::db::Database;
use crate::error::{AgendaError, Result};
use crate::models::{PlanFilter, PlanRecord, PlanStatus};

/// Storage backend for plan records.
pub trait PlanStore: Send + Sync {
    /// Looks a plan up by ID.
    fn get(&self, plan_id: &str) -> Result<Option<PlanRecord>>;

    /// Stores a new record. IDs are unique; storing an existing ID fails.
    fn put(&self, record: PlanRecord) -> Result<()>;

    /// Changes a plan's status and bumps `updated_at`, returning the updated
    /// record, or `None` if the plan does not exist.
    fn set_status(&self, plan_id: &str, status: PlanStatus) -> Result<Option<PlanRecord>>;

    /// Plans matching `filter`, newest first.
    fn list(&self, filter: &PlanFilter) -> Result<Vec<PlanRecord>>;
}

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    plans: RwLock<HashMap<String, PlanRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AgendaError {
    AgendaError::Configuration {
        message: "Plan store lock poisoned".to_string(),
    }
}

impl PlanStore for MemoryStore {
    fn get(&self, plan_id: &str) -> Result<Option<PlanRecord>> {
        let plans = self.plans.read().map_err(poisoned)?;
        Ok(plans.get(plan_id).cloned())
    }

    fn put(&self, record: PlanRecord) -> Result<()> {
        let mut plans = self.plans.write().map_err(poisoned)?;
        if plans.contains_key(&record.plan_id) {
            return Err(AgendaError::invalid_input("plan_id")
                .with_reason(format!("Plan {} already exists", record.plan_id)));
        }
        plans.insert(record.plan_id.clone(), record);
        Ok(())
    }

    fn set_status(&self, plan_id: &str, status: PlanStatus) -> Result<Option<PlanRecord>> {
        let mut plans = self.plans.write().map_err(poisoned)?;
        Ok(plans.get_mut(plan_id).map(|record| {
            record.status = status;
            record.updated_at = Timestamp::now();
            record.clone()
        }))
    }

    fn list(&self, filter: &PlanFilter) -> Result<Vec<PlanRecord>> {
        let plans = self.plans.read().map_err(poisoned)?;
        let mut matching: Vec<PlanRecord> = plans
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.plan_id.cmp(&b.plan_id))
        });
        Ok(matching)
    }
}

/// Store backed by a SQLite database file.
///
/// A connection is opened per call, so the store itself holds no handle and
/// is trivially shareable across threads.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the database once to create or migrate the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        Database::new(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Database> {
        Database::new(&self.path)
    }
}

impl PlanStore for SqliteStore {
    fn get(&self, plan_id: &str) -> Result<Option<PlanRecord>> {
        self.connect()?.get_plan(plan_id)
    }

    fn put(&self, record: PlanRecord) -> Result<()> {
        self.connect()?.insert_plan(&record)
    }

    fn set_status(&self, plan_id: &str, status: PlanStatus) -> Result<Option<PlanRecord>> {
        let db = self.connect()?;
        if !db.update_plan_status(plan_id, &status, Timestamp::now())? {
            return Ok(None);
        }
        db.get_plan(plan_id)
    }

    fn list(&self, filter: &PlanFilter) -> Result<Vec<PlanRecord>> {
        self.connect()?.list_plans(filter)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::fixtures::record;

    fn exercise(store: &dyn PlanStore) {
        let mut first = record(None);
        first.plan_id = "first".to_string();
        let mut second = record(None);
        second.plan_id = "second".to_string();
        second.created_at = Timestamp::from_second(60).unwrap();

        store.put(first.clone()).unwrap();
        store.put(second).unwrap();
        assert!(store.put(first.clone()).is_err());

        assert_eq!(store.get("first").unwrap(), Some(first));
        assert_eq!(store.get("nope").unwrap(), None);

        let listed: Vec<_> = store
            .list(&PlanFilter::default())
            .unwrap()
            .into_iter()
            .map(|p| p.plan_id)
            .collect();
        assert_eq!(listed, ["second", "first"]);

        let updated = store
            .set_status("first", PlanStatus::Exported)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, PlanStatus::Exported);
        assert!(updated.updated_at > updated.created_at);
        assert_eq!(store.set_status("nope", PlanStatus::Exported).unwrap(), None);

        let exported = store
            .list(&PlanFilter {
                status: Some(PlanStatus::Exported),
                event_type: None,
            })
            .unwrap();
        assert_eq!(exported.len(), 1);
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_sqlite_store() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("plans.db")).unwrap();
        exercise(&store);

        // Data survives reopening the file
        let reopened = SqliteStore::open(store.path()).unwrap();
        assert_eq!(reopened.list(&PlanFilter::default()).unwrap().len(), 2);
    }
}
