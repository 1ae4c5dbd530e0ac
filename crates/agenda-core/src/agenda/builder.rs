//! Builder for creating and configuring Agenda instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::{blocking, Agenda};
use crate::{
    error::{AgendaError, Result},
    store::{MemoryStore, PlanStore, SqliteStore},
};

/// Builder for creating and configuring Agenda instances.
#[derive(Clone, Default)]
pub struct AgendaBuilder {
    database_path: Option<PathBuf>,
    export_dir: Option<PathBuf>,
    in_memory: bool,
    store: Option<Arc<dyn PlanStore>>,
}

impl AgendaBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/agenda/agenda.db` or `~/.local/share/agenda/agenda.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the directory exported documents are written to.
    ///
    /// Defaults to an `exports` directory next to the database file.
    pub fn with_export_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.export_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps plans in memory only. The database path is ignored.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Uses a caller-provided store instead of building one.
    pub fn with_store(mut self, store: Arc<dyn PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured agenda instance.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::FileSystem` if the database directory cannot be
    /// created, `AgendaError::Database` if database initialization fails, or
    /// `AgendaError::XdgDirectory` if no default location can be determined.
    pub async fn build(self) -> Result<Agenda> {
        let (store, default_exports): (Arc<dyn PlanStore>, Option<PathBuf>) =
            match (self.store, self.in_memory) {
                (Some(store), _) => (store, None),
                (None, true) => (Arc::new(MemoryStore::new()), None),
                (None, false) => {
                    let db_path = match self.database_path {
                        Some(path) => path,
                        None => Self::default_database_path()?,
                    };
                    if let Some(parent) = db_path.parent() {
                        std::fs::create_dir_all(parent)
                            .map_err(|e| AgendaError::file_system(parent, e))?;
                    }

                    let exports = db_path.parent().map(|parent| parent.join("exports"));
                    let store = blocking(move || SqliteStore::open(db_path)).await?;
                    debug!("Opened plan database at {}", store.path().display());
                    (Arc::new(store), exports)
                }
            };

        let export_dir = match self.export_dir.or(default_exports) {
            Some(dir) => dir,
            None => Self::default_export_dir()?,
        };

        Ok(Agenda::new(store, export_dir))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("agenda")
            .place_data_file("agenda.db")
            .map_err(|e| AgendaError::XdgDirectory(e.to_string()))
    }

    fn default_export_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("agenda")
            .create_data_directory("exports")
            .map_err(|e| AgendaError::XdgDirectory(e.to_string()))
    }
}
