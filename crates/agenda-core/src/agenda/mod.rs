//! High-level API for storing and exporting event plans.
//!
//! [`Agenda`] is the single entry point used by the command line and the MCP
//! server. It owns a [`PlanStore`] and the export directory, and runs every
//! store or render call on a blocking worker so async callers never stall.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Agenda      │    │   PlanStore /   │
//! │  (CLI, MCP)     │───▶│ (plan_ops,      │───▶│   render +      │
//! │                 │    │  export_ops)    │    │   export dir    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::{AgendaBuilder, params::{ExportPlan, ImportPlan}};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let exports = tempfile::tempdir()?;
//! let agenda = AgendaBuilder::new()
//!     .in_memory()
//!     .with_export_dir(Some(exports.path()))
//!     .build()
//!     .await?;
//!
//! let plan = agenda
//!     .import_plan(&ImportPlan {
//!         user_request: "Plan a product launch for 100 guests".to_string(),
//!         content: Some(json!({"title": "Launch Night"})),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let file = agenda
//!     .export_plan(&ExportPlan {
//!         plan_id: plan.plan_id.clone(),
//!         format: "pdf".to_string(),
//!     })
//!     .await?;
//! assert!(file.file_name.ends_with(".pdf"));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

pub mod builder;
pub mod export_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::AgendaBuilder;

use crate::error::{join_error, Result};
use crate::store::PlanStore;

/// Plan store plus export directory.
#[derive(Clone)]
pub struct Agenda {
    pub(crate) store: Arc<dyn PlanStore>,
    pub(crate) export_dir: PathBuf,
}

impl Agenda {
    pub(crate) fn new(store: Arc<dyn PlanStore>, export_dir: PathBuf) -> Self {
        Self { store, export_dir }
    }

    /// Directory exported documents are written to.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

/// Runs blocking work on the tokio blocking pool.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|e| join_error(&e))?
}
