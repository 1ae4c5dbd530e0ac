//! Core library for the Agenda event planning exporter.
//!
//! This crate stores AI-generated event plans and turns them into
//! shareable documents: a multi-sheet spreadsheet (the tabular report) and
//! a paginated PDF (the paginated report).
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the persisted [`models::PlanRecord`] and its
//!   filters and summaries
//! - **View** ([`view`]): a normalized projection of the loosely structured
//!   plan content, with placeholders for anything missing
//! - **Render** ([`render`]): report models built from the view, serialized
//!   to xlsx or PDF bytes
//! - **Export** ([`export`]): atomic writes into the export directory and
//!   safe read-back by file name
//! - **Display** ([`display`]): Markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_core::{AgendaBuilder, params::{ImportPlan, ListPlans}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agenda = AgendaBuilder::new().in_memory().build().await?;
//!
//! let plan = agenda
//!     .import_plan(&ImportPlan {
//!         user_request: "Team offsite for 25 people".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Imported plan: {}", plan);
//!
//! let plans = agenda.list_plans_summary(&ListPlans::default()).await?;
//! for plan in &plans {
//!     println!("Plan: {}", plan.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod agenda;
pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod render;
pub mod store;
pub mod view;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaBuilder};
pub use db::Database;
pub use display::{CreateResult, OperationStatus, PlanSummaries, UpdateResult};
pub use error::{AgendaError, Result};
pub use export::ExportedFile;
pub use models::{ExportFormat, PlanFilter, PlanRecord, PlanStatus, PlanSummary};
pub use params::{Download, ExportPlan, ImportPlan, ListPlans, PlanId, SetStatus};
pub use view::PlanView;
