//! Markdown rendering of plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! operation outcomes are wrapped in small newtypes so each interface (the
//! terminal renderer, the MCP server) prints the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Formatted     │
//! │ (PlanRecord,    │───▶│ (PlanSummaries, │───▶│    Output       │
//! │  ExportedFile)  │    │  CreateResult)  │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PlanSummaries`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use agenda_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Wrote 2 files".to_string());
//! assert_eq!(done.to_string(), "Success: Wrote 2 files\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
