//! Data models for stored event plans.
//!
//! This module contains the domain types persisted by the plan store and
//! passed between the store, the export coordinator and the interfaces.
//! Display implementations live in [`crate::display::models`]; the
//! normalized per-section projections used by the report builders live in
//! [`crate::view`].
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::models::{PlanRecord, PlanStatus};
//! use jiff::Timestamp;
//! use serde_json::json;
//!
//! let record = PlanRecord {
//!     plan_id: "demo".to_string(),
//!     event_type: "conference".to_string(),
//!     user_request: "Plan a two-day developer conference".to_string(),
//!     ai_response: Some(json!({"title": "DevConf"})),
//! #   event_details: None,
//! #   user_id: None,
//! #   channel_id: None,
//!     status: PlanStatus::Generated,
//!     created_at: Timestamp::UNIX_EPOCH,
//!     updated_at: Timestamp::UNIX_EPOCH,
//! };
//! println!("{}", record); // Markdown overview of the plan
//! ```

pub mod filters;
pub mod format;
pub mod record;
pub mod status;
pub mod summary;

pub use filters::PlanFilter;
pub use format::ExportFormat;
pub use record::{parse_plan_content, PlanRecord};
pub use status::PlanStatus;
pub use summary::PlanSummary;
