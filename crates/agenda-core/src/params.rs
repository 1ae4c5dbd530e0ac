//! Parameter structures for agenda operations
//!
//! This module contains shared parameter structures used across interfaces
//! (CLI, MCP) without framework-specific derives. Each interface wraps them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP layer is enabled with the `schema`
//! feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a stored plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanId {
    /// The plan ID returned by import
    pub plan_id: String,
}

/// Parameters for storing a freshly generated plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportPlan {
    /// Original natural-language request (required)
    pub user_request: String,
    /// Event classification, defaults to "general"
    #[serde(default)]
    pub event_type: Option<String>,
    /// Structured plan content as produced by the language model
    #[serde(default)]
    pub content: Option<Value>,
    /// Optional event facts (date, venue, attendees, duration, budget)
    #[serde(default)]
    pub event_details: Option<Value>,
    /// Requesting user, if known
    #[serde(default)]
    pub user_id: Option<String>,
    /// Originating channel, if known
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Only list plans with this status (e.g. "generated", "exported")
    #[serde(default)]
    pub status: Option<String>,
    /// Only list plans of this event type
    #[serde(default)]
    pub event_type: Option<String>,
}

/// Parameters for changing a plan's lifecycle status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetStatus {
    /// Plan to update
    pub plan_id: String,
    /// New status tag ("generated", "exported" or any caller-defined value)
    pub status: String,
}

/// Parameters for exporting a plan to a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExportPlan {
    /// Plan to export
    pub plan_id: String,
    /// "excel"/"tabular" for a spreadsheet, "pdf"/"paginated" for a report
    pub format: String,
}

/// Parameters for reading back an exported file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Download {
    /// Bare file name as returned by export
    pub file_name: String,
}
