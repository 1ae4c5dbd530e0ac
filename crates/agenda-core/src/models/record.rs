//! Plan record definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PlanStatus;
use crate::error::{AgendaError, Result};

/// One generated event plan together with its request metadata.
///
/// The AI-authored part lives in [`PlanRecord::ai_response`] as untyped
/// JSON; nothing about its shape is guaranteed. Use
/// [`crate::view::PlanView`] to read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    /// Opaque unique identifier assigned at import
    pub plan_id: String,

    /// Free-text event classification (e.g. "wedding", "conference")
    pub event_type: String,

    /// The natural-language request the plan answers
    pub user_request: String,

    /// Structured plan content produced by the language model
    #[serde(default, alias = "ai_plan")]
    pub ai_response: Option<Value>,

    /// Optional event facts (date, venue, attendees, duration, budget)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_details: Option<Value>,

    /// User that requested the plan, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Channel the plan was requested from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was stored (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last status change (UTC)
    pub updated_at: Timestamp,
}

/// Parses raw language-model output into plan content.
///
/// Models often wrap JSON in Markdown fences or add a sentence before and
/// after it. Fences are stripped and the outermost `{ ... }` object is
/// parsed.
///
/// # Errors
///
/// Returns `AgendaError::Serialization` when no JSON object can be parsed.
///
/// # Examples
///
/// ```rust
/// use agenda_core::models::parse_plan_content;
///
/// let raw = "Here is your plan:\n```json\n{\"title\": \"Gala\"}\n```";
/// let content = parse_plan_content(raw).unwrap();
/// assert_eq!(content["title"], "Gala");
/// ```
pub fn parse_plan_content(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => return Ok(value),
        Err(e) if !trimmed.contains('{') => return Err(AgendaError::from(e)),
        Err(_) => {}
    }

    let start = trimmed.find('{').unwrap_or(0);
    let end = trimmed.rfind('}').map_or(trimmed.len(), |i| i + 1);
    let candidate = if start < end { &trimmed[start..end] } else { trimmed };
    Ok(serde_json::from_str(candidate)?)
}
