//! Normalized projections of AI-authored plan content.
//!
//! Plan content is untyped JSON whose shape varies between producers. This
//! module reads it once, defensively, into plain structs in which every
//! field is either present and non-blank or replaced by a placeholder. Both
//! report builders work only from these views, so they share one set of
//! fallback rules and never touch raw JSON.
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::models::{PlanRecord, PlanStatus};
//! use agenda_core::view::PlanView;
//! use jiff::Timestamp;
//! use serde_json::json;
//!
//! let record = PlanRecord {
//!     plan_id: "p-1".to_string(),
//!     event_type: "wedding".to_string(),
//!     user_request: "Plan a wedding for 200 guests".to_string(),
//!     ai_response: Some(json!({
//!         "timeline": [{"phase": "Planning", "tasks": ["Book venue"]}],
//!     })),
//!     event_details: None,
//!     user_id: None,
//!     channel_id: None,
//!     status: PlanStatus::Generated,
//!     created_at: Timestamp::UNIX_EPOCH,
//!     updated_at: Timestamp::UNIX_EPOCH,
//! };
//!
//! let view = PlanView::from_record(&record);
//! assert_eq!(view.title, "Action Plan");
//! assert_eq!(view.event.event_type, "Wedding");
//! assert_eq!(view.timeline.unwrap().phases[0].activities, ["Book venue"]);
//! ```

mod fields;
mod money;
mod sections;


use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::PlanRecord;

pub use fields::{join_or, TBD};
pub use money::format_inr;
pub use sections::{BudgetLine, BudgetView, CardTask, CardView, PhaseView, RoleView, TimelineView};

use fields::{first_value, items, non_blank, object, text, title_case};
use money::amount_text;

/// Everything the report builders need from one plan record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanView {
    pub plan_id: String,
    pub title: String,
    pub request: String,
    pub overview: Option<String>,
    pub event: EventSummary,
    pub cards: Vec<CardView>,
    /// Absent when the content carries no recognizable timeline
    pub timeline: Option<TimelineView>,
    pub roles: Vec<RoleView>,
    /// Absent when the content carries no recognizable budget
    pub budget: Option<BudgetView>,
}

/// Key facts about the event, each defaulting to [`TBD`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub event_type: String,
    pub date: String,
    pub venue: String,
    pub attendees: String,
    pub duration: String,
    pub budget: String,
}

impl EventSummary {
    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Event Type", self.event_type.as_str()),
            ("Date", self.date.as_str()),
            ("Venue", self.venue.as_str()),
            ("Expected Attendees", self.attendees.as_str()),
            ("Duration", self.duration.as_str()),
            ("Budget", self.budget.as_str()),
        ]
    }
}

impl Default for PlanView {
    fn default() -> Self {
        Self {
            plan_id: String::new(),
            title: "Action Plan".to_string(),
            request: "No request specified".to_string(),
            overview: None,
            event: EventSummary {
                event_type: "General".to_string(),
                date: TBD.to_string(),
                venue: TBD.to_string(),
                attendees: TBD.to_string(),
                duration: TBD.to_string(),
                budget: TBD.to_string(),
            },
            cards: Vec::new(),
            timeline: None,
            roles: Vec::new(),
            budget: None,
        }
    }
}

impl PlanView {
    /// Builds the view of a stored plan. Never fails.
    pub fn from_record(record: &PlanRecord) -> Self {
        let defaults = Self::default();
        let empty = Map::new();
        let content = content_root(record.ai_response.as_ref()).unwrap_or(&empty);

        let timeline = TimelineView::from_value(content.get("timeline"));
        let budget = BudgetView::from_content(content);
        let details = object(record.event_details.as_ref())
            .or_else(|| object(content.get("event_details")))
            .unwrap_or(&empty);

        let or_tbd = |value: Option<String>| value.unwrap_or_else(|| TBD.to_string());
        let event = EventSummary {
            event_type: non_blank(&record.event_type)
                .map(|t| title_case(&t))
                .unwrap_or(defaults.event.event_type),
            date: or_tbd(text(details.get("date"))),
            venue: or_tbd(text(details.get("venue"))),
            attendees: or_tbd(text(first_value(details, &["attendees", "expected_attendees"]))),
            duration: or_tbd(
                text(details.get("duration"))
                    .or_else(|| timeline.as_ref().and_then(|t| t.total_duration.clone())),
            ),
            budget: or_tbd(
                amount_text(details.get("budget"))
                    .or_else(|| budget.as_ref().and_then(|b| b.total_estimate.clone())),
            ),
        };

        Self {
            plan_id: record.plan_id.clone(),
            title: text(content.get("title")).unwrap_or(defaults.title),
            request: non_blank(&record.user_request).unwrap_or(defaults.request),
            overview: text(content.get("overview")),
            event,
            cards: items(content.get("cards"))
                .iter()
                .filter_map(CardView::from_value)
                .collect(),
            timeline,
            roles: RoleView::list_from(content),
            budget,
        }
    }

    /// Builds the view of an optional record; `None` yields all placeholders.
    pub fn from_optional(record: Option<&PlanRecord>) -> Self {
        record.map(Self::from_record).unwrap_or_default()
    }
}

/// The content object, unwrapping a top-level `action_plan` envelope.
fn content_root(value: Option<&Value>) -> Option<&Map<String, Value>> {
    let root = object(value)?;
    Some(object(root.get("action_plan")).unwrap_or(root))
}
