//! Plan summary model for listing operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanRecord, PlanStatus};
use crate::view::PlanView;

/// Compact projection of a plan for list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub plan_id: String,
    pub title: String,
    pub event_type: String,
    pub status: PlanStatus,
    pub created_at: Timestamp,
    /// Number of action items in the plan
    pub card_count: usize,
    /// Number of timeline phases in the plan
    pub phase_count: usize,
}

impl From<&PlanRecord> for PlanSummary {
    fn from(record: &PlanRecord) -> Self {
        let view = PlanView::from_record(record);
        Self {
            plan_id: record.plan_id.clone(),
            title: view.title,
            event_type: record.event_type.clone(),
            status: record.status.clone(),
            created_at: record.created_at,
            card_count: view.cards.len(),
            phase_count: view.timeline.map_or(0, |t| t.phases.len()),
        }
    }
}
