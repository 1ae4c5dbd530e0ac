//! Filter types for querying plans.

use serde::{Deserialize, Serialize};

use super::{PlanRecord, PlanStatus};
use crate::params::ListPlans;

/// Filter options for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanFilter {
    /// Only plans with this status
    pub status: Option<PlanStatus>,

    /// Only plans with this event type (case-insensitive)
    pub event_type: Option<String>,
}

impl PlanFilter {
    /// Whether a record passes every configured condition.
    pub fn matches(&self, record: &PlanRecord) -> bool {
        let status_ok = self
            .status
            .as_ref()
            .is_none_or(|status| *status == record.status);
        let event_ok = self
            .event_type
            .as_ref()
            .is_none_or(|event| event.eq_ignore_ascii_case(&record.event_type));
        status_ok && event_ok
    }
}

impl From<&ListPlans> for PlanFilter {
    fn from(params: &ListPlans) -> Self {
        Self {
            status: params
                .status
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| PlanStatus::from(s.to_string())),
            event_type: params
                .event_type
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        }
    }
}
