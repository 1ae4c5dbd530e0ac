//! Plan lifecycle status.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle tag of a stored plan.
///
/// `generated` and `exported` are the well-known states; callers may record
/// any other non-blank tag, which is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanStatus {
    /// Plan content was produced by the generation step
    #[default]
    Generated,

    /// Plan has been handed out as a document
    Exported,

    /// Caller-defined state
    Other(String),
}

impl PlanStatus {
    /// Convert to the stored string representation
    pub fn as_str(&self) -> &str {
        match self {
            PlanStatus::Generated => "generated",
            PlanStatus::Exported => "exported",
            PlanStatus::Other(tag) => tag,
        }
    }
}

impl FromStr for PlanStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Ok(match tag.to_lowercase().as_str() {
            "generated" => PlanStatus::Generated,
            "exported" => PlanStatus::Exported,
            _ => PlanStatus::Other(tag.to_string()),
        })
    }
}

impl From<String> for PlanStatus {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<PlanStatus> for String {
    fn from(value: PlanStatus) -> Self {
        value.as_str().to_string()
    }
}
