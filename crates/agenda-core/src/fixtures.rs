//! Shared plan fixtures for unit tests.

use jiff::Timestamp;
use serde_json::{json, Value};

use crate::models::{PlanRecord, PlanStatus};

pub(crate) fn record(content: Option<Value>) -> PlanRecord {
    PlanRecord {
        plan_id: "plan-1".to_string(),
        event_type: "corporate retreat".to_string(),
        user_request: "Organize a 3-day retreat for 40 engineers in Goa".to_string(),
        ai_response: content,
        event_details: None,
        user_id: None,
        channel_id: None,
        status: PlanStatus::Generated,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// Content in the card/summary shape, with every section populated.
pub(crate) fn full_content() -> Value {
    json!({
        "title": "Goa Engineering Retreat",
        "overview": "Three days of workshops and team activities by the beach.",
        "cards": [
            {
                "title": "Book the venue",
                "description": "Shortlist and reserve a beach resort.",
                "category": "logistics",
                "priority": "HIGH",
                "timeline": "Week 1",
                "budget_estimate": 50000,
                "tasks": [
                    {"task": "Compare three resorts", "assignee": "Ops lead"},
                    {"task": "Sign the contract"}
                ],
                "resources": ["Vendor list"],
                "dependencies": []
            },
            {
                "title": "Plan sessions",
                "category": "content"
            }
        ],
        "timeline": {
            "total_duration": "6 weeks",
            "phases": [
                {"phase": "Planning", "duration": "2 weeks", "key_activities": ["Set goals", "Fix dates"]},
                {"phase": "Booking", "duration": "2 weeks", "key_activities": ["Book venue", "Book travel"]},
                {"phase": "Execution", "key_activities": ["Run sessions", "Collect feedback"]}
            ]
        },
        "budget_summary": {
            "total_estimate": "₹1,25,000",
            "breakdown": [
                {"category": "Venue", "amount": "₹50,000", "percentage": 40},
                {"category": "Travel", "amount": 75000, "percentage": "60%", "notes": "Flights"}
            ]
        },
        "team_roles": [
            {
                "role": "Event Coordinator",
                "responsibilities": ["Own the schedule", "Vendor contact"],
                "skills_required": ["Planning"],
                "priority": "high"
            }
        ]
    })
}
