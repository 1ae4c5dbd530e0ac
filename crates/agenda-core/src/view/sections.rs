//! Per-section projections of plan content.

use serde::Serialize;
use serde_json::{Map, Value};

use super::fields::{
    first_text, first_value, items, percentage_text, text, text_list, title_case, TBD,
};
use super::money::amount_text;

/// One actionable item from the plan's `cards` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub timeline: Option<String>,
    pub budget_estimate: Option<String>,
    pub tasks: Vec<CardTask>,
    pub resources: Vec<String>,
    pub dependencies: Vec<String>,
}

/// A task inside a card, optionally assigned to someone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardTask {
    pub task: String,
    pub assignee: Option<String>,
}

impl CardView {
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let card = value.as_object()?;
        Some(Self {
            title: first_text(card, &["title", "name"]).unwrap_or_else(|| "Action Item".to_string()),
            description: text(card.get("description")),
            category: text(card.get("category")).map(|c| title_case(&c)),
            priority: text(card.get("priority")).map(|p| title_case(&p)),
            timeline: first_text(card, &["timeline", "deadline"]),
            budget_estimate: amount_text(first_value(card, &["budget_estimate", "budget"])),
            tasks: items(card.get("tasks")).iter().filter_map(CardTask::from_value).collect(),
            resources: text_list(card.get("resources")),
            dependencies: text_list(card.get("dependencies")),
        })
    }

    /// Labelled detail rows for the fields that are present, in display order.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Category:", &self.category),
            ("Priority:", &self.priority),
            ("Timeline:", &self.timeline),
            ("Budget:", &self.budget_estimate),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

impl CardTask {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                task: first_text(map, &["task", "name", "title", "activity", "description"])
                    .unwrap_or_else(|| "Task".to_string()),
                assignee: first_text(map, &["assignee", "assigned_to", "owner"]),
            }),
            other => text(Some(other)).map(|task| Self { task, assignee: None }),
        }
    }
}

/// The plan's schedule, in whichever shape the producer used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub total_duration: Option<String>,
    pub phases: Vec<PhaseView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseView {
    pub name: String,
    pub duration: Option<String>,
    /// Activities from `tasks`, or `key_activities` when `tasks` is empty
    pub activities: Vec<String>,
    pub dependencies: Vec<String>,
}

impl TimelineView {
    /// Reads `{total_duration, phases}` or a bare list of phases.
    ///
    /// A timeline with neither a total nor any phase is absent.
    pub(crate) fn from_value(value: Option<&Value>) -> Option<Self> {
        let view = match value? {
            Value::Array(list) => Self {
                total_duration: None,
                phases: phases(list),
            },
            Value::Object(map) => Self {
                total_duration: first_text(map, &["total_duration", "duration"]),
                phases: phases(items(map.get("phases"))),
            },
            _ => return None,
        };
        (view.total_duration.is_some() || !view.phases.is_empty()).then_some(view)
    }

    /// Every activity of every phase, in order, paired with its phase.
    pub fn checklist(&self) -> impl Iterator<Item = (&PhaseView, &str)> + '_ {
        self.phases.iter().flat_map(|phase| {
            phase
                .activities
                .iter()
                .map(move |activity| (phase, activity.as_str()))
        })
    }
}

fn phases(list: &[Value]) -> Vec<PhaseView> {
    list.iter()
        .filter_map(Value::as_object)
        .map(PhaseView::from_map)
        .collect()
}

impl PhaseView {
    fn from_map(phase: &Map<String, Value>) -> Self {
        let mut activities = text_list(phase.get("tasks"));
        if activities.is_empty() {
            activities = text_list(phase.get("key_activities"));
        }
        Self {
            name: first_text(phase, &["phase", "name", "title"]).unwrap_or_else(|| "Phase".to_string()),
            duration: first_text(phase, &["duration", "timeframe"]),
            activities,
            dependencies: text_list(phase.get("dependencies")),
        }
    }
}

/// One team role the event needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleView {
    pub title: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub priority: String,
}

impl RoleView {
    /// Reads `roles`, falling back to `team_roles` when `roles` yields no
    /// role objects.
    pub(crate) fn list_from(content: &Map<String, Value>) -> Vec<Self> {
        let roles = Self::read_list(content.get("roles"));
        if roles.is_empty() {
            Self::read_list(content.get("team_roles"))
        } else {
            roles
        }
    }

    fn read_list(source: Option<&Value>) -> Vec<Self> {
        items(source)
            .iter()
            .filter_map(Value::as_object)
            .map(|role| Self {
                title: first_text(role, &["title", "role", "name"]).unwrap_or_else(|| "Role".to_string()),
                responsibilities: text_list(role.get("responsibilities")),
                skills: text_list(first_value(role, &["skills_required", "skills", "required_skills"])),
                priority: text(role.get("priority"))
                    .map(|p| title_case(&p))
                    .unwrap_or_else(|| "Medium".to_string()),
            })
            .collect()
    }
}

/// Estimated cost of the event, broken down by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetView {
    pub total_estimate: Option<String>,
    pub lines: Vec<BudgetLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: String,
    pub amount: String,
    pub percentage: String,
    pub notes: String,
}

impl BudgetLine {
    /// The cells shown in a budget table row.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.category.as_str(),
            self.amount.as_str(),
            self.percentage.as_str(),
            self.notes.as_str(),
        ]
    }
}

impl BudgetView {
    /// Reads `budget_summary`, falling back to `budget_breakdown`.
    pub(crate) fn from_content(content: &Map<String, Value>) -> Option<Self> {
        Self::from_value(content.get("budget_summary"))
            .or_else(|| Self::from_value(content.get("budget_breakdown")))
    }

    fn from_value(value: Option<&Value>) -> Option<Self> {
        let view = match value? {
            Value::Array(list) => Self {
                total_estimate: None,
                lines: lines(list),
            },
            Value::Object(map) => Self {
                total_estimate: amount_text(first_value(map, &["total_estimate", "total", "total_budget"])),
                lines: lines(items(first_value(map, &["breakdown", "categories", "items"]))),
            },
            _ => return None,
        };
        (view.total_estimate.is_some() || !view.lines.is_empty()).then_some(view)
    }
}

fn lines(list: &[Value]) -> Vec<BudgetLine> {
    list.iter()
        .filter_map(Value::as_object)
        .map(|line| BudgetLine {
            category: first_text(line, &["category", "name", "item"]).unwrap_or_else(|| TBD.to_string()),
            amount: amount_text(first_value(line, &["amount", "cost", "estimate"]))
                .unwrap_or_else(|| TBD.to_string()),
            percentage: percentage_text(line.get("percentage")),
            notes: first_text(line, &["notes", "note", "description"]).unwrap_or_default(),
        })
        .collect()
}
