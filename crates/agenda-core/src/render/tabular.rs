//! Spreadsheet model: five fixed sheets derived from a plan view.

use jiff::civil::DateTime;
use jiff::Zoned;

use super::generated_on;
use crate::view::{join_or, PlanView, TBD};

/// One worksheet of the tabular report.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: &'static str,
    /// Column widths in character units, left to right
    pub widths: &'static [f64],
    pub body: SheetBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SheetBody {
    /// Merged title row, a blank row, then bold keys beside their values
    KeyValue {
        title: String,
        pairs: Vec<(String, String)>,
    },
    /// Styled header row followed by bordered data rows
    Table {
        header: &'static [&'static str],
        rows: Vec<Vec<String>>,
    },
}

impl Sheet {
    /// Data rows below the header (or the key/value pairs).
    pub fn row_count(&self) -> usize {
        match &self.body {
            SheetBody::KeyValue { pairs, .. } => pairs.len(),
            SheetBody::Table { rows, .. } => rows.len(),
        }
    }
}

/// The spreadsheet export of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularReport {
    pub sheets: Vec<Sheet>,
    /// Stamped into the workbook's document properties
    pub created: DateTime,
}

impl TabularReport {
    /// Builds all five sheets. Sheets with no data keep their header row.
    pub fn build(view: &PlanView, generated_at: &Zoned) -> Self {
        Self {
            sheets: vec![
                event_details(view, generated_at),
                timeline(view),
                team_roles(view),
                budget(view),
                task_checklist(view),
            ],
            created: generated_at.datetime(),
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

fn event_details(view: &PlanView, generated_at: &Zoned) -> Sheet {
    let mut pairs: Vec<(String, String)> = view
        .event
        .rows()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    pairs.push(("Generated On".to_string(), generated_on(generated_at)));

    Sheet {
        name: "Event Details",
        widths: &[20.0, 30.0],
        body: SheetBody::KeyValue {
            title: "Event Management Plan".to_string(),
            pairs,
        },
    }
}

fn timeline(view: &PlanView) -> Sheet {
    let rows = view
        .timeline
        .iter()
        .flat_map(|timeline| &timeline.phases)
        .map(|phase| {
            vec![
                phase.name.clone(),
                phase.duration.clone().unwrap_or_else(|| TBD.to_string()),
                join_or(&phase.activities, "No tasks"),
                join_or(&phase.dependencies, "None"),
            ]
        })
        .collect();

    Sheet {
        name: "Timeline",
        widths: &[25.0; 4],
        body: SheetBody::Table {
            header: &["Phase", "Duration", "Tasks", "Dependencies"],
            rows,
        },
    }
}

fn team_roles(view: &PlanView) -> Sheet {
    let rows = view
        .roles
        .iter()
        .map(|role| {
            vec![
                role.title.clone(),
                join_or(&role.responsibilities, TBD),
                join_or(&role.skills, TBD),
                role.priority.clone(),
            ]
        })
        .collect();

    Sheet {
        name: "Team Roles",
        widths: &[30.0; 4],
        body: SheetBody::Table {
            header: &["Role Title", "Responsibilities", "Required Skills", "Priority"],
            rows,
        },
    }
}

fn budget(view: &PlanView) -> Sheet {
    let rows = view
        .budget
        .iter()
        .flat_map(|budget| &budget.lines)
        .map(|line| Vec::from(line.cells().map(String::from)))
        .collect();

    Sheet {
        name: "Budget",
        widths: &[20.0; 4],
        body: SheetBody::Table {
            header: &["Category", "Amount", "Percentage", "Notes"],
            rows,
        },
    }
}

/// One row per phase activity. Card tasks are not part of the checklist.
fn task_checklist(view: &PlanView) -> Sheet {
    let rows = view
        .timeline
        .iter()
        .flat_map(|timeline| timeline.checklist())
        .map(|(phase, activity)| {
            vec![
                activity.to_string(),
                TBD.to_string(),
                "Medium".to_string(),
                TBD.to_string(),
                "Pending".to_string(),
                format!("Part of {}", phase.name),
            ]
        })
        .collect();

    Sheet {
        name: "Task Checklist",
        widths: &[25.0; 6],
        body: SheetBody::Table {
            header: &["Task", "Assigned Role", "Priority", "Deadline", "Status", "Notes"],
            rows,
        },
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::fixtures::{full_content, record};

    fn stamp() -> Zoned {
        date(2024, 3, 5).at(14, 30, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    fn table(report: &TabularReport, name: &str) -> Vec<Vec<String>> {
        match &report.sheet(name).unwrap().body {
            SheetBody::Table { rows, .. } => rows.clone(),
            SheetBody::KeyValue { .. } => panic!("{name} is not a table"),
        }
    }

    #[test]
    fn test_absent_content_has_five_sheets_with_placeholders() {
        let view = PlanView::from_record(&record(None));
        let report = TabularReport::build(&view, &stamp());

        let names: Vec<_> = report.sheets.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["Event Details", "Timeline", "Team Roles", "Budget", "Task Checklist"]
        );

        let SheetBody::KeyValue { title, pairs } = &report.sheets[0].body else {
            panic!("event details should be key/value");
        };
        assert_eq!(title, "Event Management Plan");
        assert_eq!(pairs[0], ("Event Type".to_string(), "Corporate Retreat".to_string()));
        assert!(pairs[1..6].iter().all(|(_, value)| value == TBD));
        assert_eq!(
            pairs[6],
            ("Generated On".to_string(), "March 05, 2024 at 02:30 PM".to_string())
        );

        for sheet in &report.sheets[1..] {
            assert_eq!(sheet.row_count(), 0, "{} should be header-only", sheet.name);
        }
    }

    #[test]
    fn test_checklist_has_one_row_per_phase_task() {
        let content = json!({
            "timeline": [
                {"phase": "Plan", "tasks": ["a", "b"]},
                {"phase": "Book", "tasks": ["c", "d"]},
                {"phase": "Run", "tasks": ["e", "f"]}
            ],
            "cards": [{"title": "Card", "tasks": [{"task": "card task"}]}]
        });
        let view = PlanView::from_record(&record(Some(content)));
        let rows = table(&TabularReport::build(&view, &stamp()), "Task Checklist");

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], ["a", "TBD", "Medium", "TBD", "Pending", "Part of Plan"]);
        assert_eq!(rows[5][5], "Part of Run");
        assert!(rows.iter().all(|row| row[0] != "card task"));
    }

    #[test]
    fn test_budget_and_timeline_rows() {
        let view = PlanView::from_record(&record(Some(full_content())));
        let report = TabularReport::build(&view, &stamp());

        let budget = table(&report, "Budget");
        assert_eq!(budget[0], ["Venue", "₹50,000", "40%", ""]);

        let timeline = table(&report, "Timeline");
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0], ["Planning", "2 weeks", "Set goals; Fix dates", "None"]);
        assert_eq!(timeline[2][1], "TBD");

        let roles = table(&report, "Team Roles");
        assert_eq!(
            roles[0],
            ["Event Coordinator", "Own the schedule; Vendor contact", "Planning", "High"]
        );
    }

    #[test]
    fn test_phase_without_tasks_reads_no_tasks() {
        let content = json!({"timeline": {"phases": [{"phase": "Idle"}]}});
        let view = PlanView::from_record(&record(Some(content)));
        let report = TabularReport::build(&view, &stamp());

        assert_eq!(table(&report, "Timeline")[0], ["Idle", "TBD", "No tasks", "None"]);
        assert!(table(&report, "Task Checklist").is_empty());
    }
}
