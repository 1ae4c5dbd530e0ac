//! Display implementations for domain models.
//!
//! Plans are rendered as Markdown from their [`PlanView`], so the terminal
//! shows the same placeholders and fallbacks as the exported documents.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::export::ExportedFile;
use crate::models::{PlanRecord, PlanStatus, PlanSummary};
use crate::view::{join_or, BudgetView, CardView, PlanView, RoleView, TimelineView, TBD};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = PlanView::from_record(self);

        writeln!(f, "# {}", view.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.plan_id)?;
        writeln!(f, "- Event Type: {}", view.event.event_type)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Request\n\n{}", view.request)?;

        if let Some(overview) = &view.overview {
            writeln!(f, "\n## Overview\n\n{overview}")?;
        }

        let known: Vec<_> = view
            .event
            .rows()
            .into_iter()
            .skip(1)
            .filter(|(_, value)| *value != TBD)
            .collect();
        if !known.is_empty() {
            writeln!(f, "\n## Event Details\n")?;
            for (label, value) in known {
                writeln!(f, "- **{label}**: {value}")?;
            }
        }

        write_cards(f, &view.cards)?;
        if let Some(timeline) = &view.timeline {
            write_timeline(f, timeline)?;
        }
        write_roles(f, &view.roles)?;
        if let Some(budget) = &view.budget {
            write_budget(f, budget)?;
        }
        Ok(())
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[CardView]) -> fmt::Result {
    if cards.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## Action Items")?;
    for (index, card) in cards.iter().enumerate() {
        writeln!(f, "\n### {}. {}\n", index + 1, card.title)?;
        if let Some(description) = &card.description {
            writeln!(f, "{description}\n")?;
        }
        for (label, value) in card.details() {
            writeln!(f, "- **{label}** {value}")?;
        }
        for task in &card.tasks {
            match &task.assignee {
                Some(assignee) => writeln!(f, "- [ ] {} ({assignee})", task.task)?,
                None => writeln!(f, "- [ ] {}", task.task)?,
            }
        }
    }
    Ok(())
}

fn write_timeline(f: &mut fmt::Formatter<'_>, timeline: &TimelineView) -> fmt::Result {
    writeln!(f, "\n## Timeline")?;
    if let Some(total) = &timeline.total_duration {
        writeln!(f, "\nTotal Duration: {total}")?;
    }
    for phase in &timeline.phases {
        writeln!(
            f,
            "\n### {} ({})\n",
            phase.name,
            phase.duration.as_deref().unwrap_or(TBD)
        )?;
        for activity in &phase.activities {
            writeln!(f, "- {activity}")?;
        }
    }
    Ok(())
}

fn write_roles(f: &mut fmt::Formatter<'_>, roles: &[RoleView]) -> fmt::Result {
    if roles.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## Team Roles\n")?;
    for role in roles {
        writeln!(
            f,
            "- **{}** ({}): {}",
            role.title,
            role.priority,
            join_or(&role.responsibilities, TBD)
        )?;
    }
    Ok(())
}

fn write_budget(f: &mut fmt::Formatter<'_>, budget: &BudgetView) -> fmt::Result {
    writeln!(f, "\n## Budget\n")?;
    if let Some(total) = &budget.total_estimate {
        writeln!(f, "Total Estimate: {total}\n")?;
    }
    if !budget.lines.is_empty() {
        writeln!(f, "| Category | Amount | Percentage | Notes |")?;
        writeln!(f, "|---|---|---|---|")?;
        for line in &budget.lines {
            writeln!(f, "| {} |", line.cells().join(" | "))?;
        }
    }
    Ok(())
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.plan_id)?;
        writeln!(f)?;
        writeln!(f, "- **Event Type**: {}", self.event_type)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(
            f,
            "- **Contents**: {} action items, {} phases",
            self.card_count, self.phase_count
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for ExportedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **File**: {}", self.file_name)?;
        writeln!(f, "- **Format**: {} (.{})", self.format, self.format.extension())?;
        writeln!(f, "- **Path**: {}", self.path.display())?;
        writeln!(f, "- **Size**: {} bytes", self.size)
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::{full_content, record};

    #[test]
    fn test_plan_markdown_sections() {
        let text = record(Some(full_content())).to_string();

        assert!(text.starts_with("# Goa Engineering Retreat\n"));
        assert!(text.contains("- Status: generated"));
        assert!(text.contains("### 1. Book the venue"));
        assert!(text.contains("- [ ] Compare three resorts (Ops lead)"));
        assert!(text.contains("### Execution (TBD)"));
        assert!(text.contains("| Venue | ₹50,000 | 40% |  |"));
        assert!(text.contains("- **Event Coordinator** (High)"));
    }

    #[test]
    fn test_plan_markdown_without_content() {
        let text = record(None).to_string();

        assert!(text.starts_with("# Action Plan\n"));
        assert!(text.contains("## Request"));
        assert!(!text.contains("## Action Items"));
        assert!(!text.contains("## Event Details"));
    }
}
