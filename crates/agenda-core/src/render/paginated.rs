//! Report model: a flat sequence of typeset blocks derived from a plan view.

use jiff::Zoned;

use super::generated_on;
use crate::view::{BudgetView, CardView, PlanView, TimelineView};

/// Column widths, in points, of a card's details table.
const DETAILS_WIDTHS: [f32; 2] = [108.0, 288.0];
/// Column widths, in points, of the budget table.
const BUDGET_WIDTHS: [f32; 3] = [144.0, 144.0, 108.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Grey bold label column beside plain values
    Details,
    /// Grey bold header row above centered data rows
    Header,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<f32>,
    pub style: TableStyle,
}

/// One unit of flowing content. Lines of a block are placed top to bottom
/// and wrap at the page margins.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    CardHeading(String),
    /// Bold run-in line such as `Tasks:` or a phase name
    Label(String),
    Paragraph(String),
    Bullet(String),
    Table(Table),
    /// Vertical gap in points
    Spacer(f32),
}

/// The printable export of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedReport {
    pub blocks: Vec<Block>,
}

impl PaginatedReport {
    /// Builds the block sequence. Sections with no data are left out
    /// entirely, headings included.
    pub fn build(view: &PlanView, generated_at: &Zoned) -> Self {
        let mut blocks = vec![
            Block::Title(view.title.clone()),
            Block::Spacer(20.0),
            Block::Heading("Request".to_string()),
            Block::Paragraph(view.request.clone()),
            Block::Spacer(12.0),
        ];

        if let Some(overview) = &view.overview {
            blocks.push(Block::Heading("Overview".to_string()));
            blocks.push(Block::Paragraph(overview.clone()));
            blocks.push(Block::Spacer(12.0));
        }

        if !view.cards.is_empty() {
            blocks.push(Block::Heading("Action Items".to_string()));
            for (index, card) in view.cards.iter().enumerate() {
                push_card(&mut blocks, index + 1, card);
            }
            blocks.push(Block::Spacer(12.0));
        }

        if let Some(timeline) = &view.timeline {
            push_timeline(&mut blocks, timeline);
        }

        if let Some(budget) = &view.budget {
            push_budget(&mut blocks, budget);
        }

        blocks.push(Block::Spacer(30.0));
        blocks.push(Block::Paragraph(format!("Generated on {}", generated_on(generated_at))));

        Self { blocks }
    }

    /// Text of every heading block, in order.
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

fn push_card(blocks: &mut Vec<Block>, number: usize, card: &CardView) {
    blocks.push(Block::CardHeading(format!("{number}. {}", card.title)));

    if let Some(description) = &card.description {
        blocks.push(Block::Paragraph(description.clone()));
    }

    let details = card.details();
    if !details.is_empty() {
        blocks.push(Block::Table(Table {
            rows: details
                .into_iter()
                .map(|(label, value)| vec![label.to_string(), value.to_string()])
                .collect(),
            widths: DETAILS_WIDTHS.to_vec(),
            style: TableStyle::Details,
        }));
    }

    if !card.tasks.is_empty() {
        blocks.push(Block::Label("Tasks:".to_string()));
        for task in &card.tasks {
            let text = match &task.assignee {
                Some(assignee) => format!("{} (Assigned to: {assignee})", task.task),
                None => task.task.clone(),
            };
            blocks.push(Block::Bullet(text));
        }
    }

    blocks.push(Block::Spacer(15.0));
}

fn push_timeline(blocks: &mut Vec<Block>, timeline: &TimelineView) {
    blocks.push(Block::Heading("Timeline Summary".to_string()));
    if let Some(total) = &timeline.total_duration {
        blocks.push(Block::Paragraph(format!("Total Duration: {total}")));
    }
    for phase in &timeline.phases {
        let duration = phase.duration.as_deref().unwrap_or("Duration TBD");
        blocks.push(Block::Label(format!("{} - {duration}", phase.name)));
        blocks.extend(phase.activities.iter().cloned().map(Block::Bullet));
    }
    blocks.push(Block::Spacer(12.0));
}

fn push_budget(blocks: &mut Vec<Block>, budget: &BudgetView) {
    blocks.push(Block::Heading("Budget Summary".to_string()));
    if let Some(total) = &budget.total_estimate {
        blocks.push(Block::Paragraph(format!("Total Estimate: {total}")));
    }
    if !budget.lines.is_empty() {
        let header = ["Category", "Amount", "Percentage"].map(String::from).to_vec();
        let rows = std::iter::once(header)
            .chain(budget.lines.iter().map(|line| {
                vec![line.category.clone(), line.amount.clone(), line.percentage.clone()]
            }))
            .collect();
        blocks.push(Block::Table(Table {
            rows,
            widths: BUDGET_WIDTHS.to_vec(),
            style: TableStyle::Header,
        }));
    }
    blocks.push(Block::Spacer(12.0));
}
