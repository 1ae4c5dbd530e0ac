//! Report builders.
//!
//! Each format is built in two stages: a plain in-memory model assembled
//! from a [`PlanView`] ([`TabularReport`], [`PaginatedReport`]), then a
//! serializer that turns the model into file bytes. Models are values built
//! per call; nothing here is shared between exports.

pub mod paginated;
mod pdf;
mod text;
pub mod tabular;
mod xlsx;

use jiff::Zoned;

use crate::error::Result;
use crate::models::ExportFormat;
use crate::view::PlanView;

pub use paginated::{Block, PaginatedReport, Table, TableStyle};
pub use tabular::{Sheet, SheetBody, TabularReport};

/// Renders a plan view into the bytes of the requested document format.
pub fn render(view: &PlanView, format: ExportFormat, generated_at: &Zoned) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Tabular => TabularReport::build(view, generated_at).to_xlsx(),
        ExportFormat::Paginated => PaginatedReport::build(view, generated_at).to_pdf(),
    }
}

/// Human-readable generation stamp, e.g. `March 05, 2024 at 02:30 PM`.
pub fn generated_on(at: &Zoned) -> String {
    at.strftime("%B %d, %Y at %I:%M %p").to_string()
}
