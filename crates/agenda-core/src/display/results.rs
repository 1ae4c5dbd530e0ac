//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::export::ExportedFile;
use crate::models::PlanRecord;

/// Wrapper type for displaying the result of an operation that created
/// something: an imported plan or an exported document.
///
/// # Examples
///
/// ```rust
/// use agenda_core::{display::CreateResult, export::ExportedFile, models::ExportFormat};
///
/// let file = ExportedFile {
///     plan_id: "p1".to_string(),
///     format: ExportFormat::Paginated,
///     path: "/tmp/exports/action_plan_p1_20240305_143000.pdf".into(),
///     file_name: "action_plan_p1_20240305_143000.pdf".to_string(),
///     size: 2048,
/// };
///
/// let text = CreateResult::new(file).to_string();
/// assert!(text.starts_with("Exported plan p1 as paginated report"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlanRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported plan with ID: {}", self.resource.plan_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ExportedFile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported plan {} as {} report",
            self.resource.plan_id, self.resource.format
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<PlanRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.plan_id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::record;

    #[test]
    fn test_import_result_shows_plan() {
        let text = CreateResult::new(record(None)).to_string();
        assert!(text.starts_with("Imported plan with ID: plan-1\n"));
        assert!(text.contains("# Action Plan"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let text = UpdateResult::with_changes(
            record(None),
            vec!["Status changed to exported".to_string()],
        )
        .to_string();
        assert!(text.contains("Changes made:\n- Status changed to exported"));
        assert!(!UpdateResult::new(record(None)).to_string().contains("Changes"));
    }
}
