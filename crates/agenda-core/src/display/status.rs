//! One-line outcome messages.

use std::fmt;

/// How an [`OperationStatus`] line is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// Follow-up information, such as how to fetch an exported file
    Note,
    Error,
}

impl StatusKind {
    fn label(self) -> &'static str {
        match self {
            StatusKind::Success => "Success",
            StatusKind::Note => "Note",
            StatusKind::Error => "Error",
        }
    }
}

/// Outcome of an operation that has nothing else to show, printed as
/// `<Label>: <message>` on its own line.
pub struct OperationStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            kind: StatusKind::Success,
            message,
        }
    }

    pub fn note(message: String) -> Self {
        Self {
            kind: StatusKind::Note,
            message,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            kind: StatusKind::Error,
            message,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.kind.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        let saved = OperationStatus::success("Saved report.pdf".to_string());
        assert_eq!(saved.to_string(), "Success: Saved report.pdf\n");

        let hint = OperationStatus::note("Run download next".to_string());
        assert_eq!(hint.to_string(), "Note: Run download next\n");

        let failed = OperationStatus::failure("Nothing to export".to_string());
        assert!(failed.to_string().starts_with("Error: "));
    }
}
