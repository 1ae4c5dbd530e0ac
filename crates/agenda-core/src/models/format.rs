//! Export target formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

/// The two document families a plan can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Multi-sheet spreadsheet (`.xlsx`)
    Tabular,

    /// Linear printable document (`.pdf`)
    Paginated,
}

impl ExportFormat {
    /// File extension written for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Tabular => "xlsx",
            ExportFormat::Paginated => "pdf",
        }
    }

    /// Leading part of every exported file name.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ExportFormat::Tabular => "event_plan",
            ExportFormat::Paginated => "action_plan",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Tabular => "tabular",
            ExportFormat::Paginated => "paginated",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AgendaError;

    /// Parses a format name case-insensitively.
    ///
    /// ```rust
    /// use agenda_core::models::ExportFormat;
    ///
    /// assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Paginated);
    /// assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Tabular);
    /// assert!("csv".parse::<ExportFormat>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tabular" | "excel" | "xlsx" | "spreadsheet" => Ok(ExportFormat::Tabular),
            "paginated" | "pdf" | "report" => Ok(ExportFormat::Paginated),
            _ => Err(AgendaError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
