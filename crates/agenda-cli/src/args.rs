//! Command-line interface definitions using clap
//!
//! Argument structs carry the clap derives and convert into the
//! interface-agnostic parameter types of `agenda_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Agenda
//! ```
//!
//! `plan import` is the exception: its content has to be read from a file
//! or stdin first, so the conversion takes the parsed content as an extra
//! argument.

use std::path::PathBuf;

use agenda_core::params::{Download, ExportPlan, ImportPlan, ListPlans, PlanId, SetStatus};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::Value;

/// Store AI-generated event plans and export them as documents
///
/// Plans are imported from the JSON a language model produced, kept in a
/// local SQLite database, and exported either as a multi-sheet spreadsheet
/// (tabular) or as a printable PDF (paginated). The same operations are
/// available to AI assistants through an MCP server (`agenda serve`).
#[derive(Parser)]
#[command(version, about, name = "agenda")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agenda/agenda.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory exported documents are written to. Defaults to an
    /// `exports` directory next to the database file
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    /// Keep plans in memory only; nothing is written to the database
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, stored plans are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage stored plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Export a plan as a spreadsheet or PDF
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Copy an exported document out of the export directory
    Download(DownloadArgs),
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Import a generated plan
    #[command(alias = "i")]
    Import(ImportArgs),
    /// List stored plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Change a plan's status
    Status(SetStatusArgs),
}

/// Import a plan from a JSON file
///
/// The file may hold raw model output: Markdown code fences and prose
/// around the JSON object are ignored.
#[derive(ClapArgs)]
pub struct ImportArgs {
    /// File holding the plan content, or `-` to read stdin
    pub file: PathBuf,
    /// The natural-language request the plan was generated for
    #[arg(short, long)]
    pub request: String,
    /// Event classification, such as "wedding" or "conference"
    #[arg(short, long)]
    pub event_type: Option<String>,
    /// Requesting user
    #[arg(long)]
    pub user_id: Option<String>,
    /// Originating channel
    #[arg(long)]
    pub channel_id: Option<String>,
}

impl ImportArgs {
    /// Whether the content should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }

    pub fn into_params(self, content: Value) -> ImportPlan {
        ImportPlan {
            user_request: self.request,
            event_type: self.event_type,
            content: Some(content),
            event_details: None,
            user_id: self.user_id,
            channel_id: self.channel_id,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListPlansArgs {
    /// Only list plans with this status
    #[arg(short, long)]
    pub status: Option<String>,
    /// Only list plans of this event type (case-insensitive)
    #[arg(short, long)]
    pub event_type: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status,
            event_type: val.event_type,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub plan_id: String,
}

impl From<ShowPlanArgs> for PlanId {
    fn from(val: ShowPlanArgs) -> Self {
        PlanId {
            plan_id: val.plan_id,
        }
    }
}

#[derive(ClapArgs)]
pub struct SetStatusArgs {
    /// ID of the plan to update
    pub plan_id: String,
    /// New status, e.g. "generated" or "exported"
    pub status: String,
}

impl From<SetStatusArgs> for SetStatus {
    fn from(val: SetStatusArgs) -> Self {
        SetStatus {
            plan_id: val.plan_id,
            status: val.status,
        }
    }
}

/// Export a plan
///
/// FORMAT is `tabular` (also `excel`, `xlsx`, `spreadsheet`) or `paginated`
/// (also `pdf`, `report`).
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// ID of the plan to export
    pub plan_id: String,
    /// Document format
    pub format: String,
    /// Set the plan's status to "exported" afterwards
    #[arg(long)]
    pub mark_exported: bool,
}

impl ExportArgs {
    pub fn to_params(&self) -> ExportPlan {
        ExportPlan {
            plan_id: self.plan_id.clone(),
            format: self.format.clone(),
        }
    }
}

#[derive(ClapArgs)]
pub struct DownloadArgs {
    /// Name of the exported file, as printed by `export`
    pub file_name: String,
    /// Where to write the file. Without it the bytes go to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<&DownloadArgs> for Download {
    fn from(val: &DownloadArgs) -> Self {
        Download {
            file_name: val.file_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_export_parses_flags() {
        let args = Args::try_parse_from([
            "agenda",
            "--in-memory",
            "export",
            "abc",
            "pdf",
            "--mark-exported",
        ])
        .unwrap();
        assert!(args.in_memory);
        match args.command {
            Some(Commands::Export(export)) => {
                assert_eq!(export.to_params().format, "pdf");
                assert!(export.mark_exported);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_import_from_stdin() {
        let args = Args::try_parse_from(["agenda", "plan", "import", "-", "-r", "Gala"]).unwrap();
        let Some(Commands::Plan {
            command: PlanCommands::Import(import),
        }) = args.command
        else {
            panic!("expected plan import");
        };
        assert!(import.reads_stdin());
        let params = import.into_params(Value::Null);
        assert_eq!(params.user_request, "Gala");
    }
}
