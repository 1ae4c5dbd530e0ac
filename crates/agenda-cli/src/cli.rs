//! Command handlers for the terminal interface.

use std::{
    fs,
    io::{self, Read, Write},
};

use agenda_core::{
    display::{CreateResult, OperationStatus, UpdateResult},
    models::{parse_plan_content, PlanStatus},
    params::{Download, ListPlans, PlanId, SetStatus},
    Agenda,
};
use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::{
    args::{DownloadArgs, ExportArgs, ImportArgs, PlanCommands},
    renderer::TerminalRenderer,
};

/// Runs one command against an [`Agenda`] and renders the outcome.
pub struct Cli {
    agenda: Agenda,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(agenda: Agenda, renderer: TerminalRenderer) -> Self {
        Self { agenda, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Import(args) => self.import_plan(args).await,
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Status(args) => self.set_status(&args.into()).await,
        }
    }

    async fn import_plan(&self, args: ImportArgs) -> Result<()> {
        let raw = if args.reads_stdin() {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read plan content from stdin")?;
            raw
        } else {
            fs::read_to_string(&args.file)
                .with_context(|| format!("Failed to read {}", args.file.display()))?
        };
        let content = parse_plan_content(&raw).context("Failed to parse plan content")?;

        let plan = self
            .agenda
            .import_plan(&args.into_params(content))
            .await
            .context("Failed to import plan")?;

        self.renderer.render(&CreateResult::new(plan).to_string())
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self
            .agenda
            .list_plans_summary(params)
            .await
            .context("Failed to list plans")?;

        let title = match &params.status {
            Some(status) => format!("Plans with status {status}"),
            None => "Plans".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    async fn show_plan(&self, params: &PlanId) -> Result<()> {
        let plan = self
            .agenda
            .get_plan(params)
            .await
            .context("Failed to get plan")?
            .ok_or_else(|| anyhow!("Plan with ID {} not found", params.plan_id))?;

        self.renderer.render(&plan.to_string())
    }

    async fn set_status(&self, params: &SetStatus) -> Result<()> {
        let plan = self
            .agenda
            .set_status(params)
            .await
            .context("Failed to update plan status")?;

        let change = format!("Status set to {}", plan.status);
        self.renderer
            .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let file = self
            .agenda
            .export_plan(&args.to_params())
            .await
            .with_context(|| format!("Failed to export plan {}", args.plan_id))?;

        let hint = OperationStatus::note(format!(
            "Retrieve it with `agenda download {}`",
            file.file_name
        ));
        let mut output = format!("{}\n{hint}", CreateResult::new(file));
        if args.mark_exported {
            debug!("Marking plan {} as exported", args.plan_id);
            self.agenda
                .set_status(&SetStatus {
                    plan_id: args.plan_id.clone(),
                    status: PlanStatus::Exported.as_str().to_string(),
                })
                .await
                .context("Failed to mark plan as exported")?;
            let marked = OperationStatus::success("Plan marked as exported".to_string());
            output.push_str(&marked.to_string());
        }

        self.renderer.render(&output)
    }

    pub async fn download(&self, args: DownloadArgs) -> Result<()> {
        let bytes = self
            .agenda
            .download(&Download::from(&args))
            .await
            .with_context(|| format!("Failed to read export {}", args.file_name))?;

        match args.output {
            Some(path) => {
                fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status = OperationStatus::success(format!(
                    "Saved {} bytes to {}",
                    bytes.len(),
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(&bytes)
                    .and_then(|()| stdout.flush())
                    .context("Failed to write export to stdout")
            }
        }
    }
}
