//! MCP server implementation for Agenda
//!
//! Exposes plan import, listing, status changes and export to AI assistants
//! over the Model Context Protocol. Every tool returns the same Markdown the
//! terminal interface prints.

use std::future::Future;

use agenda_core::Agenda;
use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{ExportPlan, ImportPlan, ListPlans, McpResult, PlanId, SetStatus};

/// MCP server for Agenda
#[derive(Clone)]
pub struct AgendaMcpServer {
    agenda: Agenda,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AgendaMcpServer {
    pub fn new(agenda: Agenda) -> Self {
        Self {
            agenda,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.agenda.clone())
    }

    #[tool(
        name = "import_plan",
        description = "Store a generated event plan. Provide the user's original request (required), an optional event_type (defaults to 'general'), and the plan content as a JSON object with any of: title, overview, cards, timeline, budget_summary, team_roles. Optional event_details holds date, venue, attendees, duration and budget. Returns the new plan ID."
    )]
    async fn import_plan(&self, params: Parameters<ImportPlan>) -> McpResult {
        self.handlers().import_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List stored plans, newest first. Filter by status ('generated', 'exported' or a custom tag) and/or event_type (case-insensitive). Returns titles, IDs, statuses and section counts."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_plans(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a stored plan in full: event details, action items with tasks, timeline phases, team roles and budget. Missing sections are left out and missing fields show as TBD."
    )]
    async fn show_plan(&self, params: Parameters<PlanId>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "set_plan_status",
        description = "Change a plan's lifecycle status, e.g. to 'exported' once the document has been shared. Any non-empty tag is accepted."
    )]
    async fn set_plan_status(&self, params: Parameters<SetStatus>) -> McpResult {
        self.handlers().set_plan_status(params).await
    }

    #[tool(
        name = "export_plan",
        description = "Export a plan as a document. format is 'tabular' (aliases: excel, xlsx, spreadsheet) for a five-sheet spreadsheet, or 'paginated' (aliases: pdf, report) for a printable PDF. Returns the file name, path and size. The plan itself is not modified."
    )]
    async fn export_plan(&self, params: Parameters<ExportPlan>) -> McpResult {
        self.handlers().export_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AgendaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "agenda".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Agenda stores AI-generated event plans and exports them as documents.

## Workflow
1. Store a freshly generated plan with `import_plan`, keeping the returned ID
2. Review it with `show_plan` or find earlier plans with `list_plans`
3. Produce a document with `export_plan` (tabular spreadsheet or paginated PDF)
4. Mark the plan as shared with `set_plan_status` (status 'exported')

Plan content is loosely structured. Unknown or missing fields never cause errors; they show up as TBD in the documents."#.to_string()),
        }
    }
}

/// Serves MCP over stdio until the client disconnects or the process is
/// interrupted.
pub async fn run_stdio_server(server: AgendaMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    debug!(
        "Serving {} tools on stdio",
        server.tool_router.list_all().len()
    );

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| error!("Failed to start MCP session: {e:?}"))?;

    tokio::select! {
        result = service.waiting() => match result {
            Ok(_) => info!("MCP session ended"),
            Err(e) => error!("MCP session failed: {e:?}"),
        },
        received = shutdown_signal() => info!("Received {}, shutting down", received?),
    }
    Ok(())
}

/// Resolves with the name of the first termination signal received.
async fn shutdown_signal() -> Result<&'static str> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}
