//! MCP tool handlers implementation

use std::{borrow::Cow, ops::Deref};

use agenda_core::{
    display::{CreateResult, OperationStatus, UpdateResult},
    params as core, Agenda, AgendaError,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Tool argument wrapper around a core parameter type.
///
/// Core params only derive `JsonSchema` behind the `schema` feature and know
/// nothing about MCP; this transparent newtype supplies what the tool router
/// needs and derefs to the inner value.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ToolParams<T: JsonSchema>(T);

impl<T: JsonSchema> JsonSchema for ToolParams<T> {
    fn schema_name() -> Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        T::json_schema(generator)
    }
}

impl<T: JsonSchema> Deref for ToolParams<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

pub type PlanId = ToolParams<core::PlanId>;
pub type ImportPlan = ToolParams<core::ImportPlan>;
pub type ListPlans = ToolParams<core::ListPlans>;
pub type SetStatus = ToolParams<core::SetStatus>;
pub type ExportPlan = ToolParams<core::ExportPlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: &impl std::fmt::Display) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    agenda: Agenda,
}

impl McpHandlers {
    pub fn new(agenda: Agenda) -> Self {
        Self { agenda }
    }

    pub async fn import_plan(&self, Parameters(params): Parameters<ImportPlan>) -> McpResult {
        debug!("import_plan: {:?}", params);

        let plan = self
            .agenda
            .import_plan(&*params)
            .await
            .map_err(|e| to_mcp_error("Failed to import plan", &e))?;

        text(&CreateResult::new(plan))
    }

    pub async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {:?}", params);

        let filter = &*params;
        let summaries = self
            .agenda
            .list_plans_summary(filter)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let title = match (&filter.status, &filter.event_type) {
            (Some(status), Some(event_type)) => {
                format!("Plans with status {status} for {event_type} events")
            }
            (Some(status), None) => format!("Plans with status {status}"),
            (None, Some(event_type)) => format!("Plans for {event_type} events"),
            (None, None) => "Plans".to_string(),
        };
        text(&format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<PlanId>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan_id = &params.plan_id;
        let plan = self
            .agenda
            .get_plan(&*params)
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?
            .ok_or_else(|| {
                to_mcp_error(
                    "Failed to get plan",
                    &AgendaError::PlanNotFound {
                        id: plan_id.clone(),
                    },
                )
            })?;

        text(&plan)
    }

    pub async fn set_plan_status(&self, Parameters(params): Parameters<SetStatus>) -> McpResult {
        debug!("set_plan_status: {:?}", params);

        let plan = self
            .agenda
            .set_status(&*params)
            .await
            .map_err(|e| to_mcp_error("Failed to update plan status", &e))?;

        let change = format!("Status set to {}", plan.status);
        text(&UpdateResult::with_changes(plan, vec![change]))
    }

    pub async fn export_plan(&self, Parameters(params): Parameters<ExportPlan>) -> McpResult {
        debug!("export_plan: {:?}", params);

        let file = self
            .agenda
            .export_plan(&*params)
            .await
            .map_err(|e| to_mcp_error("Failed to export plan", &e))?;

        let hint = OperationStatus::note(format!(
            "Retrieve it with `agenda download {}`",
            file.file_name
        ));
        text(&format!("{}\n{hint}", CreateResult::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use agenda_core::AgendaBuilder;
    use rmcp::model::ErrorCode;
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    async fn handlers() -> (TempDir, McpHandlers) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let agenda = AgendaBuilder::new()
            .in_memory()
            .with_export_dir(Some(dir.path()))
            .build()
            .await
            .expect("Failed to create agenda");
        (dir, McpHandlers::new(agenda))
    }

    fn params<T: JsonSchema + DeserializeOwned>(value: serde_json::Value) -> Parameters<ToolParams<T>> {
        Parameters(serde_json::from_value(value).expect("valid params"))
    }

    fn body(result: CallToolResult) -> String {
        let value = serde_json::to_value(&result).expect("serializable result");
        value["content"][0]["text"]
            .as_str()
            .expect("text content")
            .to_string()
    }

    #[tokio::test]
    async fn test_import_then_export() {
        let (dir, handlers) = handlers().await;

        let imported = body(
            handlers
                .import_plan(params(json!({
                    "user_request": "Wedding for 200 guests",
                    "event_type": "wedding",
                    "content": {"title": "Beach Wedding"}
                })))
                .await
                .unwrap(),
        );
        let plan_id = imported
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("Imported plan with ID: "))
            .expect("import reports the ID")
            .to_string();
        assert!(imported.contains("# Beach Wedding"));

        let exported = body(
            handlers
                .export_plan(params(json!({"plan_id": plan_id, "format": "xlsx"})))
                .await
                .unwrap(),
        );
        assert!(exported.contains("event_plan_"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        let listed = body(
            handlers
                .list_plans(params(json!({"event_type": "WEDDING"})))
                .await
                .unwrap(),
        );
        assert!(listed.starts_with("# Plans for WEDDING events"));
        assert!(listed.contains("Beach Wedding"));
    }

    #[tokio::test]
    async fn test_unknown_plan_is_invalid_params() {
        let (_dir, handlers) = handlers().await;

        let err = handlers
            .show_plan(params(json!({"plan_id": "nope"})))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = handlers
            .export_plan(params(json!({"plan_id": "nope", "format": "docx"})))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("docx"));
    }
}
