//! Error handling utilities for MCP server

use agenda_core::AgendaError;
use rmcp::ErrorData;

/// Converts an agenda error to an MCP error.
///
/// Unknown plans or files and bad caller input are reported as invalid
/// parameters; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &AgendaError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_not_found() || error.is_bad_request() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
