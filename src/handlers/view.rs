//! Read-only handlers: the lists overview and a single list

use super::parse_list_id;
use crate::TodoServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Shows every list of the session in display order.
    pub async fn handle_lists(&self) -> McpResult<String> {
        self.read_session(|lists| Ok(formatting::format_lists(lists)))
    }

    /// Shows one list and its todos in display order.
    pub async fn handle_show_list(&self, list_id: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        self.read_session(|lists| Ok(formatting::format_list(lists.list(list_id)?)))
    }
}
