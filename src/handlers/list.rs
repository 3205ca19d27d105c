//! List handlers: create, rename, delete, complete all

use super::parse_list_id;
use crate::TodoServerHandler;
use mcp_attr::Result as McpResult;
use tracing::info;

impl TodoServerHandler {
    /// Creates a list after checking the title rules and uniqueness.
    pub async fn handle_new_list(&self, title: String) -> McpResult<String> {
        let (id, title) = self.update_session(|lists| {
            let list = lists.create_list(&title)?;
            Ok((list.id(), list.title().to_string()))
        })?;
        info!(list = %id, "created list");

        Ok(format!(
            "The todo list has been created.\nList ID: {} ({})",
            id, title
        ))
    }

    /// Renames a list. Keeping its current title is accepted.
    pub async fn handle_edit_list(&self, list_id: String, title: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let title = self.update_session(|lists| {
            Ok(lists.rename_list(list_id, &title)?.title().to_string())
        })?;
        info!(list = %list_id, "renamed list");

        Ok(format!(
            "The title has been updated.\nList ID: {} ({})",
            list_id, title
        ))
    }

    /// Deletes a list and every todo in it.
    pub async fn handle_destroy_list(&self, list_id: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let removed = self.update_session(|lists| lists.delete_list(list_id))?;
        info!(list = %list_id, todos = removed.len(), "deleted list");

        Ok(format!(
            "Todo list deleted.\nRemoved \"{}\" and {} todo(s).",
            removed.title(),
            removed.len()
        ))
    }

    /// Marks every todo of a list done; an empty list is left as it is.
    pub async fn handle_complete_all(&self, list_id: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let (title, count) = self.update_session(|lists| {
            let list = lists.mark_all_done(list_id)?;
            Ok((list.title().to_string(), list.len()))
        })?;
        info!(list = %list_id, todos = count, "completed all todos");

        if count == 0 {
            return Ok(format!("\"{}\" has no todos to complete.", title));
        }
        Ok(format!(
            "All todos have been completed.\nList ID: {} ({})",
            list_id, title
        ))
    }
}
