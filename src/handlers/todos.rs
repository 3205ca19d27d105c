//! Todo handlers: add, rename, toggle, delete

use super::{parse_item_id, parse_list_id};
use crate::TodoServerHandler;
use mcp_attr::Result as McpResult;
use tracing::info;

impl TodoServerHandler {
    /// Adds a todo to a list after checking the title rules.
    pub async fn handle_add_todo(&self, list_id: String, title: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let (id, title) = self.update_session(|lists| {
            let item = lists.add_item(list_id, &title)?;
            Ok((item.id, item.title.clone()))
        })?;
        info!(list = %list_id, todo = %id, "added todo");

        Ok(format!(
            "The todo has been created.\nTodo ID: {} ({}) in list {}",
            id, title, list_id
        ))
    }

    pub async fn handle_rename_todo(
        &self,
        list_id: String,
        todo_id: String,
        title: String,
    ) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let todo_id = parse_item_id(&todo_id)?;
        let title = self.update_session(|lists| {
            Ok(lists.rename_item(list_id, todo_id, &title)?.title.clone())
        })?;
        info!(list = %list_id, todo = %todo_id, "renamed todo");

        Ok(format!("The todo has been renamed to \"{}\".", title))
    }

    /// Flips a todo between done and not done.
    pub async fn handle_toggle_todo(&self, list_id: String, todo_id: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let todo_id = parse_item_id(&todo_id)?;
        let (title, done) = self.update_session(|lists| {
            let item = lists.toggle_item(list_id, todo_id)?;
            Ok((item.title.clone(), item.done))
        })?;
        info!(list = %list_id, todo = %todo_id, done, "toggled todo");

        if done {
            Ok(format!("\"{}\" marked done.", title))
        } else {
            Ok(format!("\"{}\" marked as NOT done!", title))
        }
    }

    pub async fn handle_destroy_todo(&self, list_id: String, todo_id: String) -> McpResult<String> {
        let list_id = parse_list_id(&list_id)?;
        let todo_id = parse_item_id(&todo_id)?;
        let removed = self.update_session(|lists| lists.remove_item(list_id, todo_id))?;
        info!(list = %list_id, todo = %todo_id, "removed todo");

        Ok(format!("\"{}\" has been removed!", removed.title))
    }
}
