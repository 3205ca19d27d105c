//! Session Todos MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for
//! session-scoped todo lists: named lists holding todos that can be marked
//! done or undone, renamed, and deleted.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` and `validation` modules - Lists, todos, ordering and title rules
//! - **Session Layer**: `session` module - Loads and replaces a session's lists
//!
//! # Example
//!
//! ```no_run
//! use session_todos::{Config, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::from_config(&Config::default());
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod session;
pub mod todo;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use config::Config;
pub use error::TodoError;
pub use session::{MemorySessionStore, SessionId, SessionStore};
pub use todo::{Item, ItemId, ListId, TodoList, TodoLists};

/// MCP Server handler for session todo lists
///
/// Every tool call loads the session's lists from the store, applies one
/// operation, and writes the whole collection back when it changed. Calls are
/// serialized so two tool calls never interleave on the session.
pub struct TodoServerHandler {
    pub(crate) store: Box<dyn SessionStore>,
    pub(crate) session: SessionId,
    pub(crate) in_flight: Mutex<()>,
}

impl TodoServerHandler {
    /// Create a new handler working on `session` in `store`
    ///
    /// # Example
    /// ```
    /// # use session_todos::{MemorySessionStore, SessionId, TodoServerHandler};
    /// let handler = TodoServerHandler::new(MemorySessionStore::default(), SessionId::from("demo"));
    /// ```
    pub fn new(store: impl SessionStore + 'static, session: SessionId) -> Self {
        Self {
            store: Box::new(store),
            session,
            in_flight: Mutex::new(()),
        }
    }

    /// Create a handler with an in-memory store configured from `config`
    pub fn from_config(config: &Config) -> Self {
        let store = MemorySessionStore::new(config.session.max_age());
        Self::new(store, SessionId::new(config.session.name.clone()))
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }
}

/// Session todo list server.
///
/// Keeps named todo lists for the current session. Lists and todos are
/// addressed by the numeric ids shown in brackets by `lists` and `show_list`,
/// e.g. `[3] Groceries`.
///
/// Display order: lists and todos that are not done come first, then done
/// ones; each group is sorted by title ignoring case.
///
/// Titles are trimmed and must be 1-100 characters. List titles must be
/// unique (case-sensitive) within the session.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Overview**: Show all todo lists with their progress, not-done lists first.
    #[tool]
    async fn lists(&self) -> McpResult<String> {
        self.handle_lists().await
    }

    /// **View**: Show one list with its todos, not-done todos first.
    #[tool]
    async fn show_list(
        &self,
        /// List id, e.g. "3"
        list_id: String,
    ) -> McpResult<String> {
        self.handle_show_list(list_id).await
    }

    /// **Create**: Create a new todo list. Title must be unique within the session.
    #[tool]
    async fn new_list(
        &self,
        /// List title, 1-100 characters
        title: String,
    ) -> McpResult<String> {
        self.handle_new_list(title).await
    }

    /// **Rename**: Change the title of a list.
    #[tool]
    async fn edit_list(
        &self,
        /// List id, e.g. "3"
        list_id: String,
        /// New list title, 1-100 characters
        title: String,
    ) -> McpResult<String> {
        self.handle_edit_list(list_id, title).await
    }

    /// **Delete**: Delete a list together with all of its todos.
    #[tool]
    async fn destroy_list(
        &self,
        /// List id, e.g. "3"
        list_id: String,
    ) -> McpResult<String> {
        self.handle_destroy_list(list_id).await
    }

    /// **Complete**: Mark every todo of a list done.
    #[tool]
    async fn complete_all(
        &self,
        /// List id, e.g. "3"
        list_id: String,
    ) -> McpResult<String> {
        self.handle_complete_all(list_id).await
    }

    /// **Add**: Add a todo to a list.
    #[tool]
    async fn add_todo(
        &self,
        /// List id, e.g. "3"
        list_id: String,
        /// Todo title, 1-100 characters
        title: String,
    ) -> McpResult<String> {
        self.handle_add_todo(list_id, title).await
    }

    /// **Rename**: Change the title of a todo.
    #[tool]
    async fn rename_todo(
        &self,
        /// List id, e.g. "3"
        list_id: String,
        /// Todo id, e.g. "12"
        todo_id: String,
        /// New todo title, 1-100 characters
        title: String,
    ) -> McpResult<String> {
        self.handle_rename_todo(list_id, todo_id, title).await
    }

    /// **Toggle**: Mark a todo done, or not done if it already is.
    #[tool]
    async fn toggle_todo(
        &self,
        /// List id, e.g. "3"
        list_id: String,
        /// Todo id, e.g. "12"
        todo_id: String,
    ) -> McpResult<String> {
        self.handle_toggle_todo(list_id, todo_id).await
    }

    /// **Delete**: Remove a todo from its list.
    #[tool]
    async fn destroy_todo(
        &self,
        /// List id, e.g. "3"
        list_id: String,
        /// Todo id, e.g. "12"
        todo_id: String,
    ) -> McpResult<String> {
        self.handle_destroy_todo(list_id, todo_id).await
    }
}
