//! MCP tool handlers for the todo server
//!
//! This module contains the implementation of all MCP tool handlers, grouped
//! by what they act on, plus the session plumbing they share.

pub mod list;
pub mod todos;
pub mod view;

use crate::TodoServerHandler;
use crate::error::TodoError;
use crate::formatting;
use crate::todo::{ItemId, ListId, TodoLists};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::warn;

impl TodoServerHandler {
    /// Run a read-only operation against the session's current lists.
    pub(crate) fn read_session<T>(
        &self,
        op: impl FnOnce(&TodoLists) -> Result<T, TodoError>,
    ) -> McpResult<T> {
        let Ok(_guard) = self.in_flight.lock() else {
            bail_public!(_, "Session is unavailable: a previous request failed mid-update");
        };
        let lists = match self.store.load(&self.session) {
            Ok(lists) => lists,
            Err(e) => {
                bail_public!(_, "Failed to load session: {}", e);
            }
        };
        op(&lists).map_err(to_mcp_error)
    }

    /// Load the session's lists, apply `op`, and save them back.
    ///
    /// Nothing is saved when `op` fails, so a rejected request never changes
    /// the session.
    pub(crate) fn update_session<T>(
        &self,
        op: impl FnOnce(&mut TodoLists) -> Result<T, TodoError>,
    ) -> McpResult<T> {
        let Ok(_guard) = self.in_flight.lock() else {
            bail_public!(_, "Session is unavailable: a previous request failed mid-update");
        };
        let mut lists = match self.store.load(&self.session) {
            Ok(lists) => lists,
            Err(e) => {
                bail_public!(_, "Failed to load session: {}", e);
            }
        };

        let outcome = op(&mut lists).map_err(to_mcp_error)?;

        if let Err(e) = self.store.save(&self.session, &lists) {
            bail_public!(_, "Failed to save: {}", e);
        }
        Ok(outcome)
    }
}

/// Parse the list id token sent by the client
pub(crate) fn parse_list_id(token: &str) -> McpResult<ListId> {
    validation::parse_list_id(token).map_err(invalid_params)
}

/// Parse the todo id token sent by the client
pub(crate) fn parse_item_id(token: &str) -> McpResult<ItemId> {
    validation::parse_item_id(token).map_err(invalid_params)
}

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

fn to_mcp_error(err: TodoError) -> mcp_attr::Error {
    let message = match &err {
        TodoError::ValidationFailed(errors) => {
            warn!(violations = errors.messages().len(), "validation failed");
            format!(
                "Validation failed:\n{}",
                formatting::format_messages(errors.messages())
            )
        }
        TodoError::ListNotFound(_) => {
            format!("{}. Use lists() to see available lists.", err)
        }
        TodoError::ItemNotFound { list, .. } => {
            format!(
                "{}. Use show_list(list_id=\"{}\") to see its todos.",
                err, list
            )
        }
        TodoError::IdsExhausted(_) => {
            warn!("{}", err);
            format!("{}.", err)
        }
    };
    invalid_params(message)
}
