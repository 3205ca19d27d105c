//! Validation helper functions for the todo server
//!
//! This module contains the title rules applied before a list or todo is
//! created or renamed, the list title uniqueness rule, and parsing of the
//! external id tokens handed in by MCP clients.

use crate::todo::{ItemId, ListId, TodoList};
use std::fmt;

/// Upper bound on a trimmed list or todo title, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Ordered violation messages produced by a failed validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// `Ok(value)` when no violation was recorded
    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<Vec<String>> for ValidationErrors {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\n"))
    }
}

/// Which kind of title is being checked; only the wording differs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleKind {
    List,
    Todo,
}

impl TitleKind {
    fn noun(self) -> &'static str {
        match self {
            TitleKind::List => "list",
            TitleKind::Todo => "todo",
        }
    }
}

fn check_title_length(kind: TitleKind, trimmed: &str, errors: &mut ValidationErrors) {
    let len = trimmed.chars().count();
    if len < 1 {
        errors.push(format!(
            "The {} title must be at least one character long.",
            kind.noun()
        ));
    } else if len > MAX_TITLE_LEN {
        errors.push(format!(
            "The {} title must be no longer than {} characters.",
            kind.noun(),
            MAX_TITLE_LEN
        ));
    }
}

/// Validate a raw todo title
///
/// # Returns
/// The trimmed title, or the violation messages
pub fn validate_todo_title(raw: &str) -> Result<String, ValidationErrors> {
    let trimmed = raw.trim();
    let mut errors = ValidationErrors::new();
    check_title_length(TitleKind::Todo, trimmed, &mut errors);
    errors.into_result(trimmed.to_string())
}

/// Validate a raw list title against the title rule and uniqueness among `lists`
///
/// # Arguments
/// * `raw` - Untrimmed title as typed by the user
/// * `lists` - The session's current lists
/// * `renaming` - Id of the list being renamed, whose own title is not a conflict
///
/// # Returns
/// The trimmed title, or the violation messages in rule order
pub fn validate_list_title(
    raw: &str,
    lists: &[TodoList],
    renaming: Option<ListId>,
) -> Result<String, ValidationErrors> {
    let trimmed = raw.trim();
    let mut errors = ValidationErrors::new();
    check_title_length(TitleKind::List, trimmed, &mut errors);

    let duplicate = lists
        .iter()
        .filter(|list| Some(list.id()) != renaming)
        .any(|list| list.title() == trimmed);
    if duplicate {
        errors.push("The list title must be unique.");
    }

    errors.into_result(trimmed.to_string())
}

/// Parse a list id token (e.g. "3") into a [`ListId`]
///
/// # Returns
/// The id, or a message suitable for the client
pub fn parse_list_id(token: &str) -> Result<ListId, String> {
    token
        .trim()
        .parse::<ListId>()
        .map_err(|_| format!("Invalid list id '{}'. List ids are positive whole numbers.", token))
}

/// Parse a todo id token (e.g. "12") into an [`ItemId`]
pub fn parse_item_id(token: &str) -> Result<ItemId, String> {
    token
        .trim()
        .parse::<ItemId>()
        .map_err(|_| format!("Invalid todo id '{}'. Todo ids are positive whole numbers.", token))
}
