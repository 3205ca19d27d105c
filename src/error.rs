//! Error types for todo list operations.

use crate::todo::{ItemId, ListId};
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Failures returned by todo list operations.
///
/// Both kinds are ordinary return values: a failed operation leaves the
/// session's lists exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No list with this id exists in the session.
    #[error("Todo list {0} not found")]
    ListNotFound(ListId),

    /// The list exists but holds no item with this id.
    #[error("Todo {item} not found in list {list}")]
    ItemNotFound { list: ListId, item: ItemId },

    /// One or more title rules were violated.
    #[error("{0}")]
    ValidationFailed(ValidationErrors),

    /// Every id of this kind has already been handed out.
    #[error("No {0} ids left in this session")]
    IdsExhausted(&'static str),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::ItemNotFound { .. })
    }

    /// Violation messages, empty unless this is a validation failure
    pub fn messages(&self) -> &[String] {
        match self {
            Self::ValidationFailed(errors) => errors.messages(),
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for TodoError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed(errors)
    }
}
