//! Display-order queries for TodoLists
//!
//! Thin wrappers over the ordering policy so the presentation layer can ask
//! the collection directly.

use super::item::Item;
use super::list::{ListId, TodoList};
use super::ordering;
use super::todo_lists::TodoLists;
use crate::error::TodoError;

impl TodoLists {
    /// Lists in display order: not-done first, then by title ignoring case
    pub fn ordered_lists(&self) -> Vec<&TodoList> {
        ordering::order_lists(&self.lists)
    }

    /// Items of one list in display order
    pub fn ordered_items(&self, list_id: ListId) -> Result<Vec<&Item>, TodoError> {
        Ok(ordering::order_items(self.list(list_id)?))
    }
}
