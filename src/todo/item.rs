use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a todo item, unique within its owning list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A single todo entry
///
/// Items are created by [`TodoList::add_item`](super::TodoList::add_item),
/// which assigns the id and stores the title already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier assigned by the owning list
    pub id: ItemId,
    /// Trimmed title, 1 to 100 characters
    pub title: String,
    /// Whether the todo has been completed
    #[serde(default)]
    pub done: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            done: false,
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Flip the done flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    pub(crate) fn rename(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }
}
