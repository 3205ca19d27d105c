//! Todo list domain model
//!
//! This module contains the core data structures and their rules.
//! It is split into submodules:
//! - `item`: a single todo entry
//! - `list`: a titled list owning its items and their ids
//! - `todo_lists`: the session's collection of lists with validated mutations
//! - `lookup`: id lookups over lists and items
//! - `ordering`: display order for lists and items
//! - `queries`: display-order queries on the collection
//! - `serde_impl`: serialization of the collection with counter repair

mod item;
mod list;
pub mod lookup;
pub mod ordering;
mod queries;
mod serde_impl;
mod todo_lists;

pub use item::{Item, ItemId};
pub use list::{ListId, TodoList};
pub use todo_lists::TodoLists;
