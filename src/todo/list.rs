use crate::error::TodoError;
use super::item::{Item, ItemId};
use super::lookup;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a todo list, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u32);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ListId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A titled, ordered collection of todo items
///
/// `items` keeps insertion order (storage order). Display order is computed
/// on read by [`ordering::order_items`](super::ordering::order_items).
///
/// Titles passed to [`TodoList::add_item`], [`TodoList::rename`] and
/// [`TodoList::rename_item`] must already have passed validation; these
/// methods only trim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    title: String,
    /// Next id handed out by `add_item`, never reused after removals
    #[serde(default)]
    pub(crate) next_item_id: u32,
    #[serde(default)]
    items: Vec<Item>,
}

impl TodoList {
    pub(crate) fn new(id: ListId, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            next_item_id: 1,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in storage order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// A list is done when it has at least one item and every item is done.
    /// An empty list is never done.
    pub fn is_done(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.done)
    }

    /// Append a new item with a fresh id and return it
    ///
    /// Fails with `IdsExhausted` once every `u32` id has been handed out.
    pub fn add_item(&mut self, title: &str) -> Result<&Item, TodoError> {
        let id = ItemId(self.next_item_id);
        self.next_item_id = self
            .next_item_id
            .checked_add(1)
            .ok_or(TodoError::IdsExhausted("todo"))?;
        self.items.push(Item::new(id, title));
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Remove the item with `item_id` and return it. Items are left untouched
    /// when the id is unknown.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<Item, TodoError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(TodoError::ItemNotFound {
                list: self.id,
                item: item_id,
            })?;
        Ok(self.items.remove(pos))
    }

    pub fn mark_item_done(&mut self, item_id: ItemId) -> Result<&Item, TodoError> {
        let item = self.item_mut(item_id)?;
        item.mark_done();
        Ok(&*item)
    }

    pub fn mark_item_undone(&mut self, item_id: ItemId) -> Result<&Item, TodoError> {
        let item = self.item_mut(item_id)?;
        item.mark_undone();
        Ok(&*item)
    }

    pub fn toggle_item(&mut self, item_id: ItemId) -> Result<&Item, TodoError> {
        let item = self.item_mut(item_id)?;
        item.toggle();
        Ok(&*item)
    }

    pub fn rename_item(&mut self, item_id: ItemId, title: &str) -> Result<&Item, TodoError> {
        let item = self.item_mut(item_id)?;
        item.rename(title);
        Ok(&*item)
    }

    /// Mark every item done. Does nothing on an empty list.
    pub fn mark_all_done(&mut self) {
        self.items.iter_mut().for_each(Item::mark_done);
    }

    pub fn rename(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    fn item_mut(&mut self, item_id: ItemId) -> Result<&mut Item, TodoError> {
        let list = self.id;
        lookup::find_item_by_id_mut(self, item_id).ok_or(TodoError::ItemNotFound {
            list,
            item: item_id,
        })
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(titles: &[(&str, bool)]) -> TodoList {
        let mut list = TodoList::new(ListId(1), "Chores");
        for (title, done) in titles {
            let id = list.add_item(title).unwrap().id;
            if *done {
                list.mark_item_done(id).unwrap();
            }
        }
        list
    }

    #[test]
    fn test_empty_list_is_not_done() {
        let list = TodoList::new(ListId(1), "Empty");
        assert!(list.is_empty());
        assert!(!list.is_done());
    }

    #[test]
    fn test_is_done_requires_every_item_done() {
        let mut list = list_with(&[("Buy milk", true), ("Wash car", false)]);
        assert!(!list.is_done());

        list.mark_item_done(ItemId(2)).unwrap();
        assert!(list.is_done());

        list.mark_item_undone(ItemId(1)).unwrap();
        assert!(!list.is_done());
    }

    #[test]
    fn test_add_item_assigns_increasing_ids() {
        let mut list = TodoList::new(ListId(1), "Chores");
        let first = list.add_item("One").unwrap().id;
        let second = list.add_item("Two").unwrap().id;
        assert_eq!(first, ItemId(1));
        assert_eq!(second, ItemId(2));
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut list = list_with(&[("One", false), ("Two", false)]);
        list.remove_item(ItemId(2)).unwrap();
        let third = list.add_item("Three").unwrap().id;
        assert_eq!(third, ItemId(3));
    }

    #[test]
    fn test_add_item_stops_when_ids_run_out() {
        let mut list = list_with(&[("One", false)]);
        list.next_item_id = u32::MAX;

        let err = list.add_item("Two").unwrap_err();

        assert_eq!(err, TodoError::IdsExhausted("todo"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.next_item_id, u32::MAX);
    }

    #[test]
    fn test_remove_unknown_item_leaves_items_unchanged() {
        let mut list = list_with(&[("Buy milk", false), ("Wash car", true)]);
        let before = list.items().to_vec();

        let err = list.remove_item(ItemId(99)).unwrap_err();

        assert!(matches!(
            err,
            TodoError::ItemNotFound {
                list: ListId(1),
                item: ItemId(99)
            }
        ));
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_remove_item_returns_removed_item() {
        let mut list = list_with(&[("Buy milk", false), ("Wash car", true)]);
        let removed = list.remove_item(ItemId(1)).unwrap();
        assert_eq!(removed.title, "Buy milk");
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].title, "Wash car");
    }

    #[test]
    fn test_mark_done_and_undone_are_idempotent() {
        let mut list = list_with(&[("Buy milk", false)]);
        list.mark_item_done(ItemId(1)).unwrap();
        list.mark_item_done(ItemId(1)).unwrap();
        assert!(list.items()[0].done);

        list.mark_item_undone(ItemId(1)).unwrap();
        list.mark_item_undone(ItemId(1)).unwrap();
        assert!(!list.items()[0].done);
    }

    #[test]
    fn test_mark_unknown_item_is_not_found() {
        let mut list = list_with(&[("Buy milk", false)]);
        assert!(list.mark_item_done(ItemId(7)).unwrap_err().is_not_found());
        assert!(list.mark_item_undone(ItemId(7)).unwrap_err().is_not_found());
        assert!(list.toggle_item(ItemId(7)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_mark_all_done() {
        let mut list = list_with(&[("One", false), ("Two", true), ("Three", false)]);
        list.mark_all_done();
        assert!(list.is_done());
        assert_eq!(list.done_count(), 3);
    }

    #[test]
    fn test_mark_all_done_on_empty_list_is_noop() {
        let mut list = TodoList::new(ListId(1), "Empty");
        list.mark_all_done();
        assert!(list.is_empty());
        assert!(!list.is_done());
    }

    #[test]
    fn test_rename_trims_title() {
        let mut list = TodoList::new(ListId(1), "Chores");
        list.rename("  Weekend chores  ");
        assert_eq!(list.title(), "Weekend chores");

        list.add_item("Mow").unwrap();
        let item = list.rename_item(ItemId(1), " Mow the lawn ").unwrap();
        assert_eq!(item.title, "Mow the lawn");
    }
}
