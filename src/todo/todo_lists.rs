use super::item::{Item, ItemId};
use super::list::{ListId, TodoList};
use super::lookup;
use crate::error::TodoError;
use crate::validation;

/// All todo lists belonging to one session
///
/// The caller owns this value: it is loaded from a
/// [`SessionStore`](crate::session::SessionStore), mutated through the
/// methods below, then written back in full.
///
/// Every mutation taking a raw title validates it first. A failed call
/// (validation or lookup) returns an error and leaves the collection
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoLists {
    /// Lists in creation order
    pub(crate) lists: Vec<TodoList>,

    /// Next id handed out by `create_list`
    ///
    /// Stored next to the lists instead of being derived from their count or
    /// positions, so ids stay stable when lists are deleted.
    pub(crate) next_list_id: u32,
}

impl Default for TodoLists {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            next_list_id: 1,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TodoLists {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists in creation (storage) order
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Find a list by its id
    ///
    /// # Returns
    /// The list, or `TodoError::ListNotFound`
    pub fn list(&self, list_id: ListId) -> Result<&TodoList, TodoError> {
        lookup::find_list_by_id(&self.lists, list_id).ok_or(TodoError::ListNotFound(list_id))
    }

    fn list_mut(&mut self, list_id: ListId) -> Result<&mut TodoList, TodoError> {
        lookup::find_list_by_id_mut(&mut self.lists, list_id)
            .ok_or(TodoError::ListNotFound(list_id))
    }

    /// Find an item by list id and item id
    pub fn item(&self, list_id: ListId, item_id: ItemId) -> Result<&Item, TodoError> {
        let list = self.list(list_id)?;
        lookup::find_item_by_id(list, item_id).ok_or(TodoError::ItemNotFound {
            list: list_id,
            item: item_id,
        })
    }

    /// Create a new list from a raw, untrimmed title
    ///
    /// # Returns
    /// The new list, or `ValidationFailed` when the title is empty, too long,
    /// or already used by another list
    pub fn create_list(&mut self, raw_title: &str) -> Result<&TodoList, TodoError> {
        let title = validation::validate_list_title(raw_title, &self.lists, None)?;
        let id = ListId(self.next_list_id);
        self.next_list_id = self
            .next_list_id
            .checked_add(1)
            .ok_or(TodoError::IdsExhausted("list"))?;
        self.lists.push(TodoList::new(id, &title));
        let last = self.lists.len() - 1;
        Ok(&self.lists[last])
    }

    /// Rename a list. Renaming a list to its current title is allowed.
    pub fn rename_list(&mut self, list_id: ListId, raw_title: &str) -> Result<&TodoList, TodoError> {
        self.list(list_id)?;
        let title = validation::validate_list_title(raw_title, &self.lists, Some(list_id))?;
        let list = self.list_mut(list_id)?;
        list.rename(&title);
        Ok(&*list)
    }

    /// Delete a list together with all of its items
    ///
    /// # Returns
    /// The removed list
    pub fn delete_list(&mut self, list_id: ListId) -> Result<TodoList, TodoError> {
        let pos = self
            .lists
            .iter()
            .position(|list| list.id() == list_id)
            .ok_or(TodoError::ListNotFound(list_id))?;
        Ok(self.lists.remove(pos))
    }

    /// Add a todo to a list from a raw, untrimmed title
    ///
    /// The list is resolved before the title is validated, so an unknown list
    /// is reported as not found even when the title is also invalid.
    pub fn add_item(&mut self, list_id: ListId, raw_title: &str) -> Result<&Item, TodoError> {
        let list = self.list_mut(list_id)?;
        let title = validation::validate_todo_title(raw_title)?;
        list.add_item(&title)
    }

    pub fn rename_item(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        raw_title: &str,
    ) -> Result<&Item, TodoError> {
        self.item(list_id, item_id)?;
        let title = validation::validate_todo_title(raw_title)?;
        self.list_mut(list_id)?.rename_item(item_id, &title)
    }

    pub fn remove_item(&mut self, list_id: ListId, item_id: ItemId) -> Result<Item, TodoError> {
        self.list_mut(list_id)?.remove_item(item_id)
    }

    pub fn mark_item_done(&mut self, list_id: ListId, item_id: ItemId) -> Result<&Item, TodoError> {
        self.list_mut(list_id)?.mark_item_done(item_id)
    }

    pub fn mark_item_undone(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
    ) -> Result<&Item, TodoError> {
        self.list_mut(list_id)?.mark_item_undone(item_id)
    }

    /// Flip an item between done and not done
    pub fn toggle_item(&mut self, list_id: ListId, item_id: ItemId) -> Result<&Item, TodoError> {
        self.list_mut(list_id)?.toggle_item(item_id)
    }

    /// Mark every item of a list done
    pub fn mark_all_done(&mut self, list_id: ListId) -> Result<&TodoList, TodoError> {
        let list = self.list_mut(list_id)?;
        list.mark_all_done();
        Ok(&*list)
    }
}
