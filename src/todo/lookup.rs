//! Id lookups over a session's lists and a list's items
//!
//! Ids arrive here already parsed; turning an external token into a number is
//! done by [`crate::validation::parse_list_id`] and
//! [`crate::validation::parse_item_id`]. A missing id yields `None` so callers
//! can answer every miss the same way.

use super::item::{Item, ItemId};
use super::list::{ListId, TodoList};

pub fn find_list_by_id(lists: &[TodoList], id: ListId) -> Option<&TodoList> {
    lists.iter().find(|list| list.id() == id)
}

pub fn find_list_by_id_mut(lists: &mut [TodoList], id: ListId) -> Option<&mut TodoList> {
    lists.iter_mut().find(|list| list.id() == id)
}

pub fn find_item_by_id(list: &TodoList, id: ItemId) -> Option<&Item> {
    list.items().iter().find(|item| item.id == id)
}

pub fn find_item_by_id_mut(list: &mut TodoList, id: ItemId) -> Option<&mut Item> {
    list.items_mut().iter_mut().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_list_by_id() {
        let lists = vec![
            TodoList::new(ListId(1), "Home"),
            TodoList::new(ListId(4), "Work"),
        ];
        assert_eq!(find_list_by_id(&lists, ListId(4)).unwrap().title(), "Work");
        assert!(find_list_by_id(&lists, ListId(2)).is_none());
        assert!(find_list_by_id(&[], ListId(1)).is_none());
    }

    #[test]
    fn test_find_item_after_add_round_trips() {
        let mut list = TodoList::new(ListId(1), "Home");
        let id = list.add_item("  Water plants ").unwrap().id;

        let item = find_item_by_id(&list, id).unwrap();
        assert_eq!(item.title, "Water plants");
        assert!(!item.done);
        assert!(find_item_by_id(&list, ItemId(id.0 + 1)).is_none());
    }

    #[test]
    fn test_find_item_by_id_mut_edits_in_place() {
        let mut list = TodoList::new(ListId(1), "Home");
        let id = list.add_item("Water plants").unwrap().id;

        find_item_by_id_mut(&mut list, id).unwrap().done = true;
        assert!(list.is_done());
    }
}
