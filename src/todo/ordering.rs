//! Display order for lists and items
//!
//! Entities that are not done come first, done ones after. Inside each group
//! titles sort ascending, ignoring case. The sort is stable, so equal titles
//! keep storage order. Stored order is never touched; callers get a fresh
//! vector of references on every read.

use super::item::Item;
use super::list::TodoList;

pub fn order_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    let mut ordered: Vec<&TodoList> = lists.iter().collect();
    ordered.sort_by_cached_key(|list| display_key(list.is_done(), list.title()));
    ordered
}

pub fn order_items(list: &TodoList) -> Vec<&Item> {
    let mut ordered: Vec<&Item> = list.items().iter().collect();
    ordered.sort_by_cached_key(|item| display_key(item.done, &item.title));
    ordered
}

fn display_key(done: bool, title: &str) -> (bool, String) {
    (done, title.to_lowercase())
}
