//! Serialization and deserialization implementations for TodoLists
//!
//! Sessions are kept as serialized payloads and re-hydrated on every
//! request. Deserialization rejects payloads whose ids collide or whose
//! titles break the title rule, and moves the id counters past the highest
//! stored id so new ids never repeat.

use super::list::TodoList;
use super::todo_lists::TodoLists;
use crate::validation::MAX_TITLE_LEN;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

#[derive(Serialize)]
struct TodoListsRef<'a> {
    next_list_id: u32,
    lists: &'a [TodoList],
}

#[derive(Deserialize)]
struct TodoListsHelper {
    #[serde(default)]
    next_list_id: u32,
    #[serde(default)]
    lists: Vec<TodoList>,
}

impl Serialize for TodoLists {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TodoListsRef {
            next_list_id: self.next_list_id,
            lists: &self.lists,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TodoLists {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = TodoListsHelper::deserialize(deserializer)?;
        let mut lists = helper.lists;

        let mut list_ids = HashSet::new();
        for list in &lists {
            check_stored_title(list.title()).map_err(D::Error::custom)?;
            if !list_ids.insert(list.id()) {
                return Err(D::Error::custom(format!(
                    "duplicate todo list id {}",
                    list.id()
                )));
            }
            let mut item_ids = HashSet::new();
            for item in list.items() {
                check_stored_title(&item.title).map_err(D::Error::custom)?;
                if !item_ids.insert(item.id) {
                    return Err(D::Error::custom(format!(
                        "duplicate todo id {} in list {}",
                        item.id,
                        list.id()
                    )));
                }
            }
        }

        // Counters must stay ahead of every stored id
        for list in &mut lists {
            let highest = list.items().iter().map(|item| item.id.0).max().unwrap_or(0);
            let after = highest
                .checked_add(1)
                .ok_or_else(|| D::Error::custom("todo id out of range"))?;
            list.next_item_id = list.next_item_id.max(after);
        }
        let highest = lists.iter().map(|list| list.id().0).max().unwrap_or(0);
        let after = highest
            .checked_add(1)
            .ok_or_else(|| D::Error::custom("todo list id out of range"))?;
        let next_list_id = helper.next_list_id.max(after);

        Ok(TodoLists {
            lists,
            next_list_id,
        })
    }
}

fn check_stored_title(title: &str) -> Result<(), String> {
    let len = title.chars().count();
    if title.trim() != title || len == 0 || len > MAX_TITLE_LEN {
        return Err(format!("invalid stored title {:?}", title));
    }
    Ok(())
}
