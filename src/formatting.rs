//! Formatting helper functions for the todo server
//!
//! This module turns lists and todos into the text returned by MCP tools.
//! Everything is rendered in display order; storage order is never shown.

use crate::todo::{Item, TodoList, TodoLists, ordering};

/// Format every list of the session
///
/// # Arguments
/// * `lists` - The session's lists
///
/// # Returns
/// One line per list, not-done lists first
pub fn format_lists(lists: &TodoLists) -> String {
    if lists.is_empty() {
        return "No todo lists yet. Create one with new_list().".to_string();
    }

    let mut result = format!("Found {} list(s):\n\n", lists.len());
    for list in lists.ordered_lists() {
        result.push_str(&format!(
            "- [{}] {} ({})\n",
            list.id(),
            list.title(),
            progress(list)
        ));
    }
    result
}

/// Format one list with its todos
///
/// The complete-all hint is shown whenever the list is not done, which
/// includes an empty list.
pub fn format_list(list: &TodoList) -> String {
    let mut result = format!("[{}] {} ({})\n\n", list.id(), list.title(), progress(list));

    if list.is_empty() {
        result.push_str("No todos yet.\n");
    } else {
        for item in ordering::order_items(list) {
            result.push_str(&format_item(item));
            result.push('\n');
        }
    }

    if !list.is_done() {
        result.push_str(&format!(
            "\nUse complete_all(list_id=\"{}\") to mark every todo done.\n",
            list.id()
        ));
    }
    result
}

/// Format a single todo as a checklist line
pub fn format_item(item: &Item) -> String {
    let mark = if item.done { "x" } else { " " };
    format!("- [{}] [{}] {}", mark, item.id, item.title)
}

/// Format violation messages as a bullet list
pub fn format_messages(messages: &[String]) -> String {
    messages
        .iter()
        .map(|message| format!("- {}", message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn progress(list: &TodoList) -> String {
    if list.is_done() {
        "done".to_string()
    } else {
        format!("{}/{} done", list.done_count(), list.len())
    }
}
