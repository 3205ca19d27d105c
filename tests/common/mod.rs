//! Common test utilities for integration tests

use session_todos::{MemorySessionStore, SessionId, TodoServerHandler};

/// Create a test server with a fresh in-memory session
pub fn create_test_server() -> TodoServerHandler {
    TodoServerHandler::new(MemorySessionStore::default(), SessionId::from("test-session"))
}

/// Extract the id from a creation response
/// Response format: "... ID: <id> (<title>) ..."
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    String::new()
}

/// Create a list and return its id
#[allow(dead_code)]
pub async fn create_list(server: &TodoServerHandler, title: &str) -> String {
    let response = server.handle_new_list(title.to_string()).await.unwrap();
    extract_id_from_response(&response)
}

/// Add a todo and return its id
#[allow(dead_code)]
pub async fn add_todo(server: &TodoServerHandler, list_id: &str, title: &str) -> String {
    let response = server
        .handle_add_todo(list_id.to_string(), title.to_string())
        .await
        .unwrap();
    extract_id_from_response(&response)
}
