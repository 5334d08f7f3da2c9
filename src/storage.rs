//! Chat Persistence
//!
//! Chat history and the backend conversation id live in browser local
//! storage as plain JSON. Storage failures are logged and otherwise ignored.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;

use crate::config::{CHAT_HISTORY_KEY, CONVERSATION_ID_KEY};
use crate::models::Message;

fn read<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get(key) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            log::warn!("[STORAGE] Failed to read '{}': {}", key, e);
            None
        }
    }
}

pub fn load_history() -> Vec<Message> {
    read(CHAT_HISTORY_KEY).unwrap_or_default()
}

pub fn save_history(messages: &[Message]) {
    if let Err(e) = LocalStorage::set(CHAT_HISTORY_KEY, messages) {
        log::warn!("[STORAGE] Failed to save chat history: {}", e);
    }
}

pub fn load_conversation_id() -> Option<String> {
    read::<String>(CONVERSATION_ID_KEY).filter(|id| !id.is_empty())
}

pub fn save_conversation_id(id: &str) {
    if let Err(e) = LocalStorage::set(CONVERSATION_ID_KEY, id) {
        log::warn!("[STORAGE] Failed to save conversation id: {}", e);
    }
}

pub fn clear_chat() {
    LocalStorage::delete(CHAT_HISTORY_KEY);
    LocalStorage::delete(CONVERSATION_ID_KEY);
}

/// Stored history, or just the greeting when nothing was saved
pub fn initial_history(stored: Vec<Message>, greeting: &str) -> Vec<Message> {
    if stored.is_empty() {
        vec![Message::assistant(greeting, None)]
    } else {
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_initial_history_seeds_greeting() {
        let history = initial_history(Vec::new(), "Namaste!");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, Role::Assistant);
        assert_eq!(history[0].content, "Namaste!");
    }

    #[test]
    fn test_initial_history_keeps_stored() {
        let stored = vec![
            Message::assistant("Hello!", None),
            Message::user("Best time to sow cumin?", None),
        ];
        assert_eq!(initial_history(stored.clone(), "Namaste!"), stored);
    }
}
