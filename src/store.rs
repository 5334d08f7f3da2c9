//! Global UI State Store
//!
//! Uses Leptos reactive_stores for the toast queue shared by all sections.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last issued toast id
    pub last_toast_id: u32,
}

impl UiState {
    pub fn push_toast(&mut self, title: String, description: Option<String>, variant: ToastVariant) -> u32 {
        self.last_toast_id = self.last_toast_id.wrapping_add(1);
        let id = self.last_toast_id;
        self.toasts.push(Toast { id, title, description, variant });
        id
    }

    pub fn dismiss_toast(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast and schedule its removal
pub fn store_push_toast(store: &UiStore, title: &str, description: Option<String>, variant: ToastVariant) {
    let id = store.write().push_toast(title.to_string(), description, variant);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &UiStore, id: u32) {
    store.write().dismiss_toast(id);
}

/// Red toast for a failed request
pub fn toast_error(store: &UiStore, title: &str, error: impl std::fmt::Display) {
    store_push_toast(store, title, Some(error.to_string()), ToastVariant::Destructive);
}

/// Neutral informational toast
pub fn toast_info(store: &UiStore, title: &str, description: Option<&str>) {
    store_push_toast(store, title, description.map(str::to_string), ToastVariant::Default);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_increase() {
        let mut state = UiState::default();
        let a = state.push_toast("Failed".into(), None, ToastVariant::Destructive);
        let b = state.push_toast("No data".into(), Some("Try another".into()), ToastVariant::Default);
        assert!(b > a);
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[1].description.as_deref(), Some("Try another"));
    }

    #[test]
    fn test_dismiss_only_matching() {
        let mut state = UiState::default();
        let a = state.push_toast("one".into(), None, ToastVariant::Default);
        let b = state.push_toast("two".into(), None, ToastVariant::Default);
        state.dismiss_toast(a);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, b);
        state.dismiss_toast(999);
        assert_eq!(state.toasts.len(), 1);
    }
}
