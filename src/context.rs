//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Language;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Display language - read
    pub language: ReadSignal<Language>,
    /// Display language - write
    set_language: WriteSignal<Language>,
    /// Mobile sidebar overlay visibility - read
    pub sidebar_open: ReadSignal<bool>,
    /// Mobile sidebar overlay visibility - write
    set_sidebar_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        language: (ReadSignal<Language>, WriteSignal<Language>),
        sidebar_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            language: language.0,
            set_language: language.1,
            sidebar_open: sidebar_open.0,
            set_sidebar_open: sidebar_open.1,
        }
    }

    pub fn set_language(&self, language: Language) {
        log::info!("[APP] Language -> {}", language.code());
        self.set_language.set(language);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.set_sidebar_open.set(open);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
