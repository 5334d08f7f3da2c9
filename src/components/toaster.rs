//! Toast Viewport
//!
//! Renders the toast queue from the UI store, newest at the bottom.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, ToastVariant, UiStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="toast-viewport" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-text">
                                <p class="toast-title">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="toast-description">{d}</p> })}
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
