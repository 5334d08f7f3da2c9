//! Sidebar Component
//!
//! Menu as a desktop column and as a mobile overlay.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;

/// Menu icons in the same order as the translated labels
const MENU_ICONS: [&str; 9] = ["🏠", "👤", "💬", "🌧️", "🚜", "📄", "💡", "🌱", "🔔"];

/// Index of the highlighted entry (Home)
const ACTIVE_INDEX: usize = 0;

#[component]
fn SidebarMenu() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar-menu">
            {move || {
                let labels = t(ctx.language.get()).sidebar.items;
                labels.iter().zip(MENU_ICONS.iter()).enumerate().map(|(i, (label, icon))| {
                    view! {
                        <button class=if i == ACTIVE_INDEX { "sidebar-item active" } else { "sidebar-item" }>
                            <span class="sidebar-icon">{*icon}</span>
                            <span>{*label}</span>
                        </button>
                    }
                }).collect_view()
            }}
        </nav>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let text = move || &t(ctx.language.get()).sidebar;

    view! {
        // Desktop
        <aside class="sidebar desktop">
            <SidebarMenu />
        </aside>

        // Mobile overlay
        <Show when=move || ctx.sidebar_open.get()>
            <div class="sidebar-backdrop" on:click=move |_| ctx.set_sidebar_open(false)></div>
            <aside class="sidebar mobile">
                <div class="sidebar-mobile-header">
                    <h2>{move || text().menu}</h2>
                    <button
                        class="icon-btn"
                        title=move || text().close
                        on:click=move |_| ctx.set_sidebar_open(false)
                    >
                        "✕"
                    </button>
                </div>
                <SidebarMenu />
            </aside>
        </Show>
    }
}
