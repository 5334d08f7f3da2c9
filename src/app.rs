//! Kisan Dashboard App
//!
//! Landing page and the three-column dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    ChatSection, Header, Landing, MandiSection, SchemesSection, Sidebar, TipsSection, Toaster,
    WeatherSection,
};
use crate::context::AppContext;
use crate::models::Language;
use crate::store::UiState;

/// Top-level page selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Landing,
    Dashboard,
}

#[component]
fn Dashboard(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="dashboard">
            <Sidebar />
            <div class="dashboard-main">
                <Header on_logout=on_logout />
                <div class="dashboard-grid">
                    // Left: assistant
                    <div class="dashboard-column chat-column">
                        <ChatSection />
                    </div>
                    // Center: alerts and schemes
                    <div class="dashboard-column">
                        <WeatherSection />
                        <SchemesSection />
                    </div>
                    // Right: market and tips
                    <div class="dashboard-column">
                        <MandiSection />
                        <TipsSection />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Landing);

    provide_context(AppContext::new(signal(Language::default()), signal(false)));
    provide_context(Store::new(UiState::default()));

    // Backend reachability is only logged
    Effect::new(move |_| {
        spawn_local(async move {
            match api::health_check().await {
                Ok(status) => log::info!("[APP] Backend healthy: {}", status),
                Err(e) => log::warn!("[APP] Backend health check failed: {}", e),
            }
        });
    });

    let show_dashboard = Callback::new(move |_: ()| {
        log::info!("[APP] Entering dashboard");
        set_page.set(Page::Dashboard);
    });
    let logout = Callback::new(move |_: ()| {
        log::info!("[APP] Logged out");
        set_page.set(Page::Landing);
    });

    view! {
        {move || match page.get() {
            Page::Landing => view! { <Landing on_enter=show_dashboard /> }.into_any(),
            Page::Dashboard => view! { <Dashboard on_logout=logout /> }.into_any(),
        }}
        <Toaster />
    }
}
