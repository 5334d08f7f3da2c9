//! Dashboard Header Component
//!
//! Sidebar toggle, welcome line, language switch, avatar and logout.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::Language;

#[component]
pub fn Header(
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let text = move || &t(ctx.language.get()).header;

    view! {
        <header class="dashboard-header">
            <div class="header-left">
                <button
                    class="icon-btn menu-btn"
                    title=move || text().open_menu
                    on:click=move |_| ctx.set_sidebar_open(true)
                >
                    "☰"
                </button>
                <h1 class="header-welcome">{move || text().welcome}</h1>
            </div>

            <div class="header-right">
                <div class="language-switch" role="group" aria-label=move || text().language>
                    {Language::ALL.iter().map(|&lang| {
                        view! {
                            <button
                                class=move || if ctx.language.get() == lang { "lang-btn active" } else { "lang-btn" }
                                on:click=move |_| ctx.set_language(lang)
                            >
                                {lang.switch_label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="avatar">"👤"</div>

                <button class="ghost-btn logout-btn" on:click=move |_| on_logout.run(())>
                    <span class="logout-icon">"⎋"</span>
                    <span class="logout-label">{move || text().logout}</span>
                </button>
            </div>
        </header>
    }
}
