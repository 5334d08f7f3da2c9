//! Landing Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;

#[component]
pub fn Landing(
    #[prop(into)] on_enter: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let text = move || &t(ctx.language.get()).landing;

    view! {
        <main class="landing">
            <div class="landing-hero">
                <div class="landing-logo">"🌾"</div>
                <h1 class="landing-title">{move || text().title}</h1>
                <p class="landing-tagline">{move || text().tagline}</p>
                <button class="primary-btn landing-go" on:click=move |_| on_enter.run(())>
                    {move || text().go} " →"
                </button>
            </div>
        </main>
    }
}
