//! Farming Tips Section

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TipFilter};
use crate::components::icon::icon_glyph;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Language, Tip};
use crate::store::{toast_error, use_ui_store};

/// Filter for a category button value; "" means all categories
pub fn category_filter(category: &str) -> TipFilter {
    TipFilter {
        category: Some(category.to_string()).filter(|c| !c.is_empty()),
        season: None,
    }
}

/// Non-blank long-form content
fn tip_body(content: Option<String>) -> Option<String> {
    content.filter(|c| !c.trim().is_empty())
}

#[component]
fn TipCard(tip: Tip) -> impl IntoView {
    let ctx = use_app_context();
    let text = move || &t(ctx.language.get()).tips;
    let (expanded, set_expanded) = signal(false);

    let glyph = icon_glyph(tip.icon.as_deref().or(tip.category.as_deref()));
    let id = StoredValue::new(tip.id);
    let (content, set_content) = signal(tip_body(tip.content));
    // List responses may omit the body; it is fetched on first expand
    let (fetched, set_fetched) = signal(content.with_untracked(Option::is_some));

    let toggle = move |_| {
        let open = !expanded.get_untracked();
        set_expanded.set(open);
        if open && !fetched.get_untracked() {
            set_fetched.set(true);
            let language = ctx.language.get_untracked();
            spawn_local(async move {
                match api::get_tip(&id.get_value(), language).await {
                    Ok(full) => set_content.set(tip_body(full.content)),
                    Err(e) => log::warn!("[TIPS] Failed to load tip {}: {}", id.get_value(), e),
                }
            });
        }
    };

    view! {
        <div class="tip-card">
            <div class="tip-head">
                <span class="tip-icon">{glyph}</span>
                <h3 class="tip-title">{tip.title}</h3>
            </div>
            <p class="tip-description">{tip.description}</p>
            <Show when=move || expanded.get() && content.with(Option::is_some)>
                <p class="tip-content">{move || content.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !fetched.get() || content.with(Option::is_some)>
                <button class="link-btn" on:click=toggle>
                    {move || if expanded.get() { text().show_less } else { text().read_more }}
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn TipsSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let text = move || &t(ctx.language.get()).tips;

    let (tips, set_tips) = signal(Vec::<Tip>::new());
    let (loading, set_loading) = signal(false);
    let (category, set_category) = signal(String::new());

    let load_tips = move |language: Language, filter: TipFilter| {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_tips(language, &filter, true).await {
                Ok(list) => {
                    log::info!("[TIPS] Loaded {} tips ({:?})", list.len(), filter.category);
                    set_tips.set(list);
                }
                Err(e) => {
                    log::error!("[TIPS] Failed to load tips: {}", e);
                    toast_error(&store, t(language).tips.error, e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let language = ctx.language.get();
        let filter = category.with(|c| category_filter(c));
        load_tips(language, filter);
    });

    view! {
        <section class="card tips-section">
            <div class="card-header">
                <h2 class="card-title">"💡 " {move || text().title}</h2>
            </div>

            <div class="chip-row">
                {move || text().categories.iter().map(|&(value, label)| {
                    view! {
                        <button
                            class=move || if category.with(|c| c == value) { "chip active" } else { "chip" }
                            on:click=move |_| set_category.set(value.to_string())
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="card-body">
                {move || {
                    if loading.get() && tips.with(Vec::is_empty) {
                        view! { <p class="muted">{text().loading}</p> }.into_any()
                    } else if tips.with(Vec::is_empty) {
                        view! { <p class="muted empty-notice">{text().empty}</p> }.into_any()
                    } else {
                        tips.get().into_iter()
                            .map(|tip| view! { <TipCard tip=tip /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        assert_eq!(category_filter(""), TipFilter::default());
        assert_eq!(category_filter("pest").category.as_deref(), Some("pest"));
    }

    #[test]
    fn test_blank_body_hidden() {
        assert_eq!(tip_body(Some("  ".into())), None);
        assert_eq!(tip_body(Some("Mulch after sowing".into())).as_deref(), Some("Mulch after sowing"));
    }
}
