//! Government Schemes Section
//!
//! Accordion of schemes; at most one entry is expanded at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Language, Scheme};
use crate::store::{toast_error, use_ui_store};

/// Next open id after clicking `clicked`: clicking the open entry closes it
pub fn toggle_open(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::error!("[SCHEMES] Failed to open {}: {:?}", url, e);
    }
}

/// List entries can arrive without their detail fields
pub fn lacks_details(scheme: &Scheme) -> bool {
    scheme.eligibility.is_none() && scheme.benefits.is_none() && scheme.application_url.is_none()
}

/// Fill the detail fields a listed scheme is missing.
/// Name and description stay as listed, in the requested language.
pub fn merge_details(listed: &mut Scheme, detail: Scheme) {
    if listed.eligibility.is_none() {
        listed.eligibility = detail.eligibility;
    }
    if listed.benefits.is_none() {
        listed.benefits = detail.benefits;
    }
    if listed.application_url.is_none() {
        listed.application_url = detail.application_url;
    }
}

#[component]
fn SchemeItem(scheme: Scheme, open_id: ReadSignal<Option<String>>, set_open_id: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let text = move || &t(ctx.language.get()).schemes;

    let id = StoredValue::new(scheme.id.clone());
    let name = scheme.name.clone();
    let needs_fetch = StoredValue::new(lacks_details(&scheme));
    let scheme = RwSignal::new(scheme);
    let is_open = move || open_id.with(|open| open.as_deref() == Some(id.get_value().as_str()));

    let on_toggle = move |_| {
        let clicked = id.get_value();
        set_open_id.update(|open| *open = toggle_open(open.as_deref(), &clicked));
        if is_open() && needs_fetch.get_value() {
            needs_fetch.set_value(false);
            let language = ctx.language.get_untracked();
            spawn_local(async move {
                match api::get_scheme(&clicked, language).await {
                    Ok(detail) => scheme.update(|listed| merge_details(listed, detail)),
                    Err(e) => log::warn!("[SCHEMES] Failed to load scheme {}: {}", clicked, e),
                }
            });
        }
    };

    view! {
        <div class=move || if is_open() { "accordion-item open" } else { "accordion-item" }>
            <button class="accordion-trigger" on:click=on_toggle>
                <span class="accordion-title">{name}</span>
                <span class="accordion-chevron">{move || if is_open() { "▴" } else { "▾" }}</span>
            </button>
            <Show when=is_open>
                <div class="accordion-content">
                    <p>{move || scheme.with(|s| s.description.clone())}</p>
                    {move || scheme.with(|s| s.eligibility.clone()).map(|value| view! {
                        <p class="scheme-detail">
                            <strong>{text().eligibility} ": "</strong>
                            {value}
                        </p>
                    })}
                    {move || scheme.with(|s| s.benefits.clone()).map(|value| view! {
                        <p class="scheme-detail">
                            <strong>{text().benefits} ": "</strong>
                            {value}
                        </p>
                    })}
                    {move || scheme.with(|s| s.application_url.clone())
                        .filter(|url| !url.trim().is_empty())
                        .map(|url| view! {
                            <button class="primary-btn apply-btn" on:click=move |_| open_in_new_tab(&url)>
                                {text().apply} " ↗"
                            </button>
                        })}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn SchemesSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let text = move || &t(ctx.language.get()).schemes;

    let (schemes, set_schemes) = signal(Vec::<Scheme>::new());
    let (loading, set_loading) = signal(false);
    let (open_id, set_open_id) = signal(None::<String>);

    let load_schemes = move |language: Language| {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_schemes(language, true).await {
                Ok(list) => {
                    log::info!("[SCHEMES] Loaded {} schemes", list.len());
                    set_schemes.set(list);
                }
                Err(e) => {
                    log::error!("[SCHEMES] Failed to load schemes: {}", e);
                    toast_error(&store, t(language).schemes.error, e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_schemes(ctx.language.get()));

    view! {
        <section class="card schemes-section">
            <div class="card-header">
                <h2 class="card-title">"🏛️ " {move || text().title}</h2>
            </div>
            <div class="card-body accordion">
                {move || {
                    if loading.get() && schemes.with(Vec::is_empty) {
                        view! { <p class="muted">{text().loading}</p> }.into_any()
                    } else if schemes.with(Vec::is_empty) {
                        view! { <p class="muted empty-notice">{text().empty}</p> }.into_any()
                    } else {
                        schemes.get().into_iter()
                            .map(|scheme| view! { <SchemeItem scheme=scheme open_id=open_id set_open_id=set_open_id /> })
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
    fn test_single_open_accordion() {
        let open = toggle_open(None, "pm-kisan");
        assert_eq!(open.as_deref(), Some("pm-kisan"));
        let open = toggle_open(open.as_deref(), "pmfby");
        assert_eq!(open.as_deref(), Some("pmfby"));
        assert_eq!(toggle_open(open.as_deref(), "pmfby"), None);
    }

    #[test]
    fn test_lacks_details() {
        let mut scheme: Scheme = serde_json::from_value(serde_json::json!({
            "id": "pm-kisan",
            "name": "PM-KISAN",
            "description": "Income support of ₹6,000 per year"
        }))
        .unwrap();
        assert!(lacks_details(&scheme));
        scheme.application_url = Some("https://pmkisan.gov.in".into());
        assert!(!lacks_details(&scheme));
    }

    #[test]
    fn test_merge_keeps_listed_translation() {
        let mut listed: Scheme = serde_json::from_value(serde_json::json!({
            "id": "pm-kisan",
            "name": "पीएम-किसान",
            "description": "प्रति वर्ष ₹6,000 की आय सहायता"
        }))
        .unwrap();
        let detail: Scheme = serde_json::from_value(serde_json::json!({
            "id": "pm-kisan",
            "name": "PM-KISAN",
            "description": "Income support of ₹6,000 per year",
            "eligibility": "Small and marginal farmers",
            "application_url": "https://pmkisan.gov.in"
        }))
        .unwrap();

        merge_details(&mut listed, detail);
        assert_eq!(listed.name, "पीएम-किसान");
        assert_eq!(listed.description, "प्रति वर्ष ₹6,000 की आय सहायता");
        assert_eq!(listed.eligibility.as_deref(), Some("Small and marginal farmers"));
        assert_eq!(listed.benefits, None);
        assert_eq!(listed.application_url.as_deref(), Some("https://pmkisan.gov.in"));
    }
}
