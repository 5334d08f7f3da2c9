//! Mandi Prices Section
//!
//! Commodity picker plus a price table for the regulated markets that
//! reported that commodity. Prices are rupees per quintal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::format::rupees;
use crate::i18n::t;
use crate::models::MandiPrice;
use crate::store::{toast_error, toast_info, use_ui_store};

/// (backend value, trilingual label)
pub const COMMODITIES: [(&str, &str); 12] = [
    ("Wheat", "Wheat / गेहूं / ઘઉં"),
    ("Rice", "Rice / चावल / ચોખા"),
    ("Bajra", "Bajra / बाजरा / બાજરી"),
    ("Maize", "Maize / मक्का / મકાઈ"),
    ("Cotton", "Cotton / कपास / કપાસ"),
    ("Groundnut", "Groundnut / मूंगफली / મગફળી"),
    ("Castor Seed", "Castor Seed / अरंडी / એરંડા"),
    ("Onion", "Onion / प्याज / ડુંગળી"),
    ("Potato", "Potato / आलू / બટાકા"),
    ("Tomato", "Tomato / टमाटर / ટામેટા"),
    ("Cumin", "Cumin / जीरा / જીરૂ"),
    ("Garlic", "Garlic / लहसुन / લસણ"),
];

pub const DEFAULT_COMMODITY: &str = "Wheat";

/// Known commodity value, or the default
pub fn commodity_or_default(value: &str) -> &'static str {
    COMMODITIES
        .iter()
        .map(|&(v, _)| v)
        .find(|v| *v == value)
        .unwrap_or(DEFAULT_COMMODITY)
}

#[component]
fn PriceRow(price: MandiPrice) -> impl IntoView {
    let range = format!("{} / {}", rupees(price.min_price), rupees(price.max_price));

    view! {
        <tr>
            <td class="mandi-market">
                <span class="market-name">{price.market}</span>
                <span class="market-date muted">{price.date}</span>
            </td>
            <td class="mandi-range">{range}</td>
            <td class="mandi-modal">{rupees(price.modal_price)}</td>
        </tr>
    }
}

#[component]
pub fn MandiSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let text = move || &t(ctx.language.get()).mandi;

    let (prices, set_prices) = signal(Vec::<MandiPrice>::new());
    let (loading, set_loading) = signal(true);
    let (commodity, set_commodity) = signal(DEFAULT_COMMODITY);

    let load_prices = move |commodity: &'static str| {
        set_loading.set(true);
        spawn_local(async move {
            log::debug!("[MANDI] Fetching prices for {}", commodity);
            let text = &t(ctx.language.get_untracked()).mandi;
            match api::get_mandi_prices(commodity).await {
                Ok(list) => {
                    log::info!("[MANDI] {} records for {}", list.len(), commodity);
                    if list.is_empty() {
                        toast_info(&store, text.no_data, Some(text.no_data_hint));
                    }
                    set_prices.set(list);
                }
                Err(e) => {
                    log::error!("[MANDI] Failed to fetch prices: {}", e);
                    toast_error(&store, text.error, e);
                    set_prices.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_prices(commodity.get()));

    view! {
        <section class="card mandi-section">
            <div class="card-header">
                <h2 class="card-title">"📈 " {move || text().title}</h2>
                <div class="card-actions">
                    <select
                        class="select"
                        aria-label=move || text().commodity
                        on:change=move |ev| set_commodity.set(commodity_or_default(&event_target_value(&ev)))
                    >
                        {COMMODITIES.iter().map(|&(value, label)| view! {
                            <option value=value selected=move || commodity.get() == value>{label}</option>
                        }).collect_view()}
                    </select>
                    <button
                        class="icon-btn"
                        title=move || text().refresh
                        disabled=move || loading.get()
                        on:click=move |_| load_prices(commodity.get_untracked())
                    >
                        <span class=move || if loading.get() { "spin" } else { "" }>"⟳"</span>
                    </button>
                </div>
            </div>

            <div class="card-body scroll-body">
                {move || {
                    if loading.get() {
                        view! { <p class="muted loading-notice">"⏳ " {text().loading}</p> }.into_any()
                    } else if prices.with(Vec::is_empty) {
                        view! {
                            <div class="empty-notice">
                                <p class="muted">{text().no_data}</p>
                                <p class="muted small">{text().try_hint}</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <table class="mandi-table">
                                <caption class="muted small">{text().price}</caption>
                                <thead>
                                    <tr>
                                        <th>{text().market}</th>
                                        <th>{text().min} " / " {text().max}</th>
                                        <th>{text().modal}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {prices.get().into_iter()
                                        .map(|price| view! { <PriceRow price=price /> })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
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
    fn test_commodity_list() {
        assert_eq!(COMMODITIES.len(), 12);
        assert_eq!(COMMODITIES[0].0, DEFAULT_COMMODITY);
        assert!(COMMODITIES.iter().any(|(v, _)| *v == "Castor Seed"));
    }

    #[test]
    fn test_unknown_commodity_falls_back() {
        assert_eq!(commodity_or_default("Cumin"), "Cumin");
        assert_eq!(commodity_or_default("Saffron"), "Wheat");
    }
}
