//! Weather Alerts Section

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::icon::alert_glyph;
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Language, WeatherAlert, WeatherRequest};
use crate::store::{toast_error, use_ui_store};

/// "32.5°C" style reading; whole numbers print without decimals
pub fn reading(value: f64, unit: &str) -> String {
    format!("{}{}", value, unit)
}

/// "28°C, clear sky" from the current-conditions payload.
/// Accepts flat `temperature`/`description` keys or the nested
/// OpenWeather `main.temp`/`weather[0].description` layout.
pub fn current_summary(current: &serde_json::Value) -> Option<String> {
    let temperature = current
        .get("temperature")
        .or_else(|| current.pointer("/main/temp"))
        .and_then(serde_json::Value::as_f64);
    let description = current
        .get("description")
        .or_else(|| current.pointer("/weather/0/description"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty());

    match (temperature, description) {
        (Some(temp), Some(desc)) => Some(format!("{}, {}", reading(temp.round(), "°C"), desc)),
        (Some(temp), None) => Some(reading(temp.round(), "°C")),
        (None, Some(desc)) => Some(desc.to_string()),
        (None, None) => None,
    }
}

#[component]
fn AlertCard(alert: WeatherAlert) -> impl IntoView {
    let ctx = use_app_context();
    let labels = &t(ctx.language.get_untracked()).weather;

    let glyph = alert_glyph(alert.icon.as_deref(), alert.alert_type.as_deref());
    let badge = format!("badge badge-{}", alert.severity_level().badge_variant());
    let severity = alert.severity.clone();
    let location = alert.location.clone();
    let metrics = [
        (alert.temperature, "°C", "🌡️", labels.temperature),
        (alert.humidity, "%", "💧", labels.humidity),
        (alert.wind_speed, " km/h", "💨", labels.wind),
        (alert.rainfall, " mm", "🌧️", labels.rainfall),
    ];
    let alert = StoredValue::new(alert);

    view! {
        <div class="alert-card">
            <div class="alert-head">
                <span class="alert-icon">{glyph}</span>
                <span class="alert-location">{location}</span>
                <span class=badge>{severity}</span>
            </div>
            <p class="alert-message">
                {move || alert.with_value(|a| a.message_for(ctx.language.get()).to_string())}
            </p>
            <div class="alert-metrics">
                {metrics.into_iter().filter_map(|(value, unit, icon, label)| {
                    value.map(|v| view! {
                        <span class="metric" title=label>{icon} " " {reading(v, unit)}</span>
                    })
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn WeatherSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let text = move || &t(ctx.language.get()).weather;

    let location = StoredValue::new(AppConfig::load().default_location);
    let (alerts, set_alerts) = signal(Vec::<WeatherAlert>::new());
    let (loading, set_loading) = signal(false);
    let (current, set_current) = signal(None::<String>);

    let load_current = move || {
        spawn_local(async move {
            match api::get_current_weather(&location.get_value()).await {
                Ok(payload) => set_current.set(current_summary(&payload)),
                Err(e) => log::debug!("[WEATHER] Current conditions unavailable: {}", e),
            }
        });
    };

    let load_alerts = move |language: Language| {
        set_loading.set(true);
        let request = WeatherRequest {
            location: Some(location.get_value()),
            language: Some(language),
        };
        spawn_local(async move {
            match api::get_weather_alerts(&request).await {
                Ok(list) => {
                    log::info!("[WEATHER] Loaded {} alerts", list.len());
                    set_alerts.set(list);
                }
                Err(e) => {
                    log::error!("[WEATHER] Failed to load alerts: {}", e);
                    toast_error(&store, t(language).weather.error, e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_alerts(ctx.language.get()));
    Effect::new(move |_| load_current());

    view! {
        <section class="card weather-section">
            <div class="card-header">
                <h2 class="card-title">"🌦️ " {move || text().title}</h2>
                <button
                    class="icon-btn"
                    title=move || text().refresh
                    disabled=move || loading.get()
                    on:click=move |_| {
                        load_alerts(ctx.language.get_untracked());
                        load_current();
                    }
                >
                    <span class=move || if loading.get() { "spin" } else { "" }>"⟳"</span>
                </button>
            </div>

            <div class="card-body">
                {move || current.get().map(|summary| view! {
                    <p class="current-weather">
                        <span class="muted">{location.get_value()}</span> " " {summary}
                    </p>
                })}
                {move || {
                    if loading.get() && alerts.with(Vec::is_empty) {
                        view! { <p class="muted">{text().loading}</p> }.into_any()
                    } else if alerts.with(Vec::is_empty) {
                        view! { <p class="muted empty-notice">{text().no_alerts}</p> }.into_any()
                    } else {
                        alerts.get().into_iter()
                            .map(|alert| view! { <AlertCard alert=alert /> })
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
    fn test_reading_format() {
        assert_eq!(reading(30.0, "°C"), "30°C");
        assert_eq!(reading(32.5, "°C"), "32.5°C");
        assert_eq!(reading(12.0, " km/h"), "12 km/h");
    }

    #[test]
    fn test_current_summary_layouts() {
        let flat = serde_json::json!({"temperature": 27.6, "description": "haze"});
        assert_eq!(current_summary(&flat).as_deref(), Some("28°C, haze"));

        let nested = serde_json::json!({
            "main": {"temp": 31.2},
            "weather": [{"description": "clear sky"}]
        });
        assert_eq!(current_summary(&nested).as_deref(), Some("31°C, clear sky"));

        assert_eq!(current_summary(&serde_json::json!({"status": "ok"})), None);
    }
}
