//! Icon Glyphs
//!
//! Backend records name their icon (lucide names); the dashboard renders emoji.

/// Glyph for a backend icon name, with a neutral fallback
pub fn icon_glyph(name: Option<&str>) -> &'static str {
    match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
        Some("cloudrain") | Some("cloud-rain") | Some("rain") => "🌧️",
        Some("alerttriangle") | Some("alert-triangle") | Some("wind") => "⚠️",
        Some("sun") | Some("sunny") => "☀️",
        Some("thermometer") | Some("heat") => "🌡️",
        Some("snowflake") | Some("cold") => "❄️",
        Some("sprout") | Some("crop") => "🌱",
        Some("wheat") => "🌾",
        Some("droplets") | Some("water") => "💧",
        Some("bug") | Some("pest") => "🐛",
        Some("soil") | Some("shovel") => "🪴",
        _ => "•",
    }
}

/// Glyph for a weather alert: explicit icon first, then alert type
pub fn alert_glyph(icon: Option<&str>, alert_type: Option<&str>) -> &'static str {
    match icon_glyph(icon) {
        "•" => match icon_glyph(alert_type) {
            "•" => "⚠️",
            glyph => glyph,
        },
        glyph => glyph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        assert_eq!(icon_glyph(Some("CloudRain")), "🌧️");
        assert_eq!(icon_glyph(Some("Bug")), "🐛");
        assert_eq!(icon_glyph(Some("Tractor")), "•");
        assert_eq!(icon_glyph(None), "•");
    }

    #[test]
    fn test_alert_glyph_fallbacks() {
        assert_eq!(alert_glyph(None, Some("rain")), "🌧️");
        assert_eq!(alert_glyph(Some("Sun"), Some("rain")), "☀️");
        assert_eq!(alert_glyph(None, None), "⚠️");
    }
}
