//! Build-time Configuration
//!
//! Values are baked in at compile time through environment variables,
//! e.g. `FARMER_API_BASE=https://api.example.org/api/v1 trunk build`.

/// Backend base URL; relative values resolve against the page origin
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Location sent with weather requests
pub const DEFAULT_LOCATION: &str = "Delhi,IN";

/// Local storage key for the chat history
pub const CHAT_HISTORY_KEY: &str = "farmer-chat-history";

/// Local storage key for the backend conversation id
pub const CONVERSATION_ID_KEY: &str = "farmer-conversation-id";

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub default_location: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("FARMER_API_BASE"), option_env!("FARMER_DEFAULT_LOCATION"))
    }

    fn from_values(api_base: Option<&str>, location: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            api_base: pick(api_base, DEFAULT_API_BASE),
            default_location: pick(location, DEFAULT_LOCATION),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "/api/v1");
        assert_eq!(config.default_location, "Delhi,IN");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("Rajkot,IN"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.default_location, "Rajkot,IN");
    }
}
