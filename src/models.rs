//! Frontend Models
//!
//! Data structures matching backend JSON records.

use serde::{Deserialize, Serialize};

/// Dashboard display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    En,
    Hi,
    Gu,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Gu];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Gu => "gu",
        }
    }

    /// Unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" => Language::Hi,
            "gu" => Language::Gu,
            _ => Language::En,
        }
    }

    /// BCP-47 tag used for speech recognition and synthesis
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::En => "en-IN",
            Language::Hi => "hi-IN",
            Language::Gu => "gu-IN",
        }
    }

    /// Short label for the language switch
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "हिं",
            Language::Gu => "ગુ",
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from_code(&code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat bubble (also the persisted history entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>, created_at: Option<String>) -> Self {
        Self { role: Role::User, content: content.into(), created_at }
    }

    pub fn assistant(content: impl Into<String>, created_at: Option<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), created_at }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub conversation_id: String,
    pub message: String,
    pub role: Role,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Alert severity; drives the badge variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
    Other,
}

impl Severity {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "severe" | "extreme" => Severity::High,
            "medium" | "moderate" => Severity::Medium,
            "low" | "minor" => Severity::Low,
            _ => Severity::Other,
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Severity::High => "destructive",
            Severity::Medium => "warning",
            Severity::Low => "success",
            Severity::Other => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherAlert {
    #[serde(default)]
    pub id: Option<String>,
    pub location: String,
    pub severity: String,
    pub message_en: String,
    #[serde(default)]
    pub message_hi: Option<String>,
    #[serde(default)]
    pub message_gu: Option<String>,
    #[serde(default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub rainfall: Option<f64>,
}

impl WeatherAlert {
    /// Localized text; blank or missing translations fall back to English
    pub fn message_for(&self, language: Language) -> &str {
        let localized = match language {
            Language::En => None,
            Language::Hi => self.message_hi.as_deref(),
            Language::Gu => self.message_gu.as_deref(),
        };
        localized
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(&self.message_en)
    }

    pub fn severity_level(&self) -> Severity {
        Severity::parse(&self.severity)
    }
}

/// Government scheme; text fields are already mapped to the requested language
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scheme {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One market quote, prices in rupees per quintal
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MandiPrice {
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    pub market: String,
    pub commodity: String,
    #[serde(default)]
    pub variety: Option<String>,
    pub date: String,
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
        }
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::Gu.speech_locale(), "gu-IN");
    }

    #[test]
    fn test_unknown_language_is_english() {
        assert_eq!(Language::from_code(" HI "), Language::Hi);
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(serde_json::from_str::<Language>("\"gu\"").unwrap(), Language::Gu);
        assert_eq!(serde_json::from_str::<Language>("\"fr\"").unwrap(), Language::En);
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(serde_json::from_str::<Language>(&json).unwrap(), lang);
        }
    }

    #[test]
    fn test_chat_request_omits_missing_fields() {
        let req = ChatRequest {
            message: "When to sow wheat?".to_string(),
            conversation_id: None,
            user_id: None,
            language: Some(Language::Hi),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"message": "When to sow wheat?", "language": "hi"}));
    }

    #[test]
    fn test_alert_message_fallback() {
        let alert: WeatherAlert = serde_json::from_value(serde_json::json!({
            "location": "Anand",
            "severity": "HIGH",
            "message_en": "Heavy rainfall expected in next 48 hours",
            "message_hi": "अगले 48 घंटों में भारी बारिश की उम्मीद",
            "message_gu": "  ",
            "temperature": 29.5
        }))
        .unwrap();

        assert_eq!(alert.message_for(Language::Hi), "अगले 48 घंटों में भारी बारिश की उम्मीद");
        assert_eq!(alert.message_for(Language::Gu), "Heavy rainfall expected in next 48 hours");
        assert_eq!(alert.severity_level(), Severity::High);
        assert_eq!(alert.temperature, Some(29.5));
        assert!(alert.humidity.is_none());
    }

    #[test]
    fn test_severity_badges() {
        assert_eq!(Severity::parse("medium").badge_variant(), "warning");
        assert_eq!(Severity::parse("Low").badge_variant(), "success");
        assert_eq!(Severity::parse("unknown").badge_variant(), "default");
    }

    #[test]
    fn test_scheme_defaults_active() {
        let scheme: Scheme = serde_json::from_value(serde_json::json!({
            "id": "pm-kisan",
            "name": "PM-KISAN",
            "description": "Direct income support of ₹6,000 per year to farmer families.",
            "scheme_metadata": {"ministry": "Agriculture"}
        }))
        .unwrap();
        assert!(scheme.is_active);
        assert!(scheme.application_url.is_none());
    }

    #[test]
    fn test_message_history_shape() {
        let history = vec![
            Message::assistant("Namaste!", None),
            Message::user("Onion price?", Some("2026-10-17T09:30:00Z".to_string())),
        ];
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(
            json,
            r#"[{"role":"assistant","content":"Namaste!"},{"role":"user","content":"Onion price?","created_at":"2026-10-17T09:30:00Z"}]"#
        );
        let back: Vec<Message> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
