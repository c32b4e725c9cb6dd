use anyhow::{Context, Result};

use crate::i18n::Language;

/// Chat-completions gateway used when NARRATION_API_URL is not set.
pub const DEFAULT_NARRATION_API_URL: &str =
    "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Generation model used when NARRATION_MODEL is not set.
pub const DEFAULT_NARRATION_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    // Narration gateway
    pub narration_api_key: Option<String>,
    pub narration_api_url: String,
    pub narration_model: String,

    // Presentation defaults
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // The credential is checked at narration call time, not here, so the
        // guide still renders text and stored recordings without one.
        let narration_api_key = std::env::var("NARRATION_API_KEY").ok();

        let default_language = match std::env::var("GUIDE_DEFAULT_LANGUAGE") {
            Ok(value) => Language::from_code(&value)
                .context("GUIDE_DEFAULT_LANGUAGE is not a supported language")?,
            Err(_) => Language::English,
        };

        Ok(Self {
            narration_api_key,
            narration_api_url: std::env::var("NARRATION_API_URL")
                .unwrap_or_else(|_| DEFAULT_NARRATION_API_URL.to_string()),
            narration_model: std::env::var("NARRATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_NARRATION_MODEL.to_string()),
            default_language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("NARRATION_API_KEY");
        std::env::remove_var("NARRATION_API_URL");
        std::env::remove_var("NARRATION_MODEL");
        std::env::remove_var("GUIDE_DEFAULT_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should succeed");

        assert_eq!(config.narration_api_key, None);
        assert_eq!(config.narration_api_url, DEFAULT_NARRATION_API_URL);
        assert_eq!(config.narration_model, DEFAULT_NARRATION_MODEL);
        assert_eq!(config.default_language, Language::English);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("NARRATION_API_KEY", "test-gateway-key");
        std::env::set_var("NARRATION_API_URL", "http://localhost:9999/v1/chat/completions");
        std::env::set_var("NARRATION_MODEL", "google/gemini-2.5-pro");
        std::env::set_var("GUIDE_DEFAULT_LANGUAGE", "telugu");

        let config = Config::from_env().expect("Should succeed");

        assert_eq!(config.narration_api_key.as_deref(), Some("test-gateway-key"));
        assert_eq!(
            config.narration_api_url,
            "http://localhost:9999/v1/chat/completions"
        );
        assert_eq!(config.narration_model, "google/gemini-2.5-pro");
        assert_eq!(config.default_language, Language::Telugu);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unsupported_default_language() {
        clear_env();
        std::env::set_var("GUIDE_DEFAULT_LANGUAGE", "spanish");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("GUIDE_DEFAULT_LANGUAGE"));

        clear_env();
    }
}
