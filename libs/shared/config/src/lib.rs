use std::env;
use tracing::warn;

const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
                warn!("GEMINI_API_KEY not set, using empty value");
                String::new()
            }),
            gemini_api_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| {
                warn!("GEMINI_API_URL not set, using default");
                DEFAULT_GEMINI_API_URL.to_string()
            }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}
