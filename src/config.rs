use serde::{Deserialize, Serialize};

/// Which route-lookup collaborator the widget is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Canned routes after a simulated network delay
    Mock,
    /// `POST {api_base_url}/routes/find`
    Http,
}

impl LookupMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "http" | "api" | "backend" => LookupMode::Http,
            _ => LookupMode::Mock,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub lookup_mode: LookupMode,
    pub mock_delay_ms: u32,
    pub enable_logging: bool,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            lookup_mode: LookupMode::Mock,
            mock_delay_ms: 1000,
            enable_logging: true,
            language: "EN".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ROUTE_LOOKUP_MODE"),
            option_env!("MOCK_LOOKUP_DELAY_MS"),
            option_env!("ENABLE_LOGGING"),
            option_env!("UI_LANGUAGE"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        lookup_mode: Option<&str>,
        mock_delay_ms: Option<&str>,
        enable_logging: Option<&str>,
        language: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            lookup_mode: lookup_mode
                .map(LookupMode::parse)
                .unwrap_or(defaults.lookup_mode),
            mock_delay_ms: mock_delay_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mock_delay_ms),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            language: language
                .map(|l| l.to_uppercase())
                .unwrap_or(defaults.language),
        }
    }

    /// Full URL of the route search endpoint
    pub fn routes_find_url(&self) -> String {
        format!("{}/routes/find", self.api_base_url)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
