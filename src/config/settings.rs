/// Environment variable selecting the backend base URL
pub const BASE_URL_ENV: &str = "PUBLIC_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "SmartPokerGrid/1.0".to_string(),
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Unset or blank values fall back to the local default
    pub fn from_base_url(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::from_env(),
        }
    }

    /// Command-line value wins over the environment
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api = ApiSettings::from_base_url(Some(url));
        }
        self
    }
}
