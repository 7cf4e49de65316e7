#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the dashboard data layer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend serving `/api/playback-data`.
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Server-side result cap. A search returning at least this many
    /// results is classified as limited.
    pub result_limit: i64,
    /// Length of the trailing window applied by `initialize`.
    pub default_window_days: u32,
}
