use std::path::PathBuf;

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

/// OAuth 1.0a user-context credentials for the publishing account.
#[derive(Clone, PartialEq, Eq)]
pub struct PublisherCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl std::fmt::Debug for PublisherCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherCredentials")
            .field("api_key", &"[redacted]")
            .field("api_secret", &"[redacted]")
            .field("access_token", &"[redacted]")
            .field("access_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub coordinates_path: PathBuf,
    pub credentials: PublisherCredentials,
    pub search_url: String,
    pub publish_url: String,
    pub signup_url: String,
    pub vaccine_data: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub max_concurrent_queries: usize,
    pub publish_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("coordinates_path", &self.coordinates_path)
            .field("credentials", &self.credentials)
            .field("search_url", &self.search_url)
            .field("publish_url", &self.publish_url)
            .field("signup_url", &self.signup_url)
            .field("vaccine_data", &self.vaccine_data)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("max_concurrent_queries", &self.max_concurrent_queries)
            .field("publish_delay_ms", &self.publish_delay_ms)
            .finish()
    }
}
