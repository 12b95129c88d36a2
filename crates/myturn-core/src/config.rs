use crate::app_config::{AppConfig, Environment, PublisherCredentials};
use crate::ConfigError;

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_API_SECRET: &str = "API_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "ACCESS_TOKEN";
pub const ENV_ACCESS_SECRET: &str = "ACCESS_SECRET";

/// Every credential the publisher needs, in the order they are checked.
pub const REQUIRED_CREDENTIALS: [&str; 4] = [
    ENV_API_KEY,
    ENV_API_SECRET,
    ENV_ACCESS_TOKEN,
    ENV_ACCESS_SECRET,
];

pub const DEFAULT_SEARCH_URL: &str = "https://api.myturn.ca.gov/public/locations/search";
pub const DEFAULT_PUBLISH_URL: &str = "https://api.x.com/2/tweets";
pub const DEFAULT_SIGNUP_URL: &str = "https://myturn.ca.gov/";
pub const DEFAULT_COORDINATES_PATH: &str = "./assets/ca-zip-code-latitude-and-longitude.json";

/// Eligibility answers captured from the sign-up survey (age 70+). Sent
/// verbatim with every search and never decoded.
pub const DEFAULT_VACCINE_DATA: &str = "WyJhM3F0MDAwMDAwMDFBZExBQVUiLCJhM3F0MDAwMDAwMDFBZE1BQVUiLCJhM3F0MDAwMDAwMDFBZ1VBQVUiLCJhM3F0MDAwMDAwMDFBZ1ZBQVUiXQ==";

/// Build application configuration using the provided env-var lookup function.
///
/// Lets callers inject an environment (a `HashMap` in tests) without touching
/// process state via `set_var`/`remove_var`.
///
/// Credentials are checked before anything else, so a missing secret is
/// always the error reported when several things are wrong.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] naming the first absent credential,
/// or [`ConfigError::InvalidEnvVar`] for an unparsable value.
pub fn load_app_config_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let credentials = PublisherCredentials {
        api_key: require(ENV_API_KEY)?,
        api_secret: require(ENV_API_SECRET)?,
        access_token: require(ENV_ACCESS_TOKEN)?,
        access_secret: require(ENV_ACCESS_SECRET)?,
    };

    let env = parse_environment(&or_default("MYTURN_ENV", "development"))?;
    let log_level = or_default("MYTURN_LOG_LEVEL", "info");
    let coordinates_path = PathBuf::from(or_default(
        "MYTURN_COORDINATES_PATH",
        DEFAULT_COORDINATES_PATH,
    ));

    let search_url = or_default("MYTURN_SEARCH_URL", DEFAULT_SEARCH_URL);
    let publish_url = or_default("MYTURN_PUBLISH_URL", DEFAULT_PUBLISH_URL);
    let signup_url = or_default("MYTURN_SIGNUP_URL", DEFAULT_SIGNUP_URL);
    let vaccine_data = or_default("MYTURN_VACCINE_DATA", DEFAULT_VACCINE_DATA);
    let user_agent = or_default("MYTURN_USER_AGENT", "myturn-bot/0.1 (availability-sweep)");

    let request_timeout_secs = parse_u64("MYTURN_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("MYTURN_MAX_RETRIES", "0")?;
    let retry_backoff_base_ms = parse_u64("MYTURN_RETRY_BACKOFF_BASE_MS", "500")?;
    let max_concurrent_queries = parse_usize("MYTURN_MAX_CONCURRENT_QUERIES", "1")?;
    let publish_delay_ms = parse_u64("MYTURN_PUBLISH_DELAY_MS", "1000")?;

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MYTURN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if max_concurrent_queries == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MYTURN_MAX_CONCURRENT_QUERIES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        coordinates_path,
        credentials,
        search_url,
        publish_url,
        signup_url,
        vaccine_data,
        user_agent,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        max_concurrent_queries,
        publish_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MYTURN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
