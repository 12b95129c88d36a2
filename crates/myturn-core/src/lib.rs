pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod coordinates;
pub mod render;
pub mod site;

pub use aggregate::SiteAggregator;
pub use app_config::{AppConfig, Environment, PublisherCredentials};
pub use config::load_app_config_with;
pub use coordinates::{load_coordinates, parse_coordinates};
pub use render::{capitalize_first, compose_message, format_clock, render_site};
pub use site::{GeoPoint, OpenHours, SiteRecord};

use thiserror::Error;

/// Fatal startup errors: configuration, credentials, or the coordinate dataset.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read coordinates file {path}: {source}")]
    CoordinatesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse coordinates file: {0}")]
    CoordinatesFileParse(#[source] serde_json::Error),
}
