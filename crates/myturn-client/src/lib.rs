//! Client for the My Turn public vaccine location search.

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::{AvailabilityClient, ClientOptions};
pub use error::QueryError;
pub use types::{SearchRequest, SearchResponse};
