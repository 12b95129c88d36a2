//! HTTP client for the My Turn location search endpoint.
//!
//! Wraps `reqwest` with one POST per search point, classifying every failure
//! into a [`QueryError`] variant so the caller can skip the point and move on.

use std::time::Duration;

use chrono::NaiveDate;
use myturn_core::{AppConfig, GeoPoint, SiteRecord};
use reqwest::{Client, Url};

use crate::error::QueryError;
use crate::retry::{search_with_retry, RetryPolicy};
use crate::types::{SearchRequest, SearchResponse};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Construction parameters for [`AvailabilityClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub search_url: String,
    pub vaccine_data: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Additional attempts after a transport failure. `0` disables retries.
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl ClientOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            search_url: config.search_url.clone(),
            vaccine_data: config.vaccine_data.clone(),
            user_agent: config.user_agent.clone(),
            timeout_secs: config.request_timeout_secs,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        }
    }
}

/// Client for the location search endpoint.
///
/// Holds the HTTP client, the endpoint URL and the fixed eligibility token
/// sent with every search.
pub struct AvailabilityClient {
    client: Client,
    search_url: Url,
    vaccine_data: String,
    retry: RetryPolicy,
}

impl AvailabilityClient {
    /// Creates a client from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidEndpoint`] if `search_url` does not parse,
    /// or [`QueryError::Transport`] if the `reqwest::Client` cannot be built.
    pub fn new(options: ClientOptions) -> Result<Self, QueryError> {
        let search_url =
            Url::parse(&options.search_url).map_err(|e| QueryError::InvalidEndpoint {
                url: options.search_url.clone(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(QueryError::Transport)?;

        Ok(Self {
            client,
            search_url,
            vaccine_data: options.vaccine_data,
            retry: RetryPolicy {
                max_retries: options.max_retries,
                backoff_base_ms: options.backoff_base_ms,
            },
        })
    }

    /// Searches for sites with availability from today (local date) near
    /// `point`.
    ///
    /// # Errors
    ///
    /// See [`AvailabilityClient::query_on`].
    pub async fn query(&self, point: GeoPoint) -> Result<Vec<SiteRecord>, QueryError> {
        self.query_on(point, chrono::Local::now().date_naive()).await
    }

    /// Searches for sites with availability from `from_date` near `point`.
    ///
    /// Returns the response's `locations`, which may be empty.
    ///
    /// # Errors
    ///
    /// - [`QueryError::Transport`] on connection failure or timeout, after any
    ///   configured retries.
    /// - [`QueryError::UpstreamRejected`] on HTTP status 400 or above.
    /// - [`QueryError::BodyUnreadable`] if the body cannot be read.
    /// - [`QueryError::MalformedResponse`] if the body is not a search response.
    pub async fn query_on(
        &self,
        point: GeoPoint,
        from_date: NaiveDate,
    ) -> Result<Vec<SiteRecord>, QueryError> {
        let request = self.build_request(point, from_date);
        let sites = search_with_retry(self.retry, point, || {
            self.send_search(&request)
        })
        .await?;

        tracing::debug!(
            lat = point.latitude,
            lng = point.longitude,
            sites = sites.len(),
            "location search complete"
        );
        Ok(sites)
    }

    fn build_request(&self, point: GeoPoint, from_date: NaiveDate) -> SearchRequest<'_> {
        SearchRequest {
            from_date: from_date.format(DATE_FORMAT).to_string(),
            location: point,
            vaccine_data: &self.vaccine_data,
        }
    }

    /// Sends one search and classifies the outcome. No retries here.
    async fn send_search(&self, request: &SearchRequest<'_>) -> Result<Vec<SiteRecord>, QueryError> {
        let response = self
            .client
            .post(self.search_url.clone())
            .json(request)
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(QueryError::UpstreamRejected {
                status: status.as_u16(),
                url: self.search_url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(QueryError::BodyUnreadable)?;
        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| QueryError::MalformedResponse {
                context: format!(
                    "search at ({}, {})",
                    request.location.latitude, request.location.longitude
                ),
                source: e,
            })?;

        Ok(parsed.into_sites())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
