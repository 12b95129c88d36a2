//! X (Twitter) API v2 publisher.

use std::time::Duration;

use myturn_core::{AppConfig, PublisherCredentials};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::PublishError;
use crate::oauth;
use crate::Publisher;

#[derive(Debug, Serialize)]
struct CreatePost<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: CreatedPost,
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    id: String,
}

/// Posts messages to `POST /2/tweets` as the account the credentials
/// belong to.
pub struct XPublisher {
    client: Client,
    endpoint: Url,
    credentials: PublisherCredentials,
}

impl XPublisher {
    /// Creates a publisher for `endpoint` signed with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::InvalidEndpoint`] if `endpoint` does not parse,
    /// or [`PublishError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        endpoint: &str,
        credentials: PublisherCredentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PublishError> {
        let endpoint = Url::parse(endpoint).map_err(|e| PublishError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }

    /// # Errors
    ///
    /// See [`XPublisher::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PublishError> {
        Self::new(
            &config.publish_url,
            config.credentials.clone(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    fn authorization(&self) -> Result<String, PublishError> {
        let mut signed_url = self.endpoint.clone();
        signed_url.set_query(None);
        signed_url.set_fragment(None);
        oauth::authorization_header(
            &self.credentials,
            "POST",
            signed_url.as_str(),
            &oauth::generate_nonce(),
            chrono::Utc::now().timestamp(),
        )
    }
}

impl Publisher for XPublisher {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        let authorization = self.authorization()?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&CreatePost { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx is success even if the body is not what we expect; the id is
        // only used for the log line.
        match response.json::<CreatePostResponse>().await {
            Ok(created) => tracing::info!(post_id = %created.data.id, "published post"),
            Err(error) => tracing::debug!(%error, "published post, response body not parsed"),
        }
        Ok(())
    }
}
