//! The availability sweep: query every point, deduplicate the sites found,
//! then publish one message per site.
//!
//! Per-point query failures and per-message publish failures are logged and
//! skipped; a sweep always runs to the end.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use myturn_client::AvailabilityClient;
use myturn_core::{compose_message, AppConfig, GeoPoint, SiteAggregator, SiteRecord};
use myturn_publisher::Publisher;

#[derive(Debug, Clone)]
pub(crate) struct SweepOptions {
    /// Searches in flight at once. `1` queries strictly one point at a time.
    pub max_concurrent_queries: usize,
    /// Pause between consecutive publishes.
    pub publish_delay: Duration,
    pub signup_url: String,
}

impl SweepOptions {
    pub(crate) fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_concurrent_queries: config.max_concurrent_queries.max(1),
            publish_delay: Duration::from_millis(config.publish_delay_ms),
            signup_url: config.signup_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SweepSummary {
    pub points: usize,
    pub failed_queries: usize,
    pub distinct_sites: usize,
    pub published: usize,
    pub failed_publishes: usize,
}

/// Runs one full sweep over `points`.
pub(crate) async fn run_sweep<P: Publisher>(
    client: &AvailabilityClient,
    points: &[GeoPoint],
    publisher: &P,
    options: &SweepOptions,
) -> SweepSummary {
    let (sites, failed_queries) =
        collect_sites(client, points, options.max_concurrent_queries).await;
    let distinct_sites = sites.len();
    tracing::info!(
        points = points.len(),
        failed_queries,
        distinct_sites,
        "search phase complete"
    );

    let (published, failed_publishes) =
        publish_sites(sites.into_sorted(), publisher, options).await;

    SweepSummary {
        points: points.len(),
        failed_queries,
        distinct_sites,
        published,
        failed_publishes,
    }
}

/// Queries every point and merges the results. Returns the aggregated sites
/// and the number of failed queries.
///
/// Up to `max_concurrent` searches run at once, but results are merged in
/// point order by this task alone, so when two points find the same site the
/// later point's record wins regardless of which response arrived first.
pub(crate) async fn collect_sites(
    client: &AvailabilityClient,
    points: &[GeoPoint],
    max_concurrent: usize,
) -> (SiteAggregator, usize) {
    let mut aggregator = SiteAggregator::new();
    let mut failed = 0usize;

    let results = stream::iter(points.iter().copied())
        .map(|point| async move { (point, client.query(point).await) })
        .buffered(max_concurrent.max(1));
    let mut results = std::pin::pin!(results);

    while let Some((point, result)) = results.next().await {
        match result {
            Ok(batch) => {
                tracing::debug!(
                    lat = point.latitude,
                    lng = point.longitude,
                    found = batch.len(),
                    "merging search results"
                );
                aggregator.add(batch);
            }
            Err(error) => {
                failed += 1;
                tracing::warn!(
                    lat = point.latitude,
                    lng = point.longitude,
                    failure = error.kind(),
                    %error,
                    "location search failed, skipping point"
                );
            }
        }
    }

    (aggregator, failed)
}

/// Publishes one message per site, in the given order. Returns the counts of
/// successful and failed publishes.
pub(crate) async fn publish_sites<P: Publisher>(
    sites: Vec<SiteRecord>,
    publisher: &P,
    options: &SweepOptions,
) -> (usize, usize) {
    let mut published = 0usize;
    let mut failed = 0usize;

    for (index, site) in sites.iter().enumerate() {
        if index > 0 && !options.publish_delay.is_zero() {
            tokio::time::sleep(options.publish_delay).await;
        }

        let message = compose_message(site, &options.signup_url);
        match publisher.publish(&message).await {
            Ok(()) => published += 1,
            Err(error) => {
                failed += 1;
                tracing::warn!(site = site.identity(), %error, "failed to publish site");
            }
        }
    }

    (published, failed)
}

#[cfg(test)]
#[path = "sweep_test.rs"]
mod tests;
