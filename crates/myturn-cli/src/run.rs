//! Command handlers.
//!
//! Both commands resolve configuration (credentials first) and load the
//! coordinate dataset before anything touches the network; either failure
//! aborts the process.

use myturn_client::{AvailabilityClient, ClientOptions};
use myturn_core::{AppConfig, GeoPoint};
use myturn_publisher::XPublisher;

use crate::dry_run::DryRunPublisher;
use crate::sweep::{run_sweep, SweepOptions, SweepSummary};

/// Loads the coordinate dataset, truncated to `limit` points if given.
fn load_points(config: &AppConfig, limit: Option<usize>) -> anyhow::Result<Vec<GeoPoint>> {
    let mut points = myturn_core::load_coordinates(&config.coordinates_path)?;
    if let Some(limit) = limit {
        points.truncate(limit);
    }
    if points.is_empty() {
        tracing::warn!(path = %config.coordinates_path.display(), "coordinate dataset is empty");
    }
    Ok(points)
}

/// Sweep every point and publish each distinct site.
///
/// With `dry_run`, messages are printed to stdout instead of being posted.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or a client cannot be
/// constructed. Individual query and publish failures are logged and skipped.
pub(crate) async fn run_command(
    config: &AppConfig,
    dry_run: bool,
    limit: Option<usize>,
) -> anyhow::Result<SweepSummary> {
    let points = load_points(config, limit)?;
    let client = AvailabilityClient::new(ClientOptions::from_app_config(config))
        .map_err(|e| anyhow::anyhow!("failed to build search client: {e}"))?;
    let options = SweepOptions::from_app_config(config);

    tracing::info!(points = points.len(), dry_run, "starting availability sweep");

    let summary = if dry_run {
        run_sweep(&client, &points, &DryRunPublisher, &options).await
    } else {
        let publisher = XPublisher::from_app_config(config)
            .map_err(|e| anyhow::anyhow!("failed to build publisher: {e}"))?;
        run_sweep(&client, &points, &publisher, &options).await
    };

    println!(
        "Sweep complete: {} points ({} failed), {} distinct sites, {} published ({} failed)",
        summary.points,
        summary.failed_queries,
        summary.distinct_sites,
        summary.published,
        summary.failed_publishes,
    );

    Ok(summary)
}

/// Validate configuration and the dataset without any network traffic.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or an endpoint URL is
/// invalid.
pub(crate) fn check_command(config: &AppConfig) -> anyhow::Result<()> {
    let points = load_points(config, None)?;
    AvailabilityClient::new(ClientOptions::from_app_config(config))
        .map_err(|e| anyhow::anyhow!("invalid search client configuration: {e}"))?;
    XPublisher::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("invalid publisher configuration: {e}"))?;

    println!("Configuration OK ({} environment)", config.env);
    println!(
        "  {} search points from {}",
        points.len(),
        config.coordinates_path.display()
    );
    println!("  search endpoint:  {}", config.search_url);
    println!("  publish endpoint: {}", config.publish_url);
    Ok(())
}
