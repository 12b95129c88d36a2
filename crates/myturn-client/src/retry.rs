//! Capped retry with exponential back-off and jitter for location searches.
//!
//! Only transport failures are retried. An HTTP rejection or an unparsable
//! body is a definite answer for that point and is returned immediately.

use std::future::Future;
use std::time::Duration;

use myturn_core::GeoPoint;

use crate::error::QueryError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
pub(crate) fn is_retriable(err: &QueryError) -> bool {
    match err {
        QueryError::Transport(_) => true,
        QueryError::UpstreamRejected { .. }
        | QueryError::BodyUnreadable(_)
        | QueryError::MalformedResponse { .. }
        | QueryError::InvalidEndpoint { .. } => false,
    }
}

/// How many times a search is retried and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    /// Additional attempts after the first. `0` means a single attempt.
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl RetryPolicy {
    const MAX_DELAY_MS: u64 = 30_000;

    /// Delay before the `retry`-th retry (1-based), without jitter:
    /// `backoff_base_ms × 2^(retry-1)`, capped at 30 s.
    fn base_delay_ms(self, retry: u32) -> u64 {
        let doublings = retry.saturating_sub(1).min(16);
        self.backoff_base_ms
            .saturating_mul(1u64 << doublings)
            .min(Self::MAX_DELAY_MS)
    }

    /// [`Self::base_delay_ms`] scaled by a random factor in `[0.75, 1.25)`.
    fn jittered_delay(self, retry: u32) -> Duration {
        let factor = rand::random::<f64>() * 0.5 + 0.75;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let ms = (self.base_delay_ms(retry) as f64 * factor) as u64;
        Duration::from_millis(ms)
    }
}

/// Runs the search for `point`, retrying transport failures per `policy`.
///
/// Each retry is logged with the point and the failure class. Any other
/// error, or the last transport error once retries run out, is returned.
pub(crate) async fn search_with_retry<T, F, Fut>(
    policy: RetryPolicy,
    point: GeoPoint,
    mut search: F,
) -> Result<T, QueryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, QueryError>>,
{
    let mut retries = 0u32;
    loop {
        let err = match search().await {
            Ok(value) => {
                if retries > 0 {
                    tracing::debug!(
                        lat = point.latitude,
                        lng = point.longitude,
                        retries,
                        "location search recovered"
                    );
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if !is_retriable(&err) || retries >= policy.max_retries {
            return Err(err);
        }

        retries += 1;
        let delay = policy.jittered_delay(retries);
        tracing::warn!(
            lat = point.latitude,
            lng = point.longitude,
            failure = err.kind(),
            retry = retries,
            max_retries = policy.max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "location search failed in transit, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}
