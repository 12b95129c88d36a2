//! Wire types for the location search endpoint.

use myturn_core::{GeoPoint, SiteRecord};
use serde::{Deserialize, Serialize};

/// Body of `POST /public/locations/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    /// Earliest appointment date, `YYYY-MM-DD`.
    pub from_date: String,
    pub location: GeoPoint,
    /// Opaque eligibility token, identical for every request.
    pub vaccine_data: &'a str,
}

/// Response envelope. `locations` is absent or `null` when nothing is
/// available near the point. Any envelope field may be `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub eligible: Option<bool>,
    #[serde(default)]
    pub vaccine_data: Option<String>,
    #[serde(default)]
    pub locations: Option<Vec<SiteRecord>>,
}

impl SearchResponse {
    #[must_use]
    pub fn into_sites(self) -> Vec<SiteRecord> {
        self.locations.unwrap_or_default()
    }
}
