//! Vaccination site records as returned by the location search endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A latitude/longitude pair. Serialized as `{"lat": .., "lng": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Deserializes an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One opening-hours interval for a site.
///
/// Times are local 24-hour `HH:MM:SS` strings exactly as the upstream sends
/// them; parsing happens only when rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenHours {
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_end: String,
}

/// A site with availability, as found by a single search query.
///
/// The same site is usually found from several nearby query points; sites
/// are deduplicated across queries by [`SiteRecord::identity`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance_in_meters: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ext_id: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_hours: Vec<OpenHours>,
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vaccine_data: String,
}

impl SiteRecord {
    /// Natural key used to deduplicate sites: the site name.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.name
    }
}
