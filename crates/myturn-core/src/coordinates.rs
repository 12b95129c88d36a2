//! Geocoded ZIP-code dataset used as the list of search points.
//!
//! The file is the OpenDataSoft "flat file JSON" export of the US ZIP code
//! latitude/longitude dataset. The schema is strict: any field not listed
//! here fails the load, so an unexpected export format is caught at startup
//! instead of silently producing `0.0, 0.0` points.

use std::path::Path;

use serde::Deserialize;

use crate::site::GeoPoint;
use crate::ConfigError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZipRecord {
    #[serde(default, rename = "datasetid")]
    pub dataset_id: Option<String>,
    #[serde(default, rename = "recordid")]
    pub record_id: Option<String>,
    pub fields: ZipFields,
    #[serde(default)]
    pub geometry: Option<ZipGeometry>,
    #[serde(default)]
    pub record_timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZipFields {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub dst: Option<i32>,
    #[serde(default)]
    pub geopoint: Option<[f64; 2]>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub timezone: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZipGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl ZipRecord {
    #[must_use]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.fields.latitude, self.fields.longitude)
    }
}

/// Parses dataset JSON into search points, preserving file order.
///
/// # Errors
///
/// Returns [`ConfigError::CoordinatesFileParse`] if the JSON is malformed,
/// a record lacks latitude/longitude, or any record has an unknown field.
pub fn parse_coordinates(json: &str) -> Result<Vec<GeoPoint>, ConfigError> {
    let records: Vec<ZipRecord> =
        serde_json::from_str(json).map_err(ConfigError::CoordinatesFileParse)?;
    Ok(records.iter().map(ZipRecord::point).collect())
}

/// Loads search points from the dataset file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::CoordinatesFileIo`] if the file cannot be read, or
/// [`ConfigError::CoordinatesFileParse`] if its contents are invalid.
pub fn load_coordinates(path: &Path) -> Result<Vec<GeoPoint>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CoordinatesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let points = parse_coordinates(&content)?;
    tracing::debug!(path = %path.display(), points = points.len(), "loaded coordinates");
    Ok(points)
}
