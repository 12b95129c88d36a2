//! Plain-text rendering of site records for publishing.
//!
//! Everything here is pure: the same record always renders to the same text,
//! and no input makes rendering fail.

use chrono::NaiveTime;

use crate::site::{OpenHours, SiteRecord};

const UPSTREAM_TIME_FORMAT: &str = "%H:%M:%S";
const CLOCK_FORMAT: &str = "%-I:%M%p";

/// Upper-cases the first character of `word`, leaving the rest unchanged.
#[must_use]
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a 24-hour `HH:MM:SS` time to a 12-hour clock such as `8:00AM`.
///
/// Returns an empty string when `raw` does not parse.
#[must_use]
pub fn format_clock(raw: &str) -> String {
    NaiveTime::parse_from_str(raw.trim(), UPSTREAM_TIME_FORMAT)
        .map(|t| t.format(CLOCK_FORMAT).to_string())
        .unwrap_or_default()
}

/// `Monday,Wednesday - 8:00AM-3:00PM`
fn render_hours(hours: &OpenHours) -> String {
    let days = hours
        .days
        .iter()
        .map(|d| capitalize_first(d))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{days} - {}-{}",
        format_clock(&hours.local_start),
        format_clock(&hours.local_end)
    )
}

/// Renders a site as its name, its address, then one line per opening
/// interval.
#[must_use]
pub fn render_site(site: &SiteRecord) -> String {
    let mut lines = Vec::with_capacity(2 + site.open_hours.len());
    lines.push(site.name.clone());
    lines.push(site.display_address.clone());
    lines.extend(site.open_hours.iter().map(render_hours));
    lines.join("\n")
}

/// The full published message: the rendered site plus the sign-up line.
#[must_use]
pub fn compose_message(site: &SiteRecord, signup_url: &str) -> String {
    format!("{}\nSign up at: {signup_url}", render_site(site))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
