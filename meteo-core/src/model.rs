use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Input payload accepted by the CLI.
///
/// Either `location` alone (resolved via geocoding) or `latitude`/`longitude`
/// (used directly, with `location` as an optional display name). Any other
/// fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl WeatherQuery {
    /// Parse the raw payload string. An empty or whitespace-only payload is
    /// treated as an empty query, not an error.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(raw).map_err(|e| Error::Input(format!("Invalid input JSON: {e}")))
    }
}

/// Coordinates plus display name used for the forecast request, regardless of
/// whether they came from the payload or from geocoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Normalized output object. Every field is always present; data missing from
/// the forecast response serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    pub resolved_location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub current: CurrentConditions,
    pub today: TodayOutlook,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: Option<f64>,
    pub weather_code: Option<i64>,
    pub wind_kmh: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TodayOutlook {
    pub temp_max_c: Option<f64>,
    pub temp_min_c: Option<f64>,
    pub weather_code: Option<i64>,
}
