use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::Error;

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";
const FORECAST_BASE: &str = "https://api.open-meteo.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the two Open-Meteo endpoints (geocoding search and
/// forecast). No API key is required.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    geocoding_base: String,
    forecast_base: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_endpoints(GEOCODING_BASE, FORECAST_BASE)
    }

    /// Client with overridden base URLs. Tests point both at a mock server.
    pub fn with_endpoints(geocoding_base: &str, forecast_base: &str) -> Self {
        Self {
            http: Client::new(),
            geocoding_base: geocoding_base.trim_end_matches('/').to_string(),
            forecast_base: forecast_base.trim_end_matches('/').to_string(),
        }
    }

    /// Look up a place name, returning at most one match.
    pub async fn geocode(&self, name: &str) -> Result<GeoSearchResponse, Error> {
        let url = format!("{}/search", self.geocoding_base);
        self.get_json(
            &url,
            &[
                ("name", name.to_string()),
                ("count", "1".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ],
        )
        .await
    }

    /// Fetch current conditions plus today's daily aggregates for a point.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, Error> {
        let url = format!("{}/forecast", self.forecast_base);
        self.get_json(
            &url,
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "current",
                    "temperature_2m,weather_code,wind_speed_10m".to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,weather_code".to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_days", "1".to_string()),
            ],
        )
        .await
    }

    /// Shared GET-and-parse primitive. Non-success statuses are reported as
    /// network errors with a truncated body excerpt; malformed bodies as
    /// response errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url}");

        let res = self
            .http
            .get(url)
            .query(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| Error::Network {
                url: url.to_string(),
                detail: e.to_string(),
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| Error::Network {
            url: url.to_string(),
            detail: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(Error::Network {
                url: url.to_string(),
                detail: format!("status {}: {}", status, truncate_body(&body)),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Response {
            url: url.to_string(),
            detail: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GeoSearchResponse {
    pub results: Option<Vec<GeoMatch>>,
}

#[derive(Debug, Deserialize)]
pub struct GeoMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentBlock>,
    pub daily: Option<DailyBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentBlock {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    pub weather_code: Option<i64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DailyBlock {
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<i64>>>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary so multibyte bodies cannot panic.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
