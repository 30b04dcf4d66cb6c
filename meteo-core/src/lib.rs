//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - The input payload and output summary models
//! - An Open-Meteo client for geocoding and forecast requests
//! - Location resolution and summary formatting
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod error;
pub mod model;
pub mod resolve;
pub mod summary;

pub use client::OpenMeteoClient;
pub use error::Error;
pub use model::{ResolvedLocation, WeatherQuery, WeatherSummary};
pub use resolve::resolve_location;
pub use summary::build_summary;

/// Run the whole pipeline for one query: resolve the location, fetch the
/// forecast, and shape the result into a [`WeatherSummary`].
///
/// At most one geocoding request is made (none when the query carries explicit
/// coordinates), followed by exactly one forecast request.
pub async fn fetch_summary(
    client: &OpenMeteoClient,
    query: &WeatherQuery,
) -> Result<WeatherSummary, Error> {
    let resolved = resolve::resolve_location(client, query).await?;
    let forecast = client.forecast(resolved.latitude, resolved.longitude).await?;
    Ok(summary::build_summary(&forecast, &resolved))
}
