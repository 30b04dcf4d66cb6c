use crate::client::ForecastResponse;
use crate::model::{CurrentConditions, ResolvedLocation, TodayOutlook, WeatherSummary};

/// Shape a forecast response into the fixed output object.
///
/// A missing `current` block nulls its three sub-fields; a missing `daily`
/// array nulls the corresponding `today` field. Only index 0 of each daily
/// array is consumed (`forecast_days=1`).
pub fn build_summary(forecast: &ForecastResponse, resolved: &ResolvedLocation) -> WeatherSummary {
    let current = forecast.current.as_ref();
    let daily = forecast.daily.as_ref();

    WeatherSummary {
        resolved_location: resolved.name.clone(),
        latitude: resolved.latitude,
        longitude: resolved.longitude,
        current: CurrentConditions {
            temperature_c: current.and_then(|c| c.temperature),
            weather_code: current.and_then(|c| c.weather_code),
            wind_kmh: current.and_then(|c| c.wind_speed),
        },
        today: TodayOutlook {
            temp_max_c: first_value(daily.and_then(|d| d.temperature_max.as_deref())),
            temp_min_c: first_value(daily.and_then(|d| d.temperature_min.as_deref())),
            weather_code: first_value(daily.and_then(|d| d.weather_code.as_deref())),
        },
    }
}

fn first_value<T: Copy>(values: Option<&[Option<T>]>) -> Option<T> {
    values.and_then(|v| v.first()).copied().flatten()
}
