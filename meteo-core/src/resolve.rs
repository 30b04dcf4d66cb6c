use crate::client::OpenMeteoClient;
use crate::error::Error;
use crate::model::{ResolvedLocation, WeatherQuery};

/// Turn the input query into coordinates plus a display name.
///
/// Explicit coordinates pass through untouched and never trigger a network
/// request; a bare `location` is resolved through one geocoding lookup.
pub async fn resolve_location(
    client: &OpenMeteoClient,
    query: &WeatherQuery,
) -> Result<ResolvedLocation, Error> {
    if let (Some(latitude), Some(longitude)) = (query.latitude, query.longitude) {
        let name = match query.location.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => coordinate_label(latitude, longitude),
        };
        return Ok(ResolvedLocation {
            latitude,
            longitude,
            name,
        });
    }

    let location = query.location.as_deref().unwrap_or("").trim();
    if location.is_empty() {
        return Err(Error::Input(
            "Input must include `location` or (`latitude`, `longitude`).".to_string(),
        ));
    }

    let search = client.geocode(location).await?;
    let top = search
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| Error::Lookup(location.to_string()))?;

    let country = top
        .country_code
        .filter(|c| !c.is_empty())
        .or_else(|| top.country.filter(|c| !c.is_empty()))
        .unwrap_or_default();
    let name = top.name.unwrap_or_else(|| location.to_string());
    // Join with ", " but drop whichever side is empty.
    let display = match (name.as_str(), country.as_str()) {
        (n, "") => n.to_string(),
        ("", c) => c.to_string(),
        (n, c) => format!("{n}, {c}"),
    };

    Ok(ResolvedLocation {
        latitude: top.latitude,
        longitude: top.longitude,
        name: display,
    })
}

fn coordinate_label(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.4},{longitude:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Passthrough and validation branches never touch the network, so an
    // unroutable endpoint proves no request is attempted.
    fn offline_client() -> OpenMeteoClient {
        OpenMeteoClient::with_endpoints("http://127.0.0.1:1", "http://127.0.0.1:1")
    }

    #[tokio::test]
    async fn coordinates_pass_through_with_formatted_label() {
        let query = WeatherQuery {
            location: None,
            latitude: Some(52.52),
            longitude: Some(13.405),
        };

        let resolved = resolve_location(&offline_client(), &query)
            .await
            .expect("passthrough must succeed");

        assert_eq!(resolved.latitude, 52.52);
        assert_eq!(resolved.longitude, 13.405);
        assert_eq!(resolved.name, "52.5200,13.4050");
    }

    #[tokio::test]
    async fn coordinates_prefer_provided_display_name() {
        let query = WeatherQuery {
            location: Some("Berlin".to_string()),
            latitude: Some(52.52),
            longitude: Some(13.405),
        };

        let resolved = resolve_location(&offline_client(), &query)
            .await
            .expect("passthrough must succeed");

        assert_eq!(resolved.name, "Berlin");
    }

    #[tokio::test]
    async fn empty_display_name_falls_back_to_label() {
        let query = WeatherQuery {
            location: Some(String::new()),
            latitude: Some(-33.8688),
            longitude: Some(151.2093),
        };

        let resolved = resolve_location(&offline_client(), &query)
            .await
            .expect("passthrough must succeed");

        assert_eq!(resolved.name, "-33.8688,151.2093");
    }

    #[tokio::test]
    async fn missing_location_is_input_error() {
        let err = resolve_location(&offline_client(), &WeatherQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Input(_)));
        assert!(err.to_string().contains("`location`"));
    }

    #[tokio::test]
    async fn whitespace_location_is_input_error() {
        let query = WeatherQuery {
            location: Some("   ".to_string()),
            latitude: None,
            longitude: None,
        };

        let err = resolve_location(&offline_client(), &query).await.unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[tokio::test]
    async fn latitude_alone_is_not_enough() {
        // One coordinate without the other falls back to the name branch.
        let query = WeatherQuery {
            location: None,
            latitude: Some(52.52),
            longitude: None,
        };

        let err = resolve_location(&offline_client(), &query).await.unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
