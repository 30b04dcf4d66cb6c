use thiserror::Error;

/// Failures surfaced by the pipeline.
///
/// Every variant carries a human-readable message; the binary collapses all of
/// them into the `{"error": "..."}` output object with exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input JSON, or a payload missing both a location name and
    /// explicit coordinates.
    #[error("{0}")]
    Input(String),

    /// The geocoding lookup returned no match for the queried name.
    #[error("No geocoding result for location: {0}")]
    Lookup(String),

    /// Connection failure, timeout, or non-success HTTP status.
    #[error("Request to {url} failed: {detail}")]
    Network { url: String, detail: String },

    /// The endpoint answered with a body that is not valid JSON for the
    /// expected shape.
    #[error("Failed to parse response from {url}: {detail}")]
    Response { url: String, detail: String },
}
