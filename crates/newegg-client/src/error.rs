use thiserror::Error;

/// Errors returned by the Newegg catalog client.
#[derive(Debug, Error)]
pub enum NeweggError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a 4xx status (bad id, malformed query).
    #[error("client error, {status}: {body}")]
    Client { status: u16, body: String },

    /// The catalog answered with a 5xx status (upstream failure).
    #[error("server error, {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
