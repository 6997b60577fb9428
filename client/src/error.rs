use thiserror::Error;

/// Errors surfaced by the protocol client. Every failure is reported to
/// the caller; nothing is swallowed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body retrieved.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the JSON shape the contract promises.
    #[error("{endpoint} returned a malformed response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
