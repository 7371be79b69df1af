use thiserror::Error;

/// Failure of a single HTTP exchange with the registrar or the IP echo service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("login response did not set the session cookie (status {0})")]
    MissingSessionCookie(reqwest::StatusCode),

    #[error("unsuccessful response: {0}")]
    Envelope(String),
}

/// Everything the update workflow can fail with. The process boundary turns
/// any of these into a one-line message and a non-zero exit code.
#[derive(Debug, Error)]
pub enum HoverError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error(transparent)]
    ApiRequestFailed(#[from] ApiError),

    #[error("No DNS record found for {0}")]
    RecordNotFound(String),

    #[error("Update rejected: {0}")]
    UpdateRejected(String),

    #[error("Unable to determine public IP")]
    PublicIpUnavailable(#[source] ApiError),
}
