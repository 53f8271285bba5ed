/// All errors that can occur while fetching or rendering badges.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The badge template could not be rendered.
    #[error("failed to render badge template: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Serializing the badge url export failed.
    #[error("failed to serialize badge urls: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BadgeError>;
