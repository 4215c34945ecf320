use thiserror::Error;

/// Hard transport failures. A response with a non-2xx status is not an
/// error at this level; only a request that could not be performed is.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("POST to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body: {source}")]
    ReadBodyFailed {
        #[source]
        source: reqwest::Error,
    },
}
