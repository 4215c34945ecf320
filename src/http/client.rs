use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};

use crate::error::HttpError;

use super::encode::form_body;

/// Content type for records produced to the Kafka REST proxy.
const KAFKA_JSON_CONTENT_TYPE: &str = "application/vnd.kafka.json.v2+json";
/// Accept header for Kafka REST proxy responses.
const KAFKA_ACCEPT: &str = "application/vnd.kafka.v2+json";

/// One-shot HTTP POST client.
///
/// Each instance owns a freshly built transport session and performs exactly
/// one request before being dropped: no connection reuse, no state shared
/// across requests. All per-request resources are released on every exit
/// path by ordinary ownership.
pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    /// Build a fresh client for a single request.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }

    /// POST `pairs` as a URL-form-encoded body and return the response text.
    ///
    /// Pair order is preserved on the wire; each field and value is
    /// percent-encoded independently. The HTTP status code is ignored — only
    /// a hard transport failure is an error, and a missing body decodes to
    /// the empty string.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be performed or the response
    /// body cannot be read.
    pub async fn send_form(&self, url: &Url, pairs: &[(&str, &str)]) -> Result<String, HttpError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_body(pairs))
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed {
                url: url.as_str().to_owned(),
                source: err,
            })?;
        read_body(response).await
    }

    /// POST `body` verbatim with the Kafka REST proxy content headers and an
    /// explicit content length. The caller guarantees the body is the exact
    /// byte sequence to put on the wire; nothing is escaped here.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be performed or the response
    /// body cannot be read.
    pub async fn send_json(&self, url: &Url, body: Vec<u8>) -> Result<String, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(KAFKA_JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(KAFKA_ACCEPT));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

        let response = self
            .client
            .post(url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed {
                url: url.as_str().to_owned(),
                source: err,
            })?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<String, HttpError> {
    response
        .text()
        .await
        .map_err(|err| HttpError::ReadBodyFailed { source: err })
}

/// Validate the endpoint URL once, before the first request is issued.
///
/// # Errors
///
/// Returns an error when the URL does not parse.
pub fn parse_endpoint(url: &str) -> Result<Url, HttpError> {
    Url::parse(url).map_err(|err| HttpError::InvalidUrl {
        url: url.to_owned(),
        source: err,
    })
}
