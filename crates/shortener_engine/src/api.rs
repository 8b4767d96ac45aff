use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use shortener_logging::{shortener_debug, shortener_warn};
use url::Url;

use crate::{FailureKind, ShortenError};

/// Deployment the form talks to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://url-shortener-80dc.onrender.com";

const LONG_URL_PARAM: &str = "long_url";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as browsers'
/// `encodeURIComponent` does. Spaces become `%20`, never `+`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Base URL of the shortening endpoint.
    pub endpoint: String,
    /// Client-side request timeout. `None` leaves timing to the network stack.
    pub request_timeout: Option<Duration>,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
        }
    }
}

/// The opaque shortening service: long URL in, short URL or error out.
#[async_trait::async_trait]
pub trait Shortener: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<String, ShortenError>;
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    short_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestShortener {
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestShortener {
    pub fn new(settings: ShortenerSettings) -> Result<Self, ShortenError> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|err| ShortenError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ShortenError::new(
                FailureKind::InvalidEndpoint,
                format!("unsupported scheme {}", endpoint.scheme()),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ShortenError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { endpoint, client })
    }

    /// `{endpoint}?long_url={percent-encoded long_url}`, keeping any query
    /// the endpoint already carries.
    pub fn request_url(&self, long_url: &str) -> Url {
        let pair = format!(
            "{LONG_URL_PARAM}={}",
            utf8_percent_encode(long_url, URI_COMPONENT)
        );
        let query = match self.endpoint.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{pair}"),
            _ => pair,
        };
        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));
        url
    }
}

#[async_trait::async_trait]
impl Shortener for ReqwestShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        let url = self.request_url(long_url);
        shortener_debug!("POST {} url_len={}", self.endpoint, long_url.len());

        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            shortener_warn!("Shortening endpoint answered {}", status);
            return Err(ShortenError::new(
                FailureKind::HttpStatus(status.as_u16()),
                body,
            ));
        }

        parse_short_url(&body)
    }
}

fn parse_short_url(body: &str) -> Result<String, ShortenError> {
    let payload: ShortenResponse = serde_json::from_str(body)
        .map_err(|err| ShortenError::new(FailureKind::MalformedResponse, err.to_string()))?;
    match payload.short_url {
        Some(short_url) if !short_url.trim().is_empty() => Ok(short_url),
        _ => Err(ShortenError::new(
            FailureKind::MalformedResponse,
            "payload has no short_url",
        )),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        return ShortenError::new(FailureKind::Timeout, err.to_string());
    }
    ShortenError::new(FailureKind::Network, err.to_string())
}
