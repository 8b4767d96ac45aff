use std::fmt;

use shortener_core::ShortenFailure;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ShortenError {
    pub kind: FailureKind,
    /// Human-readable detail. For `HttpStatus` this is the response body.
    pub message: String,
}

impl ShortenError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Collapse transport detail into what the form displays.
    pub fn to_failure(&self) -> ShortenFailure {
        match self.kind {
            FailureKind::HttpStatus(status) => ShortenFailure::Api {
                status,
                body: self.message.clone(),
            },
            FailureKind::MalformedResponse => ShortenFailure::MalformedResponse,
            FailureKind::InvalidEndpoint | FailureKind::Timeout | FailureKind::Network => {
                ShortenFailure::Transport
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Timeout,
    Network,
    HttpStatus(u16),
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
