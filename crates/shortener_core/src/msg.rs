use std::time::Instant;

use crate::strings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input field.
    InputChanged(String),
    /// User pressed the submit trigger (or Enter in the input).
    SubmitClicked,
    /// The endpoint answered with a short URL.
    ShortenSucceeded {
        request_id: crate::RequestId,
        short_url: String,
    },
    /// The shorten call failed at the transport, status or payload level.
    ShortenFailed {
        request_id: crate::RequestId,
        failure: ShortenFailure,
    },
    /// User pressed the copy trigger.
    CopyClicked,
    CopySucceeded { at: Instant },
    CopyFailed,
    /// User pressed the visit trigger.
    VisitClicked,
    /// Periodic tick used to expire transient confirmations.
    Tick(Instant),
}

/// Why a shorten call failed, as far as the form cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenFailure {
    /// The request never produced a response.
    Transport,
    /// The endpoint answered with a non-success status.
    Api { status: u16, body: String },
    /// Success status, but no usable `short_url` in the payload.
    MalformedResponse,
}

impl ShortenFailure {
    /// Text for the error banner. A non-empty API body is shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ShortenFailure::Api { body, .. } if !body.trim().is_empty() => body.clone(),
            ShortenFailure::Api { .. }
            | ShortenFailure::Transport
            | ShortenFailure::MalformedResponse => strings::SHORTEN_FAILED.to_string(),
        }
    }
}
