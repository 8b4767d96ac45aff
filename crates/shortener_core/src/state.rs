use std::collections::BTreeMap;
use std::time::Instant;

use crate::view_model::{CopyLabel, DisplayHint, InputHint, ResultView, COPY_CONFIRMATION};
use crate::{classify_url, openable_url, strings, UrlValidity};

/// Identifier handed to each outbound shorten request, in issue order.
pub type RequestId = u64;

/// Mutually exclusive display mode of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Invalid,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub original_url: String,
    pub short_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    raw_input: String,
    phase: Phase,
    last_result: Option<ShortenResult>,
    /// Result cleared by the latest submit; shown again if that submit fails.
    superseded_result: Option<ShortenResult>,
    last_error_message: Option<String>,
    success_message: Option<String>,
    copy_confirmed_at: Option<Instant>,
    /// Requests issued but not yet resolved, with the URL each one carries.
    pending: BTreeMap<RequestId, String>,
    next_request_id: RequestId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&ShortenResult> {
        self.last_result.as_ref()
    }

    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Short URL the visit trigger may open, if any. Only http(s) links
    /// with a host qualify.
    pub fn visit_target(&self) -> Option<&str> {
        self.last_result
            .as_ref()
            .map(|result| result.short_url.as_str())
            .filter(|url| *url != strings::PLACEHOLDER_HREF && openable_url(url).is_some())
    }

    pub fn view(&self) -> DisplayHint {
        let loading = self.phase == Phase::Loading;
        let input_hint = match self.phase {
            Phase::Error => InputHint::Error,
            Phase::Invalid => InputHint::Invalid,
            _ if self.success_message.is_some() => InputHint::Success,
            _ if classify_url(&self.raw_input) == UrlValidity::Valid => InputHint::Valid,
            _ => InputHint::Neutral,
        };
        let error_text = match self.phase {
            Phase::Error => self.last_error_message.clone(),
            _ => None,
        };
        let copy_label = if self.copy_confirmed_at.is_some() {
            CopyLabel::Copied
        } else {
            CopyLabel::Copy
        };

        DisplayHint {
            phase: self.phase,
            input_hint,
            submit_enabled: !loading,
            submit_busy: loading,
            error_text,
            success_text: self.success_message.clone(),
            result: self.last_result.as_ref().map(|result| ResultView {
                short_url: result.short_url.clone(),
                original_label: format!("{}{}", strings::ORIGINAL_PREFIX, result.original_url),
            }),
            copy_label,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.raw_input = text;
        self.last_error_message = None;
        self.success_message = None;
        // Keystrokes never end an in-flight request; only its response does.
        if self.phase != Phase::Loading {
            self.phase = match classify_url(&self.raw_input) {
                UrlValidity::Invalid => Phase::Invalid,
                UrlValidity::Empty | UrlValidity::Valid => Phase::Idle,
            };
        }
        self.dirty = true;
    }

    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        self.phase = Phase::Error;
        self.last_error_message = Some(message.into());
        self.success_message = None;
        self.dirty = true;
    }

    pub(crate) fn begin_request(&mut self, long_url: String) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending.insert(request_id, long_url);

        self.phase = Phase::Loading;
        self.last_error_message = None;
        self.success_message = None;
        self.copy_confirmed_at = None;
        if let Some(previous) = self.last_result.take() {
            self.superseded_result = Some(previous);
        }
        self.dirty = true;
        request_id
    }

    /// Applies a successful response. Returns false for unknown request ids.
    pub(crate) fn apply_success(&mut self, request_id: RequestId, short_url: String) -> bool {
        let Some(original_url) = self.pending.remove(&request_id) else {
            return false;
        };
        self.phase = Phase::Success;
        self.last_result = Some(ShortenResult {
            original_url,
            short_url,
        });
        self.superseded_result = None;
        self.last_error_message = None;
        self.success_message = Some(strings::SHORTENED.to_string());
        self.raw_input.clear();
        self.dirty = true;
        true
    }

    /// Applies a failed response. Returns false for unknown request ids.
    pub(crate) fn apply_failure(&mut self, request_id: RequestId, message: String) -> bool {
        if self.pending.remove(&request_id).is_none() {
            return false;
        }
        if self.last_result.is_none() {
            self.last_result = self.superseded_result.take();
        }
        self.show_error(message);
        true
    }

    pub(crate) fn confirm_copy(&mut self, at: Instant) {
        self.copy_confirmed_at = Some(at);
        self.success_message = Some(strings::COPIED.to_string());
        if self.phase != Phase::Loading && self.last_result.is_some() {
            self.phase = Phase::Success;
            self.last_error_message = None;
        }
        self.dirty = true;
    }

    pub(crate) fn expire_copy_confirmation(&mut self, now: Instant) {
        let expired = self
            .copy_confirmed_at
            .is_some_and(|at| now.saturating_duration_since(at) >= COPY_CONFIRMATION);
        if expired {
            self.copy_confirmed_at = None;
            self.dirty = true;
        }
    }
}
