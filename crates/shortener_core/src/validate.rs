use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// ASCII word characters only; `\w` in `regex` is Unicode-aware.
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_.-]+\.[A-Za-z]{2,}(/.*)?$").expect("valid url shape regex")
});

/// Result of checking input text against the accepted URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlValidity {
    /// Nothing typed yet. Not an error, but not submittable either.
    Empty,
    Valid,
    Invalid,
}

/// Classify `input` as empty, a well-shaped http(s) URL, or anything else.
pub fn classify_url(input: &str) -> UrlValidity {
    if input.is_empty() {
        UrlValidity::Empty
    } else if URL_SHAPE.is_match(input) {
        UrlValidity::Valid
    } else {
        UrlValidity::Invalid
    }
}

/// True only for non-empty input with an http(s) scheme, a dotted host with
/// a 2+ letter top-level label, and an optional path.
pub fn is_valid_url(input: &str) -> bool {
    classify_url(input) == UrlValidity::Valid
}

/// Parse `candidate` as a link that is safe to hand to a browser: http or
/// https with a host. Anything else (`file:`, bare paths, program names) is
/// refused.
pub fn openable_url(candidate: &str) -> Option<Url> {
    let url = Url::parse(candidate.trim()).ok()?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|host| !host.is_empty()) => Some(url),
        _ => None,
    }
}
