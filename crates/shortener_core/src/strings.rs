//! User-facing text shown by the form.

pub const INVALID_URL: &str = "Please enter a valid URL starting with http:// or https://";
pub const SHORTENED: &str = "URL shortened successfully!";
pub const SHORTEN_FAILED: &str = "Failed to shorten URL. Please try again.";
pub const COPIED: &str = "URL copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy to clipboard. Please copy manually.";

pub const SUBMIT_LABEL: &str = "Shorten URL";
pub const SUBMIT_BUSY_LABEL: &str = "Shortening...";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

pub const RESULT_PLACEHOLDER: &str = "Your shortened URL will appear here";
pub const WELCOME: &str =
    "Paste your long URL above and click 'Shorten URL' to get a clean, shareable link.";

/// Label prefix for the original URL under a result.
pub const ORIGINAL_PREFIX: &str = "Original: ";

/// Link target used by the presentation layer before any result exists.
pub const PLACEHOLDER_HREF: &str = "#";
