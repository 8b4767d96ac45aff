use crate::RequestId;

/// Side effects requested by [`crate::update`]; the controller executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one outbound shorten request.
    Shorten { request_id: RequestId, long_url: String },
    /// Empty the URL input field.
    ClearInput,
    WriteClipboard { text: String },
    /// Open a URL in a new browsing context.
    OpenUrl { url: String },
}
