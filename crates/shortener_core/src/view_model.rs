use std::time::Duration;

use crate::Phase;

/// How long the copy trigger shows its confirmation label.
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

/// Semantic tone for the URL input; the presentation layer picks colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputHint {
    #[default]
    Neutral,
    Valid,
    Invalid,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Copy,
    Copied,
}

/// Everything the presentation layer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayHint {
    pub phase: Phase,
    pub input_hint: InputHint,
    pub submit_enabled: bool,
    /// Busy indicator and label swap on the submit trigger.
    pub submit_busy: bool,
    pub error_text: Option<String>,
    pub success_text: Option<String>,
    pub result: Option<ResultView>,
    pub copy_label: CopyLabel,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub short_url: String,
    /// `Original: {url}`.
    pub original_label: String,
}
