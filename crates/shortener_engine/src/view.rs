//! Presentation seam: named slots the controller reads and writes.

use shortener_core::InputHint;

/// Named controls of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    UrlInput,
    SubmitButton,
    SubmitLabel,
    SubmitIcon,
    BusyIndicator,
    /// Cosmetic attention effect on the submit trigger.
    SubmitPulse,
    ErrorBanner,
    ErrorText,
    SuccessBanner,
    SuccessText,
    /// Outer container of the result area.
    ResultPanel,
    ResultPlaceholder,
    /// Container with the link, original URL and result actions.
    ResultDetails,
    ShortUrlLink,
    OriginalUrl,
    CopyButton,
    VisitButton,
}

/// Read/write access to the presentation layer.
///
/// Methods take `&self`; implementations keep their own interior state.
pub trait FormView {
    fn text(&self, slot: Slot) -> String;
    fn set_text(&self, slot: Slot, text: &str);
    fn is_enabled(&self, slot: Slot) -> bool;
    fn set_enabled(&self, slot: Slot, enabled: bool);
    fn is_visible(&self, slot: Slot) -> bool;
    fn set_visible(&self, slot: Slot, visible: bool);
    /// Semantic tone of an input; colours are up to the implementation.
    fn set_hint(&self, slot: Slot, hint: InputHint);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetText { slot: Slot, text: String },
    SetEnabled { slot: Slot, enabled: bool },
    SetVisible { slot: Slot, visible: bool },
    SetHint { slot: Slot, hint: InputHint },
}
