use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use shortener_core::{strings, InputHint};
use shortener_engine::{FormView, Slot};

const PULSE_HINT: &str = "(type a URL and press Enter)";

#[derive(Debug, Clone)]
struct SlotState {
    text: String,
    enabled: bool,
    visible: bool,
    hint: InputHint,
}

impl SlotState {
    fn new(visible: bool) -> Self {
        Self {
            text: String::new(),
            enabled: true,
            visible,
            hint: InputHint::Neutral,
        }
    }
}

/// Form rendered as lines of text: a slot is printed when it becomes shown
/// or when its text changes while shown.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
    slots: RefCell<HashMap<Slot, SlotState>>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        let mut slots = HashMap::new();
        for slot in [
            Slot::ErrorBanner,
            Slot::SuccessBanner,
            Slot::ResultPanel,
            Slot::ResultDetails,
            Slot::BusyIndicator,
            Slot::SubmitPulse,
        ] {
            slots.insert(slot, SlotState::new(false));
        }
        Self {
            out: RefCell::new(out),
            slots: RefCell::new(slots),
        }
    }

    /// Print a line that is not tied to any slot.
    pub fn say(&self, line: &str) {
        let _ = writeln!(self.out.borrow_mut(), "{line}");
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn slot(&self, slot: Slot) -> SlotState {
        self.slots
            .borrow()
            .get(&slot)
            .cloned()
            .unwrap_or_else(|| SlotState::new(true))
    }

    /// Applies `f` and reports whether the slot changed.
    fn update_slot(&self, slot: Slot, f: impl FnOnce(&mut SlotState) -> bool) -> bool {
        let mut slots = self.slots.borrow_mut();
        let state = slots.entry(slot).or_insert_with(|| SlotState::new(true));
        f(state)
    }

    fn shown(&self, slot: Slot) -> bool {
        self.slot(slot).visible && parent(slot).is_none_or(|parent| self.shown(parent))
    }

    fn announce(&self, slot: Slot) {
        let children = children(slot);
        if !children.is_empty() {
            for child in children {
                if self.slot(*child).visible {
                    self.announce(*child);
                }
            }
            return;
        }

        let text = self.slot(slot).text;
        let line = match slot {
            Slot::ErrorText if !text.is_empty() => format!("error: {text}"),
            Slot::SuccessText if !text.is_empty() => format!("ok: {text}"),
            Slot::ShortUrlLink if !text.is_empty() => format!("short: {text}"),
            Slot::OriginalUrl | Slot::ResultPlaceholder if !text.is_empty() => text,
            Slot::CopyButton if text == strings::COPIED_LABEL => format!("[{text}]"),
            Slot::BusyIndicator => strings::SUBMIT_BUSY_LABEL.to_string(),
            Slot::SubmitPulse => PULSE_HINT.to_string(),
            _ => return,
        };
        self.say(&line);
    }
}

fn parent(slot: Slot) -> Option<Slot> {
    match slot {
        Slot::ErrorText => Some(Slot::ErrorBanner),
        Slot::SuccessText => Some(Slot::SuccessBanner),
        Slot::ResultPlaceholder | Slot::ResultDetails => Some(Slot::ResultPanel),
        Slot::ShortUrlLink | Slot::OriginalUrl | Slot::CopyButton | Slot::VisitButton => {
            Some(Slot::ResultDetails)
        }
        _ => None,
    }
}

fn children(slot: Slot) -> &'static [Slot] {
    match slot {
        Slot::ErrorBanner => &[Slot::ErrorText],
        Slot::SuccessBanner => &[Slot::SuccessText],
        Slot::ResultPanel => &[Slot::ResultPlaceholder, Slot::ResultDetails],
        Slot::ResultDetails => &[Slot::ShortUrlLink, Slot::OriginalUrl],
        _ => &[],
    }
}

impl<W: Write> FormView for TerminalView<W> {
    fn text(&self, slot: Slot) -> String {
        self.slot(slot).text
    }

    fn set_text(&self, slot: Slot, text: &str) {
        let changed = self.update_slot(slot, |state| {
            let changed = state.text != text;
            state.text = text.to_string();
            changed
        });
        if changed && self.shown(slot) {
            self.announce(slot);
        }
    }

    fn is_enabled(&self, slot: Slot) -> bool {
        self.slot(slot).enabled
    }

    fn set_enabled(&self, slot: Slot, enabled: bool) {
        self.update_slot(slot, |state| {
            let changed = state.enabled != enabled;
            state.enabled = enabled;
            changed
        });
    }

    fn is_visible(&self, slot: Slot) -> bool {
        self.slot(slot).visible
    }

    fn set_visible(&self, slot: Slot, visible: bool) {
        let changed = self.update_slot(slot, |state| {
            let changed = state.visible != visible;
            state.visible = visible;
            changed
        });
        if changed && visible && self.shown(slot) {
            self.announce(slot);
        }
    }

    fn set_hint(&self, slot: Slot, hint: InputHint) {
        self.update_slot(slot, |state| {
            let changed = state.hint != hint;
            state.hint = hint;
            changed
        });
    }
}
