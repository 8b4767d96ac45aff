#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use shortener_core::InputHint;
use shortener_engine::{
    Browser, BrowserError, Clipboard, ClipboardError, FailureKind, FormView, ShortenError,
    Shortener, Slot,
};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct SlotState {
    pub text: String,
    pub enabled: bool,
    pub visible: bool,
    pub hint: Option<InputHint>,
}

impl Default for SlotState {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
            visible: true,
            hint: None,
        }
    }
}

/// In-memory presentation layer.
#[derive(Default)]
pub struct FakeView {
    slots: RefCell<BTreeMap<Slot, SlotState>>,
}

impl FakeView {
    pub fn slot(&self, slot: Slot) -> SlotState {
        self.slots.borrow().get(&slot).cloned().unwrap_or_default()
    }

    fn with_slot(&self, slot: Slot, f: impl FnOnce(&mut SlotState)) {
        f(self.slots.borrow_mut().entry(slot).or_default());
    }
}

impl FormView for FakeView {
    fn text(&self, slot: Slot) -> String {
        self.slot(slot).text
    }

    fn set_text(&self, slot: Slot, text: &str) {
        self.with_slot(slot, |state| state.text = text.to_string());
    }

    fn is_enabled(&self, slot: Slot) -> bool {
        self.slot(slot).enabled
    }

    fn set_enabled(&self, slot: Slot, enabled: bool) {
        self.with_slot(slot, |state| state.enabled = enabled);
    }

    fn is_visible(&self, slot: Slot) -> bool {
        self.slot(slot).visible
    }

    fn set_visible(&self, slot: Slot, visible: bool) {
        self.with_slot(slot, |state| state.visible = visible);
    }

    fn set_hint(&self, slot: Slot, hint: InputHint) {
        self.with_slot(slot, |state| state.hint = Some(hint));
    }
}

/// Shortener whose responses are released by the test, keyed by long URL.
#[derive(Default)]
pub struct GatedShortener {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<String, ShortenError>>>>,
}

impl GatedShortener {
    pub fn gate(&self, long_url: &str) -> oneshot::Sender<Result<String, ShortenError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(long_url.to_string(), rx);
        tx
    }
}

#[async_trait::async_trait]
impl Shortener for GatedShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        let gate = self.gates.lock().unwrap().remove(long_url);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(ShortenError {
                    kind: FailureKind::Network,
                    message: "gate dropped".into(),
                })
            }),
            None => panic!("no gate for {long_url}"),
        }
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    pub fail: bool,
    pub written: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Rejected("permission denied".into()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingBrowser {
    pub fail: bool,
    pub opened: Mutex<Vec<String>>,
}

impl RecordingBrowser {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(BrowserError {
                url: url.to_string(),
                reason: "popup blocked".into(),
            });
        }
        Ok(())
    }
}
