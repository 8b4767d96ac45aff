use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use shortener_core::{update, DisplayHint, Effect, FormState, Msg, RequestId};
use shortener_logging::{shortener_debug, shortener_info, shortener_warn};

use crate::render::{apply, render};
use crate::{Browser, Clipboard, FormView, Shortener, Slot};

/// Mediates between user input, the shortening call and the presentation.
///
/// All methods take `&self` so an adapter can run several operations
/// cooperatively on one thread. State is never borrowed across an await:
/// overlapping submits both complete, and the response that arrives last
/// is what stays on screen.
pub struct ViewStateController {
    state: RefCell<FormState>,
    view: Rc<dyn FormView>,
    shortener: Arc<dyn Shortener>,
    clipboard: Arc<dyn Clipboard>,
    browser: Arc<dyn Browser>,
}

impl ViewStateController {
    pub fn new(
        view: Rc<dyn FormView>,
        shortener: Arc<dyn Shortener>,
        clipboard: Arc<dyn Clipboard>,
        browser: Arc<dyn Browser>,
    ) -> Self {
        Self {
            state: RefCell::new(FormState::new()),
            view,
            shortener,
            clipboard,
            browser,
        }
    }

    /// Draw the initial idle form.
    pub fn render_initial(&self) -> DisplayHint {
        let hint = self.state.borrow().view();
        apply(self.view.as_ref(), render(&hint));
        hint
    }

    /// Current display hint without changing anything.
    pub fn display(&self) -> DisplayHint {
        self.state.borrow().view()
    }

    /// Copy of the current form state.
    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn on_input_changed(&self, text: impl Into<String>) -> DisplayHint {
        let (hint, effects) = self.dispatch(Msg::InputChanged(text.into()));
        self.run_immediate(effects);
        hint
    }

    /// Validate, call the endpoint, and show the outcome.
    pub async fn on_submit(&self) -> DisplayHint {
        let (hint, effects) = self.dispatch(Msg::SubmitClicked);
        self.settle(hint, effects).await
    }

    /// Copy the current short URL; a no-op when there is no result.
    pub async fn on_copy_requested(&self) -> DisplayHint {
        let (hint, effects) = self.dispatch(Msg::CopyClicked);
        self.settle(hint, effects).await
    }

    pub fn on_visit_requested(&self) {
        let (_hint, effects) = self.dispatch(Msg::VisitClicked);
        self.run_immediate(effects);
    }

    /// Expire transient confirmations. Renders only when something changed.
    pub fn on_tick(&self, now: Instant) -> DisplayHint {
        let (hint, effects) = self.dispatch(Msg::Tick(now));
        self.run_immediate(effects);
        hint
    }

    fn dispatch(&self, msg: Msg) -> (DisplayHint, Vec<Effect>) {
        let (hint, effects, was_dirty) = {
            let mut guard = self.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let hint = state.view();
            let was_dirty = state.consume_dirty();
            *guard = state;
            (hint, effects, was_dirty)
        };

        if was_dirty {
            apply(self.view.as_ref(), render(&hint));
        }
        (hint, effects)
    }

    /// Run effects to completion, feeding each outcome back into the state.
    async fn settle(&self, mut hint: DisplayHint, effects: Vec<Effect>) -> DisplayHint {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            let msg = match effect {
                Effect::Shorten {
                    request_id,
                    long_url,
                } => self.shorten(request_id, &long_url).await,
                Effect::WriteClipboard { text } => self.copy(&text).await,
                immediate => {
                    self.perform(immediate);
                    continue;
                }
            };
            let (next, follow_up) = self.dispatch(msg);
            hint = next;
            queue.extend(follow_up);
        }
        hint
    }

    fn run_immediate(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(&self, effect: Effect) {
        match effect {
            Effect::ClearInput => self.view.set_text(Slot::UrlInput, ""),
            Effect::OpenUrl { url } => {
                shortener_info!("Opening {}", url);
                if let Err(err) = self.browser.open(&url) {
                    shortener_warn!("{}", err);
                }
            }
            Effect::Shorten { request_id, .. } => {
                shortener_warn!("Shorten request {} reached a synchronous path", request_id);
            }
            Effect::WriteClipboard { .. } => {
                shortener_warn!("Clipboard write reached a synchronous path");
            }
        }
    }

    async fn shorten(&self, request_id: RequestId, long_url: &str) -> Msg {
        shortener_info!(
            "Shorten request_id={} url_len={}",
            request_id,
            long_url.len()
        );
        match self.shortener.shorten(long_url).await {
            Ok(short_url) => {
                shortener_debug!("Request {} resolved to {}", request_id, short_url);
                Msg::ShortenSucceeded {
                    request_id,
                    short_url,
                }
            }
            Err(err) => {
                shortener_warn!("Request {} failed: {}", request_id, err);
                Msg::ShortenFailed {
                    request_id,
                    failure: err.to_failure(),
                }
            }
        }
    }

    async fn copy(&self, text: &str) -> Msg {
        match self.clipboard.write_text(text).await {
            Ok(()) => Msg::CopySucceeded { at: Instant::now() },
            Err(err) => {
                shortener_warn!("Failed to copy: {}", err);
                Msg::CopyFailed
            }
        }
    }
}
