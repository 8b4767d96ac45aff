//! Presentation-only effects scheduled at startup. They write to the view
//! and never see the form state.

use std::rc::Rc;
use std::time::Duration;

use shortener_core::strings;
use shortener_engine::{FormView, Slot};
use tokio::task::JoinHandle;

pub const WELCOME_DELAY: Duration = Duration::from_secs(1);
pub const PULSE_DELAY: Duration = Duration::from_secs(1);

/// Show the welcome text after [`WELCOME_DELAY`], then start the submit
/// pulse [`PULSE_DELAY`] later. Must run inside a `LocalSet`.
pub fn schedule(view: Rc<dyn FormView>) -> JoinHandle<()> {
    tokio::task::spawn_local(async move {
        tokio::time::sleep(WELCOME_DELAY).await;
        view.set_text(Slot::ResultPlaceholder, strings::WELCOME);
        view.set_visible(Slot::ResultPanel, true);

        tokio::time::sleep(PULSE_DELAY).await;
        view.set_visible(Slot::SubmitPulse, true);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::terminal::TerminalView;

    #[tokio::test(start_paused = true)]
    async fn welcome_then_pulse() {
        let view = Rc::new(TerminalView::new(Vec::new()));
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async {
                let handle = schedule(view.clone());

                tokio::time::sleep(Duration::from_millis(1500)).await;
                assert!(view.is_visible(Slot::ResultPanel));
                assert_eq!(view.text(Slot::ResultPlaceholder), strings::WELCOME);
                assert!(!view.is_visible(Slot::SubmitPulse));

                handle.await.unwrap();
                assert!(view.is_visible(Slot::SubmitPulse));
            })
            .await;
    }
}
