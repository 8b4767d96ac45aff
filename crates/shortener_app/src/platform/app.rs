use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use shortener_core::DisplayHint;
use shortener_engine::{
    FormView, ReqwestShortener, Slot, SystemBrowser, SystemClipboard, ViewStateController,
};
use shortener_logging::shortener_info;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::cosmetic;
use super::input::{parse_command, Command, HELP};
use super::logging;
use super::settings::Settings;
use super::terminal::TerminalView;

/// Interval of the tick that expires transient confirmations.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub fn run_app() -> anyhow::Result<()> {
    let settings = Settings::parse();
    logging::initialize(settings.log);
    shortener_info!("Starting with endpoint {}", settings.endpoint);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, run(settings))
}

async fn run(settings: Settings) -> anyhow::Result<()> {
    let shortener = ReqwestShortener::new(settings.shortener())?;
    let view = Rc::new(TerminalView::new(std::io::stdout()));
    let controller = Rc::new(ViewStateController::new(
        view.clone(),
        Arc::new(shortener),
        Arc::new(SystemClipboard::new()),
        Arc::new(SystemBrowser),
    ));

    controller.render_initial();
    view.say(HELP);
    let _cosmetics = cosmetic::schedule(view.clone());
    spawn_ticker(controller.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => view.say(HELP),
            Command::Check(text) => {
                let hint = enter_input(view.as_ref(), &controller, text);
                view.say(&format!("input: {:?}", hint.input_hint));
            }
            Command::Submit(text) => {
                if !view.is_enabled(Slot::SubmitButton) {
                    view.say("Still shortening the previous URL.");
                    continue;
                }
                enter_input(view.as_ref(), &controller, text);
                let controller = controller.clone();
                tokio::task::spawn_local(async move {
                    controller.on_submit().await;
                });
            }
            Command::Copy => {
                let controller = controller.clone();
                tokio::task::spawn_local(async move {
                    controller.on_copy_requested().await;
                });
            }
            Command::Visit => controller.on_visit_requested(),
        }
    }

    shortener_info!("Input closed, exiting");
    Ok(())
}

/// Put typed text into the input slot, as a keystroke would, and let the
/// controller classify it.
fn enter_input(
    view: &dyn FormView,
    controller: &ViewStateController,
    text: String,
) -> DisplayHint {
    view.set_text(Slot::UrlInput, &text);
    controller.on_input_changed(text)
}

fn spawn_ticker(controller: Rc<ViewStateController>) {
    tokio::task::spawn_local(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            let now = interval.tick().await;
            controller.on_tick(now.into_std());
        }
    });
}
