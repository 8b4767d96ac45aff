//! Shortener engine: endpoint client, host capabilities and the view-state controller.
mod api;
mod browser;
mod clipboard;
mod controller;
mod render;
mod types;
mod view;

pub use api::{ReqwestShortener, Shortener, ShortenerSettings, DEFAULT_ENDPOINT};
pub use browser::{Browser, BrowserError, SystemBrowser};
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use controller::ViewStateController;
pub use render::{apply, render};
pub use types::{FailureKind, ShortenError};
pub use view::{FormView, Slot, ViewCommand};
