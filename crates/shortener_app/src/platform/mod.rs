mod app;
mod cosmetic;
mod input;
mod logging;
mod settings;
mod terminal;

pub use app::run_app;
