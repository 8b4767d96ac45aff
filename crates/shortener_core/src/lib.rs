//! Shortener core: pure form state machine and display hints.
mod effect;
mod msg;
mod state;
pub mod strings;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, ShortenFailure};
pub use state::{FormState, Phase, RequestId, ShortenResult};
pub use update::update;
pub use validate::{classify_url, is_valid_url, openable_url, UrlValidity};
pub use view_model::{CopyLabel, DisplayHint, InputHint, ResultView, COPY_CONFIRMATION};
