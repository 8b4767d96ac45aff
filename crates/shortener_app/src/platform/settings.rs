use clap::Parser;
use shortener_engine::{ShortenerSettings, DEFAULT_ENDPOINT};

use super::logging::LogDestination;

#[derive(Debug, Clone, Parser)]
#[command(name = "shortener", version, about = "Shorten long URLs from the terminal")]
pub struct Settings {
    /// Base URL of the shortening endpoint.
    #[arg(long, env = "SHORTENER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Where log output is written.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

impl Settings {
    pub fn shortener(&self) -> ShortenerSettings {
        ShortenerSettings {
            endpoint: self.endpoint.clone(),
            ..ShortenerSettings::default()
        }
    }
}
