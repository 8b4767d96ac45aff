//! Line-oriented input: each entered line is typed into the URL field and
//! submitted, like pressing Enter in the form. Slash commands drive the
//! other triggers.

pub const HELP: &str = "Type a URL and press Enter to shorten it.
  /check <text>  validate without submitting
  /copy          copy the short URL
  /visit         open the short URL
  /help          show this help
  /quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Check(String),
    Copy,
    Visit,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "/copy" => Command::Copy,
        "/visit" => Command::Visit,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        _ => match trimmed.strip_prefix("/check") {
            Some(rest) if rest.is_empty() || rest.starts_with(' ') => {
                Command::Check(rest.trim_start().to_string())
            }
            _ => Command::Submit(line.to_string()),
        },
    }
}
