use shortener_core::openable_url;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("could not open {url}: {reason}")]
pub struct BrowserError {
    pub url: String,
    pub reason: String,
}

/// Opens URLs in a new browsing context.
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Hands URLs to the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        // The opener also launches files and programs; only web links get through.
        let target = openable_url(url).ok_or_else(|| BrowserError {
            url: url.to_string(),
            reason: "only http and https links can be opened".into(),
        })?;
        open::that_detached(target.as_str()).map_err(|err| BrowserError {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_non_web_targets() {
        for target in ["file:///etc/passwd", "/usr/bin/xterm", "calc.exe", "javascript:alert(1)", ""] {
            let err = SystemBrowser.open(target).unwrap_err();
            assert_eq!(err.url, target);
        }
    }
}
