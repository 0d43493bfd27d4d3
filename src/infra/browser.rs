use tracing::debug;

use crate::error::AppResult;
use crate::services::BrowserService;

/// Opens URLs with the platform's default browser.
pub struct SystemBrowser;

impl BrowserService for SystemBrowser {
    fn open(&self, url: &str) -> AppResult<()> {
        debug!(url, "opening browser");
        webbrowser::open(url)?;
        Ok(())
    }
}
