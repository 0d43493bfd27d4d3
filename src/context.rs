use std::sync::Arc;

use crate::config::AppConfig;
use crate::messages::{Message, Palette};
use crate::services::{BrowserService, ConsoleService, IssueTrackerService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub console: Arc<dyn ConsoleService>,
    pub browser: Arc<dyn BrowserService>,
    pub palette: Palette,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        issue_tracker: Arc<dyn IssueTrackerService>,
        console: Arc<dyn ConsoleService>,
        browser: Arc<dyn BrowserService>,
        palette: Palette,
    ) -> Self {
        Self {
            config,
            version_control,
            issue_tracker,
            console,
            browser,
            palette,
        }
    }

    pub fn render(&self, message: Message<'_>) -> String {
        message.render(&self.palette)
    }
}
