pub mod browser;
pub mod console;
pub mod issue_tracker;
pub mod version_control;

pub use browser::BrowserService;
pub use console::ConsoleService;
pub use issue_tracker::IssueTrackerService;
pub use version_control::{VersionControlExt, VersionControlService};
