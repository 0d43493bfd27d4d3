use async_trait::async_trait;

use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Summary (title) of the issue with the given id.
    async fn fetch_summary(&self, issue_id: &str) -> AppResult<String>;
}
