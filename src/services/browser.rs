use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait BrowserService: Send + Sync {
    fn open(&self, url: &str) -> AppResult<()>;
}
