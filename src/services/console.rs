use crate::error::AppResult;

/// Terminal interaction used by the workflows.
pub trait ConsoleService: Send + Sync {
    fn say(&self, text: &str);
    /// Yes/no question; an empty answer means no.
    fn confirm(&self, question: &str) -> AppResult<bool>;
    /// Free-text question; returns the trimmed answer.
    fn ask(&self, question: &str) -> AppResult<String>;
}
