use std::io;

use thiserror::Error;

use crate::domain::command::CommandFailure;

/// Exit code used when the user declines a confirmation prompt.
pub const EXIT_ABORTED: i32 = 130;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("Please make sure you're in the parent directory for this repository.")]
    NotARepository,
    #[error(
        "This script relies on GitHub's 'hub' command line tool.\nVisit https://github.com/github/hub to install it"
    )]
    PullRequestToolMissing,
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error(
        "The {branch} branch does not contain an issue ID and title.\nPlease use a different branch or provide the --message option to provide a custom message for this commit."
    )]
    MissingIssueId { branch: String },
    #[error(
        "could not find a base branch (tried dev, develop, development, master); pass --base-branch"
    )]
    NoBaseBranch,
    #[error(transparent)]
    CommandFailed(#[from] CommandFailure),
    #[error("Aborted!")]
    Aborted,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CommandFailed(failure) if failure.code != 0 => failure.code,
            AppError::Aborted => EXIT_ABORTED,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
