use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::branch::{BranchName, DEFAULT_BASE_BRANCHES};
use crate::domain::command::{CommandResult, GitCommand, StepPolicy};
use crate::error::{AppError, AppResult};

/// Git configuration key holding the user's GitHub handle.
pub const GITHUB_USER_KEY: &str = "github.user";

#[async_trait]
pub trait VersionControlService: Send + Sync {
    fn is_repository(&self) -> bool;
    fn pull_request_tool_available(&self) -> bool;
    async fn run(&self, command: &GitCommand) -> CommandResult;
}

/// Repository operations composed from [`VersionControlService::run`].
#[async_trait]
pub trait VersionControlExt: VersionControlService {
    /// Runs one step. A failed best-effort step yields `Ok(None)`.
    async fn execute(&self, command: GitCommand, policy: StepPolicy) -> AppResult<Option<String>> {
        debug!(%command, ?policy, "running");
        match self.run(&command).await {
            Ok(output) => Ok(Some(output)),
            Err(failure) => match policy {
                StepPolicy::MustSucceed => Err(AppError::CommandFailed(failure)),
                StepPolicy::BestEffort => {
                    warn!("{failure}");
                    Ok(None)
                }
            },
        }
    }

    async fn current_branch(&self) -> AppResult<BranchName> {
        let output = self
            .execute(GitCommand::CurrentBranch, StepPolicy::MustSucceed)
            .await?
            .unwrap_or_default();
        Ok(BranchName(output.trim().to_string()))
    }

    async fn branch_exists(&self, name: &str) -> bool {
        self.run(&GitCommand::VerifyBranch {
            name: name.to_string(),
        })
        .await
        .is_ok()
    }

    /// First existing branch of [`DEFAULT_BASE_BRANCHES`].
    async fn default_base_branch(&self) -> Option<String> {
        for candidate in DEFAULT_BASE_BRANCHES {
            if self.branch_exists(candidate).await {
                return Some(candidate.to_string());
            }
        }
        None
    }

    async fn user_handle(&self) -> Option<String> {
        self.run(&GitCommand::ConfigGet {
            key: GITHUB_USER_KEY.to_string(),
        })
        .await
        .ok()
        .map(|output| output.trim().to_string())
        .filter(|handle| !handle.is_empty())
    }

    /// Checks out `base`, pulls, then creates and checks out `new_branch`.
    /// Steps that already ran are not undone when a later one fails.
    async fn create_branch(&self, base: &str, new_branch: &BranchName) -> AppResult<()> {
        let steps = [
            GitCommand::Checkout {
                branch: base.to_string(),
            },
            GitCommand::Pull,
            GitCommand::CheckoutNew {
                branch: new_branch.as_str().to_string(),
            },
        ];
        for step in steps {
            self.execute(step, StepPolicy::MustSucceed).await?;
        }
        Ok(())
    }

    /// Stages everything and commits. Nothing to stage or commit is fine.
    async fn commit_all(&self, message: &str) -> AppResult<()> {
        self.execute(GitCommand::AddAll, StepPolicy::BestEffort)
            .await?;
        self.execute(
            GitCommand::Commit {
                message: message.to_string(),
            },
            StepPolicy::BestEffort,
        )
        .await?;
        Ok(())
    }

    /// Pushes to the upstream, falling back to setting `origin/<branch>` as
    /// upstream. Returns whether either attempt succeeded.
    async fn push(&self, branch: &str, force: bool) -> AppResult<bool> {
        if self
            .execute(GitCommand::Push { force }, StepPolicy::BestEffort)
            .await?
            .is_some()
        {
            return Ok(true);
        }
        info!(branch, "plain push failed, retrying with --set-upstream");
        let pushed = self
            .execute(
                GitCommand::PushSetUpstream {
                    branch: branch.to_string(),
                    force,
                },
                StepPolicy::BestEffort,
            )
            .await?
            .is_some();
        Ok(pushed)
    }

    /// Updates `base` and interactively rebases `current` onto it.
    async fn rebase(&self, base: &str, current: &str) -> AppResult<()> {
        let steps = [
            GitCommand::Checkout {
                branch: base.to_string(),
            },
            GitCommand::Pull,
            GitCommand::Checkout {
                branch: current.to_string(),
            },
            GitCommand::Rebase {
                base: base.to_string(),
            },
        ];
        for step in steps {
            self.execute(step, StepPolicy::MustSucceed).await?;
        }
        Ok(())
    }

    async fn open_pull_request(
        &self,
        base: &str,
        body: &str,
        assignee: Option<String>,
    ) -> AppResult<()> {
        self.execute(
            GitCommand::PullRequest {
                base: base.to_string(),
                body: body.to_string(),
                assignee,
            },
            StepPolicy::MustSucceed,
        )
        .await?;
        Ok(())
    }
}

impl<T: VersionControlService + ?Sized> VersionControlExt for T {}
