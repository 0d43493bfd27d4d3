pub mod branch;
pub mod commit;
pub mod open;
pub mod pull_request;

use tracing::debug;

use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::ticket::Ticket;
use crate::domain::tracker::TrackerKind;
use crate::error::{AppError, AppResult};
use crate::messages::Message;
use crate::services::VersionControlExt;

/// The explicit base branch, or the first default candidate that exists.
pub async fn resolve_base_branch(ctx: &AppContext, explicit: Option<&str>) -> AppResult<String> {
    if let Some(base) = explicit.map(str::trim).filter(|base| !base.is_empty()) {
        return Ok(base.to_string());
    }
    let base = ctx
        .version_control
        .default_base_branch()
        .await
        .ok_or(AppError::NoBaseBranch)?;
    debug!(%base, "using default base branch");
    Ok(base)
}

/// Ticket encoded in the name of the checked-out branch.
pub async fn ticket_from_current_branch(ctx: &AppContext) -> AppResult<(BranchName, Ticket)> {
    let branch = ctx.version_control.current_branch().await?;
    let ticket = ticket_from_branch(&branch)?;
    Ok((branch, ticket))
}

pub fn ticket_from_branch(branch: &BranchName) -> AppResult<Ticket> {
    Ticket::parse_branch_name(branch.as_str()).map_err(|_| AppError::MissingIssueId {
        branch: branch.to_string(),
    })
}

pub async fn fetch_ticket(ctx: &AppContext, issue_id: &str) -> AppResult<Ticket> {
    let summary = ctx.issue_tracker.fetch_summary(issue_id).await?;
    Ok(Ticket::new(issue_id, summary))
}

pub fn confirm_or_abort(ctx: &AppContext) -> AppResult<()> {
    if ctx.console.confirm(&ctx.render(Message::ContinuePrompt))? {
        Ok(())
    } else {
        Err(AppError::Aborted)
    }
}

/// `Closes #<id>` suffix, only for GitHub trackers with `close_issues` on.
pub fn closing_reference(ctx: &AppContext, ticket: &Ticket) -> String {
    if ctx.config.close_issues && ctx.config.tracker_kind() == TrackerKind::GitHub {
        ctx.render(Message::ClosesIssue { id: ticket.id() })
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::testing::{FakeGit, ScriptedConsole, context, github_config, unused_tracker};

    #[tokio::test]
    async fn explicit_base_branch_skips_lookup() {
        let git = Arc::new(FakeGit::on_branch("jir-1-x"));
        let console = Arc::new(ScriptedConsole::default());
        let ctx = context(github_config(false), &git, unused_tracker(), &console);

        let base = resolve_base_branch(&ctx, Some("release")).await.unwrap();
        assert_eq!(base, "release");
        assert!(git.calls().is_empty());
    }

    #[tokio::test]
    async fn blank_base_branch_falls_back_to_default() {
        let git = Arc::new(FakeGit::on_branch("jir-1-x").with_branches(&["development"]));
        let console = Arc::new(ScriptedConsole::default());
        let ctx = context(github_config(false), &git, unused_tracker(), &console);

        let base = resolve_base_branch(&ctx, Some("  ")).await.unwrap();
        assert_eq!(base, "development");
    }

    #[tokio::test]
    async fn missing_default_base_branch_is_an_error() {
        let git = Arc::new(FakeGit::on_branch("jir-1-x"));
        let console = Arc::new(ScriptedConsole::default());
        let ctx = context(github_config(false), &git, unused_tracker(), &console);

        assert!(matches!(
            resolve_base_branch(&ctx, None).await,
            Err(AppError::NoBaseBranch)
        ));
    }

    #[tokio::test]
    async fn closing_reference_requires_flag_and_github() {
        let git = Arc::new(FakeGit::on_branch("jir-1-x"));
        let console = Arc::new(ScriptedConsole::default());
        let ticket = Ticket::new("42", "fix it");

        let ctx = context(github_config(false), &git, unused_tracker(), &console);
        assert_eq!(closing_reference(&ctx, &ticket), "");

        let ctx = context(github_config(true), &git, unused_tracker(), &console);
        assert_eq!(closing_reference(&ctx, &ticket), "\n\nCloses #42");

        let mut config = github_config(true);
        config.issue_tracker_api = "https://tracker.example.com/issues".to_string();
        let ctx = context(config, &git, unused_tracker(), &console);
        assert_eq!(closing_reference(&ctx, &ticket), "");
    }
}
