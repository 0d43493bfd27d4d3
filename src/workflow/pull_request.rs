use tracing::info;

use crate::context::AppContext;
use crate::domain::command::{GitCommand, StepPolicy};
use crate::error::{AppError, AppResult};
use crate::messages::Message;
use crate::services::VersionControlExt;
use crate::workflow::{
    closing_reference, confirm_or_abort, resolve_base_branch, ticket_from_current_branch,
};

#[derive(Debug)]
pub struct PullRequestOutcome {
    pub base_branch: String,
    pub title: String,
    pub rebased: bool,
    pub assignee: Option<String>,
}

/// Commits pending work, optionally rebases onto `base_branch`, and opens a
/// pull request for the current branch with `hub`.
pub async fn create_pull_request(
    ctx: &AppContext,
    base_branch: Option<&str>,
) -> AppResult<PullRequestOutcome> {
    let git = &ctx.version_control;
    if !git.pull_request_tool_available() {
        return Err(AppError::PullRequestToolMissing);
    }

    let base_branch = resolve_base_branch(ctx, base_branch).await?;
    let (branch, ticket) = ticket_from_current_branch(ctx).await?;
    let title = match ticket.title() {
        title if title.is_empty() => ticket.display_string(),
        title => title,
    };
    let message = format!("{title}{}", closing_reference(ctx, &ticket));

    ctx.console.say(&ctx.render(Message::PullRequestWarning {
        message: &message,
        base_branch: &base_branch,
        title: &title,
    }));
    confirm_or_abort(ctx)?;

    git.commit_all(&message).await?;

    let rebased = ctx
        .console
        .confirm(&ctx.render(Message::UpdateBaseBranchConfirmation {
            base_branch: &base_branch,
        }))?;
    let pushed = if rebased {
        git.rebase(&base_branch, branch.as_str()).await?;
        git.push(branch.as_str(), true).await?
    } else {
        git.push(branch.as_str(), false).await?
    };
    if !pushed {
        ctx.console.say(&ctx.render(Message::PushFailed));
    }

    let assignee = git.user_handle().await;
    let body = ctx.render(Message::PullRequestBody {
        title: &title,
        issue_tracker: ctx.config.tracker_kind().label(),
        id: ticket.id(),
        url: &ctx.config.issue_url(ticket.id()),
    });
    git.open_pull_request(&base_branch, &body, assignee.clone())
        .await?;
    info!(%branch, base = %base_branch, "pull request created");

    git.execute(GitCommand::Push { force: false }, StepPolicy::BestEffort)
        .await?;

    Ok(PullRequestOutcome {
        base_branch,
        title,
        rebased,
        assignee,
    })
}
