use tracing::info;

use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::ticket::Ticket;
use crate::error::AppResult;
use crate::messages::Message;
use crate::services::VersionControlExt;
use crate::workflow::{confirm_or_abort, fetch_ticket, resolve_base_branch};

pub struct BranchWorkflowOutcome {
    pub ticket: Ticket,
    pub base_branch: String,
    pub branch: BranchName,
}

/// Creates a branch named after the tracker issue `issue_id`, off
/// `base_branch` or the default base branch.
///
/// The git steps are not rolled back: if `git pull` fails the repository is
/// left on the base branch.
pub async fn create_branch_for_issue(
    ctx: &AppContext,
    issue_id: &str,
    base_branch: Option<&str>,
) -> AppResult<BranchWorkflowOutcome> {
    let base_branch = resolve_base_branch(ctx, base_branch).await?;
    let ticket = fetch_ticket(ctx, issue_id).await?;
    let branch = ticket.branch_name();

    ctx.console.say(&ctx.render(Message::CreateBranchWarning {
        base_branch: &base_branch,
        new_branch: branch.as_str(),
    }));
    confirm_or_abort(ctx)?;

    ctx.version_control
        .create_branch(&base_branch, &branch)
        .await?;
    info!(%branch, base = %base_branch, "branch created");

    Ok(BranchWorkflowOutcome {
        ticket,
        base_branch,
        branch,
    })
}
