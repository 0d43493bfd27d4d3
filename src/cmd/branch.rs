use clap::Args;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::messages::Message;
use crate::workflow::branch::create_branch_for_issue;

#[derive(Args, Debug, Clone)]
pub struct BranchArgs {
    /// Issue ID in the tracker, e.g. JIR-123 or 42.
    pub issue_id: String,
    /// The base branch to perform this action on.
    #[arg(short, long)]
    pub base_branch: Option<String>,
}

pub async fn run(ctx: &AppContext, args: BranchArgs) -> AppResult<()> {
    let outcome =
        create_branch_for_issue(ctx, &args.issue_id, args.base_branch.as_deref()).await?;
    ctx.console.say(&ctx.render(Message::BranchCreated {
        branch: outcome.branch.as_str(),
        base_branch: &outcome.base_branch,
        ticket: &outcome.ticket.display_string(),
    }));
    Ok(())
}
