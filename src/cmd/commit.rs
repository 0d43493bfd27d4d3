use clap::Args;
use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::commit::commit_and_push;

#[derive(Args, Debug, Clone)]
pub struct CommitArgs {
    /// The commit message.
    #[arg(short, long)]
    pub message: Option<String>,
    /// Take the commit message from this tracker issue instead of the branch name.
    #[arg(short, long)]
    pub issue_id: Option<String>,
}

pub async fn run(ctx: &AppContext, args: CommitArgs) -> AppResult<()> {
    let outcome = commit_and_push(ctx, args.message.as_deref(), args.issue_id.as_deref()).await?;
    info!(message = %outcome.message, pushed = outcome.pushed, "commit workflow finished");
    Ok(())
}
