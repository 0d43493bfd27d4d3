use clap::Args;
use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::pull_request::create_pull_request;

#[derive(Args, Debug, Clone)]
pub struct PullRequestArgs {
    /// The base branch to perform this action on.
    #[arg(short, long)]
    pub base_branch: Option<String>,
}

pub async fn run(ctx: &AppContext, args: PullRequestArgs) -> AppResult<()> {
    let outcome = create_pull_request(ctx, args.base_branch.as_deref()).await?;
    info!(
        title = %outcome.title,
        base = %outcome.base_branch,
        rebased = outcome.rebased,
        assignee = ?outcome.assignee,
        "pull request workflow finished"
    );
    Ok(())
}
