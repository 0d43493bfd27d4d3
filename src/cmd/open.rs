use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::open::open_issue;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    open_issue(ctx).await?;
    Ok(())
}
