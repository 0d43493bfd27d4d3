use tracing::info;

use crate::context::AppContext;
use crate::domain::ticket::Ticket;
use crate::error::AppResult;
use crate::messages::Message;
use crate::services::VersionControlExt;
use crate::workflow::{closing_reference, confirm_or_abort, fetch_ticket, ticket_from_branch};

#[derive(Debug)]
pub struct CommitOutcome {
    pub message: String,
    pub pushed: bool,
}

/// Stages everything, commits and pushes the current branch.
///
/// The message is `message` when given, otherwise it is derived from the
/// tracker issue `issue_id`, otherwise from the current branch name.
pub async fn commit_and_push(
    ctx: &AppContext,
    message: Option<&str>,
    issue_id: Option<&str>,
) -> AppResult<CommitOutcome> {
    let message = message.filter(|message| !message.trim().is_empty());
    let branch = ctx.version_control.current_branch().await?;

    let message = match (message, issue_id) {
        (Some(message), _) => message.to_string(),
        (None, Some(issue_id)) => {
            let ticket = fetch_ticket(ctx, issue_id).await?;
            ticket_message(ctx, &ticket)
        }
        (None, None) => ticket_message(ctx, &ticket_from_branch(&branch)?),
    };

    ctx.console
        .say(&ctx.render(Message::CommitWarning { message: &message }));
    confirm_or_abort(ctx)?;

    ctx.version_control.commit_all(&message).await?;
    let pushed = ctx.version_control.push(branch.as_str(), false).await?;
    if pushed {
        info!(%branch, "changes pushed");
    } else {
        ctx.console.say(&ctx.render(Message::PushFailed));
    }

    Ok(CommitOutcome { message, pushed })
}

fn ticket_message(ctx: &AppContext, ticket: &Ticket) -> String {
    format!("{}{}", ticket.display_string(), closing_reference(ctx, ticket))
}
