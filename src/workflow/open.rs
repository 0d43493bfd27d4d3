use crate::context::AppContext;
use crate::error::AppResult;
use crate::messages::Message;
use crate::workflow::ticket_from_current_branch;

/// Opens the issue of the current branch in the browser and returns its URL.
pub async fn open_issue(ctx: &AppContext) -> AppResult<String> {
    let (_, ticket) = ticket_from_current_branch(ctx).await?;
    let url = ctx.config.issue_url(ticket.id());

    ctx.console.say(&ctx.render(Message::OpeningIssue { url: &url }));
    ctx.browser.open(&url)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::error::AppError;
    use crate::services::browser::MockBrowserService;
    use crate::testing::{
        FakeGit, ScriptedConsole, context_with_browser, github_config, unused_tracker,
    };

    #[tokio::test]
    async fn opens_github_issue_page() {
        let git = Arc::new(FakeGit::on_branch("42-update-readme-file"));
        let console = Arc::new(ScriptedConsole::default());
        let mut browser = MockBrowserService::new();
        browser
            .expect_open()
            .withf(|url| url.to_string() == "https://github.com/fake_user/fake_repo/issues/42")
            .times(1)
            .returning(|_| Ok(()));
        let ctx = context_with_browser(
            github_config(false),
            &git,
            unused_tracker(),
            &console,
            browser,
        );

        let url = open_issue(&ctx).await.unwrap();

        assert_eq!(url, "https://github.com/fake_user/fake_repo/issues/42");
        assert!(git.mutations().is_empty());
    }

    #[tokio::test]
    async fn other_trackers_use_api_url() {
        let git = Arc::new(FakeGit::on_branch("jir-7-fix"));
        let console = Arc::new(ScriptedConsole::default());
        let mut browser = MockBrowserService::new();
        browser.expect_open().times(1).returning(|_| Ok(()));
        let mut config = github_config(false);
        config.issue_tracker_api = "http://example.com".to_string();
        let ctx = context_with_browser(config, &git, unused_tracker(), &console, browser);

        assert_eq!(open_issue(&ctx).await.unwrap(), "http://example.com/JIR-7");
    }

    #[tokio::test]
    async fn branch_without_issue_id_opens_nothing() {
        let git = Arc::new(FakeGit::on_branch("master"));
        let console = Arc::new(ScriptedConsole::default());
        let mut browser = MockBrowserService::new();
        browser.expect_open().never();
        let ctx = context_with_browser(
            github_config(false),
            &git,
            unused_tracker(),
            &console,
            browser,
        );

        assert!(matches!(
            open_issue(&ctx).await,
            Err(AppError::MissingIssueId { .. })
        ));
    }
}
