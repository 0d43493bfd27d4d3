//! In-memory collaborators shared by the unit tests.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::command::{CommandFailure, CommandResult, GitCommand};
use crate::error::AppResult;
use crate::messages::Palette;
use crate::services::browser::MockBrowserService;
use crate::services::issue_tracker::MockIssueTrackerService;
use crate::services::version_control::GITHUB_USER_KEY;
use crate::services::{ConsoleService, VersionControlService};

pub const GITHUB_API: &str = "https://api.github.com/repos/fake_user/fake_repo/issues";

pub fn github_config(close_issues: bool) -> AppConfig {
    AppConfig {
        issue_tracker_api: GITHUB_API.to_string(),
        close_issues,
        credentials: None,
        workspace_root: PathBuf::from("."),
    }
}

/// Tracker that fails the test if it is ever called.
pub fn unused_tracker() -> MockIssueTrackerService {
    let mut tracker = MockIssueTrackerService::new();
    tracker.expect_fetch_summary().never();
    tracker
}

/// Tracker that answers one lookup of `issue_id` with `summary`.
pub fn tracker_returning(issue_id: &'static str, summary: &'static str) -> MockIssueTrackerService {
    let mut tracker = MockIssueTrackerService::new();
    tracker
        .expect_fetch_summary()
        .withf(move |id| id.to_string() == issue_id)
        .times(1)
        .returning(move |_| Ok(summary.to_string()));
    tracker
}

pub fn context(
    config: AppConfig,
    git: &Arc<FakeGit>,
    tracker: MockIssueTrackerService,
    console: &Arc<ScriptedConsole>,
) -> AppContext {
    context_with_browser(config, git, tracker, console, MockBrowserService::new())
}

pub fn context_with_browser(
    config: AppConfig,
    git: &Arc<FakeGit>,
    tracker: MockIssueTrackerService,
    console: &Arc<ScriptedConsole>,
    browser: MockBrowserService,
) -> AppContext {
    AppContext::new(
        config,
        git.clone(),
        Arc::new(tracker),
        console.clone(),
        Arc::new(browser),
        Palette::plain(),
    )
}

/// Records every command and answers queries from canned state.
pub struct FakeGit {
    current: String,
    branches: Vec<String>,
    user: Option<String>,
    hub_installed: bool,
    failures: Vec<(GitCommand, i32)>,
    calls: Mutex<Vec<GitCommand>>,
}

impl FakeGit {
    pub fn on_branch(current: &str) -> Self {
        Self {
            current: current.to_string(),
            branches: vec![current.to_string()],
            user: None,
            hub_installed: true,
            failures: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_branches(mut self, branches: &[&str]) -> Self {
        self.branches
            .extend(branches.iter().map(|branch| branch.to_string()));
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn without_hub(mut self) -> Self {
        self.hub_installed = false;
        self
    }

    pub fn failing(mut self, command: &GitCommand, code: i32) -> Self {
        self.failures.push((command.clone(), code));
        self
    }

    pub fn calls(&self) -> Vec<GitCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded commands minus read-only queries.
    pub fn mutations(&self) -> Vec<GitCommand> {
        self.calls()
            .into_iter()
            .filter(|command| !command.is_query())
            .collect()
    }

    fn fail(command: &GitCommand, code: i32) -> CommandResult {
        Err(CommandFailure {
            command: command.to_string(),
            code,
            stderr: "simulated failure".to_string(),
        })
    }
}

#[async_trait]
impl VersionControlService for FakeGit {
    fn is_repository(&self) -> bool {
        true
    }

    fn pull_request_tool_available(&self) -> bool {
        self.hub_installed
    }

    async fn run(&self, command: &GitCommand) -> CommandResult {
        self.calls.lock().unwrap().push(command.clone());

        if let Some((_, code)) = self.failures.iter().find(|(failing, _)| failing == command) {
            return Self::fail(command, *code);
        }

        match command {
            GitCommand::CurrentBranch => Ok(format!("{}\n", self.current)),
            GitCommand::VerifyBranch { name } if self.branches.contains(name) => {
                Ok(String::new())
            }
            GitCommand::VerifyBranch { .. } => Self::fail(command, 1),
            GitCommand::ConfigGet { key } if key == GITHUB_USER_KEY => match &self.user {
                Some(user) => Ok(format!("{user}\n")),
                None => Self::fail(command, 1),
            },
            GitCommand::ConfigGet { .. } => Self::fail(command, 1),
            _ => Ok(String::new()),
        }
    }
}

/// Console that replays scripted answers and records everything shown.
#[derive(Default)]
pub struct ScriptedConsole {
    confirmations: Mutex<VecDeque<bool>>,
    replies: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn answering(confirmations: &[bool]) -> Self {
        Self {
            confirmations: Mutex::new(confirmations.iter().copied().collect()),
            ..Self::default()
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|reply| reply.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn output(&self) -> String {
        self.transcript.lock().unwrap().join("\n")
    }

    pub fn unanswered(&self) -> usize {
        self.confirmations.lock().unwrap().len()
    }
}

impl ConsoleService for ScriptedConsole {
    fn say(&self, text: &str) {
        self.transcript.lock().unwrap().push(text.to_string());
    }

    fn confirm(&self, question: &str) -> AppResult<bool> {
        self.transcript.lock().unwrap().push(question.to_string());
        let answer = self
            .confirmations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirmation: {question}"));
        Ok(answer)
    }

    fn ask(&self, question: &str) -> AppResult<String> {
        self.transcript.lock().unwrap().push(question.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected question: {question}"));
        Ok(reply)
    }
}
