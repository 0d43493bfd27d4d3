use std::fmt;

use thiserror::Error;

/// How a workflow reacts when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Abort the workflow and propagate the command's exit code.
    MustSucceed,
    /// Log the failure and keep going.
    BestEffort,
}

/// Every external command the workflows run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    CurrentBranch,
    VerifyBranch { name: String },
    ConfigGet { key: String },
    Checkout { branch: String },
    CheckoutNew { branch: String },
    Pull,
    AddAll,
    Commit { message: String },
    Push { force: bool },
    PushSetUpstream { branch: String, force: bool },
    Rebase { base: String },
    PullRequest {
        base: String,
        body: String,
        assignee: Option<String>,
    },
}

impl GitCommand {
    pub fn program(&self) -> &'static str {
        match self {
            GitCommand::PullRequest { .. } => "hub",
            _ => "git",
        }
    }

    pub fn args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            GitCommand::CurrentBranch => vec!["rev-parse", "--abbrev-ref", "HEAD"],
            GitCommand::VerifyBranch { name } => {
                vec!["rev-parse", "--quiet", "--verify", name.as_str()]
            }
            GitCommand::ConfigGet { key } => vec!["config", "--get", key.as_str()],
            GitCommand::Checkout { branch } => vec!["checkout", branch.as_str()],
            GitCommand::CheckoutNew { branch } => vec!["checkout", "-b", branch.as_str()],
            GitCommand::Pull => vec!["pull"],
            GitCommand::AddAll => vec!["add", "-A"],
            GitCommand::Commit { message } => vec!["commit", "-m", message.as_str()],
            GitCommand::Push { force: false } => vec!["push"],
            GitCommand::Push { force: true } => vec!["push", "--force-with-lease"],
            GitCommand::PushSetUpstream { branch, force } => {
                let mut args = vec!["push"];
                if *force {
                    args.push("--force-with-lease");
                }
                args.extend(["--set-upstream", "origin", branch.as_str()]);
                args
            }
            GitCommand::Rebase { base } => vec!["rebase", "-i", base.as_str()],
            GitCommand::PullRequest {
                base,
                body,
                assignee,
            } => {
                let mut args = vec![
                    "pull-request",
                    "--browse",
                    "-b",
                    base.as_str(),
                    "-m",
                    body.as_str(),
                ];
                if let Some(assignee) = assignee {
                    args.extend(["-a", assignee.as_str()]);
                }
                args
            }
        };
        args.into_iter().map(str::to_string).collect()
    }

    /// Read-only commands that never change the repository.
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            GitCommand::CurrentBranch
                | GitCommand::VerifyBranch { .. }
                | GitCommand::ConfigGet { .. }
        )
    }

    /// Commands that hand the terminal over to the child process.
    pub fn is_interactive(&self) -> bool {
        matches!(self, GitCommand::Rebase { .. })
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Failure side of running an external command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{command}` failed with exit code {code}: {stderr}")]
pub struct CommandFailure {
    pub command: String,
    pub code: i32,
    pub stderr: String,
}

pub type CommandResult = Result<String, CommandFailure>;
