use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::command::{CommandFailure, CommandResult, GitCommand};
use crate::services::VersionControlService;

/// Exit code reported when the program could not be started at all.
const SPAWN_FAILURE_CODE: i32 = 127;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn command(&self, git_command: &GitCommand) -> Command {
        let mut command = Command::new(git_command.program());
        command
            .args(git_command.args())
            .current_dir(&self.workspace_root);
        command
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    fn is_repository(&self) -> bool {
        self.workspace_root.join(".git").exists()
    }

    fn pull_request_tool_available(&self) -> bool {
        which::which("hub").is_ok()
    }

    async fn run(&self, git_command: &GitCommand) -> CommandResult {
        let mut command = self.command(git_command);
        let spawn_failure = |err: std::io::Error| CommandFailure {
            command: git_command.to_string(),
            code: SPAWN_FAILURE_CODE,
            stderr: err.to_string(),
        };

        if git_command.is_interactive() {
            let status = command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(spawn_failure)?;
            return if status.success() {
                Ok(String::new())
            } else {
                Err(CommandFailure {
                    command: git_command.to_string(),
                    code: status.code().unwrap_or(1),
                    stderr: String::new(),
                })
            };
        }

        let output = command
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(spawn_failure)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(CommandFailure {
            command: git_command.to_string(),
            code: output.status.code().unwrap_or(1),
            stderr: if stderr.is_empty() {
                stdout.trim().to_string()
            } else {
                stderr
            },
        })
    }
}
