use std::env;
use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::{AppConfig, ConfigKey, StoredConfig, config_file_path};
use crate::domain::tracker::TrackerKind;
use crate::error::{AppError, AppResult};
use crate::messages::{Message, Palette};
use crate::services::ConsoleService;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration prompt.
    Init,
    /// Show the stored configuration (secrets masked).
    Show,
    /// Set one configuration key (issue_tracker_api, close_issues).
    Set {
        key: String,
        value: String,
    },
}

pub fn run(
    command: ConfigCommand,
    workspace_root: &Path,
    console: &dyn ConsoleService,
) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(workspace_root, console),
        ConfigCommand::Show => run_show(workspace_root, console),
        ConfigCommand::Set { key, value } => run_set(workspace_root, &key, &value, console),
    }
}

/// First-run path: asks for the tracker API URL and writes `mgit.json`.
pub fn initialize(workspace_root: &Path, console: &dyn ConsoleService) -> AppResult<AppConfig> {
    let palette = Palette::plain();
    console.say(&Message::InitIssueTrackerApi.render(&palette));
    let url = console.ask(&Message::IssueTrackerApiPrompt.render(&palette))?;
    if url.trim().is_empty() {
        return Err(AppError::Configuration(
            "an issue tracker API URL is required".to_string(),
        ));
    }
    AppConfig::initialize(workspace_root, &url)
}

fn run_init(workspace_root: &Path, console: &dyn ConsoleService) -> AppResult<()> {
    let path = config_file_path(workspace_root);
    let mut stored = StoredConfig::load(&path)?.unwrap_or_default();
    let palette = Palette::plain();

    console.say(&Message::InitIssueTrackerApi.render(&palette));
    let prompt = Message::IssueTrackerApiPrompt.render(&palette);
    let prompt = match &stored.issue_tracker_api {
        Some(current) => format!("{prompt} [{current}] (Enter to keep)"),
        None => prompt,
    };
    let url = console.ask(&prompt)?;
    if !url.is_empty() {
        stored.set(ConfigKey::IssueTrackerApi, &url)?;
    }
    if stored.issue_tracker_api.is_none() {
        return Err(AppError::Configuration(
            "an issue tracker API URL is required".to_string(),
        ));
    }

    let close_issues = console
        .confirm("Append \"Closes #<id>\" to ticket-derived messages for GitHub issues?")?;
    stored.close_issues = Some(close_issues);

    stored.save(&path)?;
    console.say(&format!("Configuration saved to {}", path.display()));
    Ok(())
}

fn run_show(workspace_root: &Path, console: &dyn ConsoleService) -> AppResult<()> {
    let path = config_file_path(workspace_root);
    let stored = StoredConfig::load(&path)?.unwrap_or_default();
    let kind = stored
        .issue_tracker_api
        .as_deref()
        .map(TrackerKind::from_api_url);

    console.say(&format!("Configuration file: {}", path.display()));
    console.say(&format!(
        "Issue tracker API: {}",
        display_value(&stored.issue_tracker_api)
    ));
    console.say(&format!(
        "Close issues from commits: {}",
        stored.close_issues.unwrap_or(false)
    ));
    if kind == Some(TrackerKind::GitHub) {
        console.say(&format!(
            "GitHub username: {}",
            display_value(&env::var("MGIT_GITHUB_USERNAME").ok())
        ));
        console.say(&format!(
            "GitHub API token: {}",
            mask_secret(&env::var("MGIT_GITHUB_API_TOKEN").ok())
        ));
    }
    Ok(())
}

fn run_set(
    workspace_root: &Path,
    key: &str,
    value: &str,
    console: &dyn ConsoleService,
) -> AppResult<()> {
    let key: ConfigKey = key.parse()?;
    let path = config_file_path(workspace_root);
    let mut stored = StoredConfig::load(&path)?.unwrap_or_default();
    stored.set(key, value)?;
    stored.save(&path)?;
    console.say(&format!("{} updated in {}", key.as_str(), path.display()));
    Ok(())
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
