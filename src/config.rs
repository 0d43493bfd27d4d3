use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::tracker::TrackerKind;
use crate::error::{AppError, AppResult};

pub const CONFIG_FILE_NAME: &str = "mgit.json";

const GITHUB_USERNAME_VAR: &str = "MGIT_GITHUB_USERNAME";
const GITHUB_TOKEN_VAR: &str = "MGIT_GITHUB_API_TOKEN";

pub fn config_file_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_FILE_NAME)
}

/// On-disk shape of `mgit.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_tracker_api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_issues: Option<bool>,
}

/// Keys accepted in `mgit.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    IssueTrackerApi,
    CloseIssues,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::IssueTrackerApi => "issue_tracker_api",
            ConfigKey::CloseIssues => "close_issues",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "issue_tracker_api" => Ok(ConfigKey::IssueTrackerApi),
            "close_issues" => Ok(ConfigKey::CloseIssues),
            other => Err(AppError::Configuration(format!(
                "'{other}' is not an allowed attribute"
            ))),
        }
    }
}

impl StoredConfig {
    /// Returns `None` when the file does not exist yet.
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<StoredConfig>(&contents)
                .map(Some)
                .map_err(|err| {
                    AppError::Configuration(format!("invalid {}: {err}", path.display()))
                }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        debug!(path = %path.display(), "configuration written");
        Ok(())
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> AppResult<()> {
        match key {
            ConfigKey::IssueTrackerApi => {
                let url = normalize_url(value);
                if url.is_empty() {
                    return Err(AppError::Configuration(
                        "issue_tracker_api must not be empty".to_string(),
                    ));
                }
                self.issue_tracker_api = Some(url);
            }
            ConfigKey::CloseIssues => {
                let flag = value.trim().parse::<bool>().map_err(|_| {
                    AppError::Configuration(format!(
                        "close_issues expects true or false, got '{value}'"
                    ))
                })?;
                self.close_issues = Some(flag);
            }
        }
        Ok(())
    }
}

/// URL values lose their trailing slash when written.
fn normalize_url(value: &str) -> String {
    let value = value.trim();
    if value.contains("http://") || value.contains("https://") {
        value.trim_end_matches('/').to_string()
    } else {
        value.to_string()
    }
}

/// Basic-auth pair sent with tracker requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerCredentials {
    pub username: String,
    pub token: String,
}

/// Configuration for one invocation; immutable once built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub issue_tracker_api: String,
    pub close_issues: bool,
    pub credentials: Option<TrackerCredentials>,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    /// Loads `mgit.json` from `workspace_root`; `None` when it is missing.
    pub fn load(workspace_root: &Path) -> AppResult<Option<Self>> {
        let path = config_file_path(workspace_root);
        match StoredConfig::load(&path)? {
            Some(stored) => Self::from_stored(stored, workspace_root).map(Some),
            None => Ok(None),
        }
    }

    pub fn from_stored(stored: StoredConfig, workspace_root: &Path) -> AppResult<Self> {
        let issue_tracker_api = stored
            .issue_tracker_api
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "issue_tracker_api is not set in {CONFIG_FILE_NAME}; run `mgit config init`"
                ))
            })?;
        let kind = TrackerKind::from_api_url(&issue_tracker_api);

        Ok(Self {
            issue_tracker_api,
            close_issues: stored.close_issues.unwrap_or(false),
            credentials: credentials_from_env(kind),
            workspace_root: workspace_root.to_path_buf(),
        })
    }

    /// Writes a fresh config file holding `issue_tracker_api` and returns it.
    pub fn initialize(workspace_root: &Path, issue_tracker_api: &str) -> AppResult<Self> {
        let path = config_file_path(workspace_root);
        let mut stored = StoredConfig::load(&path)?.unwrap_or_default();
        stored.set(ConfigKey::IssueTrackerApi, issue_tracker_api)?;
        stored.save(&path)?;
        info!(path = %path.display(), "created configuration");
        Self::from_stored(stored, workspace_root)
    }

    pub fn tracker_kind(&self) -> TrackerKind {
        TrackerKind::from_api_url(&self.issue_tracker_api)
    }

    pub fn issue_url(&self, issue_id: &str) -> String {
        self.tracker_kind()
            .issue_url(&self.issue_tracker_api, issue_id)
    }
}

fn credentials_from_env(kind: TrackerKind) -> Option<TrackerCredentials> {
    if kind != TrackerKind::GitHub {
        return None;
    }
    let username = env::var(GITHUB_USERNAME_VAR).ok().filter(|v| !v.is_empty())?;
    Some(TrackerCredentials {
        username,
        token: env::var(GITHUB_TOKEN_VAR).unwrap_or_default(),
    })
}
