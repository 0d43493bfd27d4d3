const GITHUB_HOST: &str = "github.com";
const GITHUB_API_REPOS: &str = "https://api.github.com/repos/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerKind {
    GitHub,
    Unknown,
}

impl TrackerKind {
    pub fn from_api_url(api_url: &str) -> Self {
        if api_url.contains(GITHUB_HOST) {
            TrackerKind::GitHub
        } else {
            TrackerKind::Unknown
        }
    }

    /// Name shown in pull request bodies.
    pub fn label(&self) -> &'static str {
        match self {
            TrackerKind::GitHub => "GitHub",
            TrackerKind::Unknown => "Issue tracker",
        }
    }

    /// Browser URL of an issue. GitHub API endpoints are mapped to the web
    /// UI; anything else is `<api_url>/<id>`.
    pub fn issue_url(&self, api_url: &str, issue_id: &str) -> String {
        let base = api_url.trim_end_matches('/');
        if *self == TrackerKind::GitHub {
            if let Some(repo_path) = base.strip_prefix(GITHUB_API_REPOS) {
                return format!("https://{GITHUB_HOST}/{repo_path}/{issue_id}");
            }
        }
        format!("{base}/{issue_id}")
    }
}
