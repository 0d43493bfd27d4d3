use colored::Colorize;
use colored::control::SHOULD_COLORIZE;

/// Whether highlighted values are colored. `detect` defers to `colored`'s own
/// environment checks (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, TTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            enabled: SHOULD_COLORIZE.should_colorize(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn green(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn yellow(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Every user-facing prompt and notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'a> {
    InitIssueTrackerApi,
    IssueTrackerApiPrompt,
    ContinuePrompt,
    CreateBranchWarning {
        base_branch: &'a str,
        new_branch: &'a str,
    },
    CommitWarning {
        message: &'a str,
    },
    PullRequestWarning {
        message: &'a str,
        base_branch: &'a str,
        title: &'a str,
    },
    UpdateBaseBranchConfirmation {
        base_branch: &'a str,
    },
    ClosesIssue {
        id: &'a str,
    },
    OpeningIssue {
        url: &'a str,
    },
    BranchCreated {
        branch: &'a str,
        base_branch: &'a str,
        ticket: &'a str,
    },
    PushFailed,
    PullRequestBody {
        title: &'a str,
        issue_tracker: &'a str,
        id: &'a str,
        url: &'a str,
    },
}

impl Message<'_> {
    pub fn render(&self, palette: &Palette) -> String {
        match self {
            Message::InitIssueTrackerApi => concat!(
                "In order to retrieve the issue info we need the issue tracker API. Examples:\n",
                "    - GitHub: https://api.github.com/repos/:owner/:repo/issues",
            )
            .to_string(),
            Message::IssueTrackerApiPrompt => {
                "Enter the API URL for your issue tracker".to_string()
            }
            Message::ContinuePrompt => "Do you wish to continue?".to_string(),
            Message::CreateBranchWarning {
                base_branch,
                new_branch,
            } => format!(
                "This will create a branch off {} named {}.",
                palette.green(base_branch),
                palette.green(new_branch)
            ),
            Message::CommitWarning { message } => format!(
                "This will do the following:\n    - Add all uncommitted files\n    - Create a commit with the message \"{}\"\n    - Push the changes to origin",
                palette.green(message)
            ),
            Message::PullRequestWarning {
                message,
                base_branch,
                title,
            } => format!(
                "This will do the following:\n    - Add all uncommitted files\n    - Create a commit with the message \"{}\"\n    - Push the changes to origin\n    - Create a pull request to the {} branch with the title \"{}\"\n    - Open the pull request in your web browser",
                palette.green(message),
                palette.green(base_branch),
                palette.green(title)
            ),
            Message::UpdateBaseBranchConfirmation { base_branch } => format!(
                "Would you like to update the {} branch first and rebase your commits?",
                palette.green(base_branch)
            ),
            Message::ClosesIssue { id } => format!("\n\nCloses #{id}"),
            Message::OpeningIssue { url } => format!("Opening {}", palette.green(url)),
            Message::BranchCreated {
                branch,
                base_branch,
                ticket,
            } => format!(
                "Created {} off {} for {ticket}",
                palette.green(branch),
                palette.green(base_branch)
            ),
            Message::PushFailed => {
                palette.yellow("Could not push the branch to origin; push it manually.")
            }
            Message::PullRequestBody {
                title,
                issue_tracker,
                id,
                url,
            } => format!(
                "{title}\n\n# [{issue_tracker} ticket {id}]({url})\n\n# Screenshots\n\n# Sample API Requests\n\n# QA Steps\n\n\n# Checklist\n- [ ] Added tests\n- [ ] Check for typos\n- [ ] Updated CHANGELOG.md\n- [ ] Updated internal/external documentation"
            ),
        }
    }
}
