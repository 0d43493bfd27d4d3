use thiserror::Error;

use crate::domain::branch::BranchName;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketParseError {
    #[error("no issue identifier found in `{0}`")]
    NoIdentifierFound(String),
}

/// An issue-tracker entry as the workflows see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: String,
    summary: String,
}

impl Ticket {
    /// The id is canonicalized to upper case.
    pub fn new(id: impl AsRef<str>, summary: impl Into<String>) -> Self {
        Self {
            id: id.as_ref().trim().to_uppercase(),
            summary: summary.into(),
        }
    }

    /// Splits a branch name such as `jir-123-update-readme-file` into the
    /// identifier (`JIR-123`) and the summary (`update readme file`). The
    /// identifier ends at the first purely numeric `-`-separated token.
    pub fn parse_branch_name(name: &str) -> Result<Self, TicketParseError> {
        let tokens: Vec<&str> = name.split('-').collect();
        let boundary = tokens
            .iter()
            .position(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(|| TicketParseError::NoIdentifierFound(name.to_string()))?;

        let id = tokens[..=boundary].join("-");
        let summary = tokens[boundary + 1..].join(" ");
        Ok(Self::new(id, summary))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn title(&self) -> String {
        title_case(&self.summary)
    }

    pub fn branch_name(&self) -> BranchName {
        BranchName::from_parts(&self.id, &self.summary)
    }

    /// `"<id>: <title>"`, or whichever half is present.
    pub fn display_string(&self) -> String {
        let title = self.title();
        match (self.id.is_empty(), title.is_empty()) {
            (false, false) => format!("{}: {}", self.id, title),
            (false, true) => self.id.clone(),
            _ => title,
        }
    }
}

/// Capitalizes every letter that starts the string or follows a non-letter
/// (digits included); all other letters are lower-cased and underscores read
/// as spaces.
pub fn title_case(summary: &str) -> String {
    let mut result = String::with_capacity(summary.len());
    let mut in_word = false;
    for ch in summary.trim().chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_project_prefixed_branch() {
        let ticket = Ticket::parse_branch_name("jir-123-update-readme-file").unwrap();
        assert_eq!(ticket.id(), "JIR-123");
        assert_eq!(ticket.summary(), "update readme file");
        assert_eq!(ticket.title(), "Update Readme File");
        assert_eq!(ticket.display_string(), "JIR-123: Update Readme File");
    }

    #[test]
    fn parses_bare_numeric_branch() {
        let ticket = Ticket::parse_branch_name("123-update-readme-file").unwrap();
        assert_eq!(ticket.id(), "123");
        assert_eq!(ticket.display_string(), "123: Update Readme File");
    }

    #[test]
    fn identifier_ends_at_first_numeric_token() {
        let ticket = Ticket::parse_branch_name("team-web-88-fix-2fa-login").unwrap();
        assert_eq!(ticket.id(), "TEAM-WEB-88");
        assert_eq!(ticket.summary(), "fix 2fa login");

        let ticket = Ticket::parse_branch_name("ops-7").unwrap();
        assert_eq!(ticket.id(), "OPS-7");
        assert_eq!(ticket.summary(), "");
        assert_eq!(ticket.display_string(), "OPS-7");
    }

    #[test]
    fn branch_without_numeric_token_is_rejected() {
        assert_eq!(
            Ticket::parse_branch_name("feature-cleanup"),
            Err(TicketParseError::NoIdentifierFound(
                "feature-cleanup".to_string()
            ))
        );
        assert!(Ticket::parse_branch_name("master").is_err());
        assert!(Ticket::parse_branch_name("v2a-notes").is_err());
        assert!(Ticket::parse_branch_name("--").is_err());
    }

    #[test]
    fn branch_name_round_trips() {
        let ticket = Ticket::new("JIR-123", "update readme file");
        let branch = ticket.branch_name();
        assert_eq!(branch.as_str(), "jir-123-update-readme-file");
        assert_eq!(Ticket::parse_branch_name(branch.as_str()).unwrap(), ticket);
    }

    #[test]
    fn id_is_upper_cased() {
        assert_eq!(Ticket::new("jir-9", "x").id(), "JIR-9");
    }

    #[test]
    fn title_case_capitalizes_after_punctuation() {
        assert_eq!(title_case("update readme.md file"), "Update Readme.Md File");
        assert_eq!(title_case("fix half-baked API"), "Fix Half-Baked Api");
        assert_eq!(title_case("snake_case_words"), "Snake Case Words");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_capitalizes_after_digits() {
        assert_eq!(title_case("add 2fa support"), "Add 2Fa Support");
        assert_eq!(title_case("upgrade to v2beta"), "Upgrade To V2Beta");
        assert_eq!(title_case("42"), "42");
    }

    #[test]
    fn display_string_without_summary_or_id() {
        assert_eq!(Ticket::new("", "update docs").display_string(), "Update Docs");
        assert_eq!(Ticket::new("", "").display_string(), "");
    }
}
