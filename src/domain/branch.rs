use std::fmt;

/// Candidates checked, in order, when no base branch is given.
pub const DEFAULT_BASE_BRANCHES: [&str; 4] = ["dev", "develop", "development", "master"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Branch name for a ticket: `"<id> <summary>"` slugified.
    pub fn from_parts(ticket_id: &str, summary: &str) -> Self {
        Self(slugify(&format!("{} {}", ticket_id.trim(), summary.trim())))
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lower-cases `input` and collapses every run of non-alphanumeric
/// characters into a single hyphen.
pub fn slugify(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    result
}
