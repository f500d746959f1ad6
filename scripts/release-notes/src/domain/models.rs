use std::fmt;

/// Label that flags a pull request as an incompatible change.
pub const BREAKING_CHANGE_LABEL: &str = "breaking-change";

/// An item from the tracker's issue listing. GitHub lists pull requests as
/// issues too, `is_pull_request` tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerIssue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub is_pull_request: bool,
}

impl TrackerIssue {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub merged: bool,
    pub author: String,
    pub url: String,
    pub labels: Vec<String>,
}

/// The open issue anchoring one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingIssue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MilestoneRef(pub u64);

impl fmt::Display for MilestoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant order is the order sections appear in the rendered notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    NewFeatures,
    BugFixes,
    Miscellaneous,
}

impl Category {
    pub fn heading(&self) -> &'static str {
        match self {
            Category::NewFeatures => "New Features",
            Category::BugFixes => "Bug Fixes",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub category: Category,
    pub source_id: u64,
    pub note_text: String,
    /// `@login` of the pull request author, empty when GitHub reports none.
    pub author: String,
    pub url: String,
    pub is_breaking: bool,
}

impl ChangeRecord {
    pub fn bullet_point(&self) -> String {
        if self.author.is_empty() {
            return format!("- {} ([#{}]({}))", self.note_text, self.source_id, self.url);
        }
        format!(
            "- {} ([#{}]({}), {})",
            self.note_text, self.source_id, self.url, self.author
        )
    }
}
