use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no open issue titled 'v<version> Release Planning' was found")]
    TrackingIssueNotFound,
    #[error("no milestone link found in the body of issue #{number} ('{title}')")]
    MilestoneNotFound { number: u64, title: String },
    #[error("GitHub error: {0}")]
    GitHubError(#[from] octocrab::Error),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// True for the errors raised when the release anchor (tracking issue or
    /// its milestone link) does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::TrackingIssueNotFound | Error::MilestoneNotFound { .. }
        )
    }

    /// Whether the run must end with a failure status. Missing anchors are
    /// tolerated when `allow_missing` is set.
    pub fn is_fatal(&self, allow_missing: bool) -> bool {
        !(allow_missing && self.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
