use crate::{
    domain::models::{MilestoneRef, PullRequestInfo, TrackerIssue},
    error::Result,
};

#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// Retrieve every open issue of the repository.
    async fn list_open_issues(&self) -> Result<Vec<TrackerIssue>>;

    /// Retrieve every closed issue and pull request assigned to `milestone`.
    async fn list_milestone_items(&self, milestone: MilestoneRef) -> Result<Vec<TrackerIssue>>;

    /// Reinterpret `item` as a pull request. Plain issues yield `None`.
    async fn as_pull_request(&self, item: &TrackerIssue) -> Result<Option<PullRequestInfo>>;
}
