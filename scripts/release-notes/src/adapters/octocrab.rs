use octocrab::{
    models::{issues::Issue, pulls::PullRequest},
    params, Octocrab,
};

use crate::{
    domain::models::{MilestoneRef, PullRequestInfo, TrackerIssue},
    error::Result,
    ports::issue_tracker::IssueTracker,
};

const PAGE_SIZE: u8 = 100;

pub struct OctocrabAdapter {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl OctocrabAdapter {
    pub fn new(token: &str, owner: &str, repo: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self {
            client,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    fn tracker_issue(issue: Issue) -> TrackerIssue {
        TrackerIssue {
            number: issue.number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
            is_pull_request: issue.pull_request.is_some(),
        }
    }

    fn pull_request_info(pr: PullRequest) -> PullRequestInfo {
        PullRequestInfo {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            merged: pr.merged_at.is_some(),
            author: pr.user.map(|user| user.login).unwrap_or_default(),
            url: pr.html_url.map(|url| url.to_string()).unwrap_or_default(),
            labels: pr
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|label| label.name)
                .collect(),
        }
    }
}

impl IssueTracker for OctocrabAdapter {
    async fn list_open_issues(&self) -> Result<Vec<TrackerIssue>> {
        let first_page = self
            .client
            .issues(&self.owner, &self.repo)
            .list()
            .state(params::State::Open)
            .per_page(PAGE_SIZE)
            .send()
            .await?;
        let issues = self.client.all_pages(first_page).await?;

        tracing::debug!(
            "{} open issues in {}/{}",
            issues.len(),
            self.owner,
            self.repo
        );

        Ok(issues.into_iter().map(Self::tracker_issue).collect())
    }

    async fn list_milestone_items(&self, milestone: MilestoneRef) -> Result<Vec<TrackerIssue>> {
        let first_page = self
            .client
            .issues(&self.owner, &self.repo)
            .list()
            .milestone(milestone.0)
            .state(params::State::Closed)
            .per_page(PAGE_SIZE)
            .send()
            .await?;
        let items = self.client.all_pages(first_page).await?;

        tracing::info!("milestone {} has {} closed items", milestone, items.len());

        Ok(items.into_iter().map(Self::tracker_issue).collect())
    }

    async fn as_pull_request(&self, item: &TrackerIssue) -> Result<Option<PullRequestInfo>> {
        if !item.is_pull_request {
            return Ok(None);
        }

        let pr = self
            .client
            .pulls(&self.owner, &self.repo)
            .get(item.number)
            .await?;

        Ok(Some(Self::pull_request_info(pr)))
    }
}
