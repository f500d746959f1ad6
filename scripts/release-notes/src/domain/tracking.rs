use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    domain::models::{MilestoneRef, TrackerIssue, TrackingIssue},
    error::{Error, Result},
};

pub static TRACKING_TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v(.*) Release Planning$").unwrap());

pub static MILESTONE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://github\.com/[\w.-]+/[\w.-]+/milestone/(\d+)").unwrap()
});

/// Picks the release planning issue among the open issues. When several
/// match, the one with the lowest number wins.
pub fn select_tracking_issue(open_issues: &[TrackerIssue]) -> Result<TrackingIssue> {
    let mut candidates: Vec<(&TrackerIssue, &str)> = open_issues
        .iter()
        .filter_map(|issue| {
            TRACKING_TITLE_REGEX
                .captures(&issue.title)
                .and_then(|caps| caps.get(1))
                .map(|version| (issue, version.as_str()))
        })
        .collect();

    candidates.sort_by_key(|(issue, _)| issue.number);

    let Some(&(issue, version)) = candidates.first() else {
        return Err(Error::TrackingIssueNotFound);
    };

    if candidates.len() > 1 {
        let titles = candidates
            .iter()
            .map(|(issue, _)| format!("#{} '{}'", issue.number, issue.title))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(
            "found {} release planning issues ({}), using #{}",
            candidates.len(),
            titles,
            issue.number
        );
    }

    Ok(TrackingIssue {
        number: issue.number,
        title: issue.title.clone(),
        body: issue.body.clone(),
        version: version.to_string(),
    })
}

/// Milestone links whose id does not fit a `u64` are skipped.
pub fn extract_milestone_id(issue: &TrackingIssue) -> Result<MilestoneRef> {
    let ids: Vec<u64> = MILESTONE_URL_REGEX
        .captures_iter(&issue.body)
        .filter_map(|caps| caps.get(1))
        .filter_map(|id| match id.as_str().parse::<u64>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("ignoring milestone id '{}': {e}", id.as_str());
                None
            }
        })
        .collect();

    let Some(&first) = ids.first() else {
        return Err(Error::MilestoneNotFound {
            number: issue.number,
            title: issue.title.clone(),
        });
    };

    if ids.len() > 1 {
        tracing::warn!(
            "issue #{} links {} milestones, using the first one ({})",
            issue.number,
            ids.len(),
            first
        );
    }

    Ok(MilestoneRef(first))
}
