use std::collections::HashSet;

use crate::domain::models::{
    Category, ChangeRecord, PullRequestInfo, TrackerIssue, BREAKING_CHANGE_LABEL,
};

fn category_from_prefix(prefix: &str) -> Option<Category> {
    match prefix.trim().to_lowercase().as_str() {
        "feat" | "feature" => Some(Category::NewFeatures),
        "fix" | "bug" => Some(Category::BugFixes),
        _ => None,
    }
}

/// Splits `title` on its first colon. A known prefix picks the category and
/// the trimmed remainder becomes the note, anything else keeps the whole
/// title under `Miscellaneous`.
pub fn classify_title(title: &str) -> (Category, String) {
    title
        .split_once(':')
        .and_then(|(prefix, rest)| {
            category_from_prefix(prefix).map(|category| (category, rest.trim().to_string()))
        })
        .unwrap_or_else(|| (Category::Miscellaneous, title.to_string()))
}

/// Returns `None` for pull requests that were closed without being merged.
pub fn change_from_pull_request(
    item: &TrackerIssue,
    pr: &PullRequestInfo,
) -> Option<ChangeRecord> {
    if !pr.merged {
        return None;
    }

    let (category, note_text) = classify_title(&pr.title);
    let is_breaking =
        item.has_label(BREAKING_CHANGE_LABEL) || pr.labels.iter().any(|l| l == BREAKING_CHANGE_LABEL);

    Some(ChangeRecord {
        category,
        source_id: pr.number,
        note_text,
        author: if pr.author.is_empty() {
            String::new()
        } else {
            format!("@{}", pr.author)
        },
        url: pr.url.clone(),
        is_breaking,
    })
}

/// Builds the change list of a milestone. Items without a pull request
/// (plain issues) and unmerged pull requests are dropped.
pub fn collect_changes<I>(items: I) -> Vec<ChangeRecord>
where
    I: IntoIterator<Item = (TrackerIssue, Option<PullRequestInfo>)>,
{
    items
        .into_iter()
        .filter_map(|(item, pr)| {
            let pr = pr?;
            let change = change_from_pull_request(&item, &pr);
            if change.is_none() {
                tracing::debug!("skipping #{}: closed without merge", pr.number);
            }
            change
        })
        .collect()
}

/// Deduplicated author handles, compared and sorted case-insensitively. The
/// first casing seen for a login is the one kept. Changes without a known
/// author are left out.
pub fn contributors(changes: &[ChangeRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut handles: Vec<String> = changes
        .iter()
        .filter(|change| !change.author.is_empty())
        .filter(|change| seen.insert(change.author.to_lowercase()))
        .map(|change| change.author.clone())
        .collect();

    handles.sort_by_key(|handle| handle.to_lowercase());
    handles
}
