use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    domain::{
        changes::{collect_changes, contributors},
        models::{ChangeRecord, MilestoneRef, TrackingIssue},
        release_notes::{render_document, ReleaseNoteFields},
        template::load_template,
        tracking::{extract_milestone_id, select_tracking_issue},
    },
    error::Result,
    ports::{issue_tracker::IssueTracker, release_notes_writer::ReleaseNotesWriter},
};

pub const DEFAULT_TEMPLATE_PATH: &str = "docs/release_notes/template.md";

/// Summary of one compiled release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRelease {
    pub version: String,
    pub milestone: MilestoneRef,
    pub changes: Vec<ChangeRecord>,
    pub contributors: Vec<String>,
    pub document: String,
}

impl CompiledRelease {
    pub fn breaking_count(&self) -> usize {
        self.changes.iter().filter(|c| c.is_breaking).count()
    }
}

pub struct ReleaseNoteCompiler<T> {
    tracker: T,
    template_path: PathBuf,
    date: NaiveDate,
}

impl<T: IssueTracker> ReleaseNoteCompiler<T> {
    pub fn new(tracker: T, template_path: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            tracker,
            template_path: template_path.into(),
            date,
        }
    }

    pub async fn find_tracking_issue(&self) -> Result<TrackingIssue> {
        let open_issues = self.tracker.list_open_issues().await?;
        let issue = select_tracking_issue(&open_issues)?;
        tracing::info!(
            "tracking issue #{} '{}' (version {})",
            issue.number,
            issue.title,
            issue.version
        );
        Ok(issue)
    }

    pub async fn collect_milestone_changes(
        &self,
        milestone: MilestoneRef,
    ) -> Result<Vec<ChangeRecord>> {
        let items = self.tracker.list_milestone_items(milestone).await?;

        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            let pr = self.tracker.as_pull_request(&item).await?;
            resolved.push((item, pr));
        }

        Ok(collect_changes(resolved))
    }

    /// Runs the whole pipeline and hands the document to `writer`. Nothing is
    /// written when any step before rendering fails.
    pub async fn compile(&self, writer: &dyn ReleaseNotesWriter) -> Result<CompiledRelease> {
        let issue = self.find_tracking_issue().await?;
        let milestone = extract_milestone_id(&issue)?;

        let changes = self.collect_milestone_changes(milestone).await?;
        let contributors = contributors(&changes);
        tracing::info!(
            "{} merged pull requests by {} contributors",
            changes.len(),
            contributors.len()
        );

        let template = load_template(&self.template_path)?;
        let fields = ReleaseNoteFields::new(&changes, &issue.version, &contributors, self.date);
        let document = render_document(&template, &fields);

        writer.write_release_notes(&issue.version, &document)?;

        Ok(CompiledRelease {
            version: issue.version,
            milestone,
            changes,
            contributors,
            document,
        })
    }
}
