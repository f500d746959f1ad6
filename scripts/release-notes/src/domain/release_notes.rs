use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{
    models::{Category, ChangeRecord},
    template::substitute,
};

pub const NO_BREAKING_CHANGES: &str = "None.";

pub const BREAKING_CHANGES_WARNING: &str = "> **Warning:** this release contains breaking changes, \
read the Breaking Changes section before upgrading.";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Values for the template placeholders of the same names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNoteFields {
    pub version: String,
    pub changes: String,
    pub breaking_changes: String,
    pub warnings: String,
    pub contributors: String,
    pub date: String,
}

impl ReleaseNoteFields {
    pub fn new(
        changes: &[ChangeRecord],
        version: &str,
        contributors: &[String],
        date: NaiveDate,
    ) -> Self {
        let mut sorted = changes.to_vec();
        sort_changes(&mut sorted);

        let breaking = generate_breaking_changes(&sorted);
        let warnings = if breaking.is_empty() {
            String::new()
        } else {
            BREAKING_CHANGES_WARNING.to_string()
        };

        Self {
            version: version.to_string(),
            changes: generate_change_list(&sorted),
            breaking_changes: if breaking.is_empty() {
                NO_BREAKING_CHANGES.to_string()
            } else {
                breaking
            },
            warnings,
            contributors: contributors.join(", "),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn values(&self) -> HashMap<&'static str, &str> {
        HashMap::from([
            ("version", self.version.as_str()),
            ("changes", self.changes.as_str()),
            ("breaking_changes", self.breaking_changes.as_str()),
            ("warnings", self.warnings.as_str()),
            ("contributors", self.contributors.as_str()),
            ("date", self.date.as_str()),
        ])
    }
}

/// Orders by category, then by ascending pull request number.
pub fn sort_changes(changes: &mut [ChangeRecord]) {
    changes.sort_by_key(|change| (change.category, change.source_id));
}

/// Expects `changes` already sorted, see [`sort_changes`].
pub fn generate_change_list(changes: &[ChangeRecord]) -> String {
    let mut content = String::new();
    let mut current: Option<Category> = None;

    for change in changes {
        if current != Some(change.category) {
            if current.is_some() {
                content.push('\n');
            }
            content.push_str(&format!("### {}\n\n", change.category.heading()));
            current = Some(change.category);
        }
        content.push_str(&change.bullet_point());
        content.push('\n');
    }

    content.trim_end().to_string()
}

pub fn generate_breaking_changes(changes: &[ChangeRecord]) -> String {
    changes
        .iter()
        .filter(|change| change.is_breaking)
        .map(ChangeRecord::bullet_point)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_document(template: &str, fields: &ReleaseNoteFields) -> String {
    substitute(template, &fields.values())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn change(category: Category, id: u64, note: &str, author: &str) -> ChangeRecord {
        ChangeRecord {
            category,
            source_id: id,
            note_text: note.to_string(),
            author: format!("@{author}"),
            url: format!("https://x.io/pull/{id}"),
            is_breaking: false,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn changes_within_a_category_follow_pull_request_number() {
        // given
        let changes = vec![
            change(Category::NewFeatures, 42, "second", "a"),
            change(Category::NewFeatures, 7, "first", "b"),
        ];

        // when
        let fields = ReleaseNoteFields::new(&changes, "1.0.0", &[], date());

        // then
        assert_eq!(
            fields.changes,
            "\
### New Features

- first ([#7](https://x.io/pull/7), @b)
- second ([#42](https://x.io/pull/42), @a)"
        );
    }

    #[test]
    fn each_category_gets_one_heading_in_fixed_order() {
        // given
        let changes = vec![
            change(Category::Miscellaneous, 1, "Refactor internals", "c"),
            change(Category::BugFixes, 5, "fix crash", "b"),
            change(Category::NewFeatures, 9, "add caching", "a"),
            change(Category::BugFixes, 2, "fix leak", "b"),
        ];

        // when
        let fields = ReleaseNoteFields::new(&changes, "1.0.0", &[], date());

        // then
        assert_eq!(
            fields.changes,
            "\
### New Features

- add caching ([#9](https://x.io/pull/9), @a)

### Bug Fixes

- fix leak ([#2](https://x.io/pull/2), @b)
- fix crash ([#5](https://x.io/pull/5), @b)

### Miscellaneous

- Refactor internals ([#1](https://x.io/pull/1), @c)"
        );
    }

    #[test]
    fn empty_categories_have_no_heading() {
        let changes = vec![change(Category::BugFixes, 3, "fix", "a")];

        let fields = ReleaseNoteFields::new(&changes, "1.0.0", &[], date());

        assert!(!fields.changes.contains("New Features"));
        assert!(!fields.changes.contains("Miscellaneous"));
    }

    #[test]
    fn no_breaking_changes_renders_none_and_no_warning() {
        let changes = vec![change(Category::NewFeatures, 1, "x", "a")];

        let fields = ReleaseNoteFields::new(&changes, "1.0.0", &[], date());

        assert_eq!(fields.breaking_changes, "None.");
        assert_eq!(fields.warnings, "");
    }

    #[test]
    fn breaking_changes_are_listed_and_trigger_the_warning() {
        // given
        let mut api = change(Category::NewFeatures, 11, "new api", "a");
        api.is_breaking = true;
        let mut removal = change(Category::Miscellaneous, 4, "drop v1 config", "b");
        removal.is_breaking = true;
        let changes = vec![removal, change(Category::BugFixes, 2, "fix", "c"), api];

        // when
        let fields = ReleaseNoteFields::new(&changes, "2.0.0", &[], date());

        // then
        assert_eq!(
            fields.breaking_changes,
            "\
- new api ([#11](https://x.io/pull/11), @a)
- drop v1 config ([#4](https://x.io/pull/4), @b)"
        );
        assert_eq!(fields.warnings, BREAKING_CHANGES_WARNING);
    }

    #[test]
    fn renders_every_field_into_the_template() {
        // given
        let template = "\
# Release v$version ($date)

$warnings

## Changes

$changes

## Breaking Changes

$breaking_changes

## Contributors

$contributors
";
        let changes = vec![change(Category::BugFixes, 3, "fix crash", "alice")];
        let contributors = vec!["@alice".to_string(), "@bob".to_string()];
        let fields = ReleaseNoteFields::new(&changes, "0.8.1", &contributors, date());

        // when
        let document = render_document(template, &fields);

        // then
        assert_eq!(
            document,
            "\
# Release v0.8.1 (2024-03-09)



## Changes

### Bug Fixes

- fix crash ([#3](https://x.io/pull/3), @alice)

## Breaking Changes

None.

## Contributors

@alice, @bob
"
        );
    }

    #[test]
    fn empty_template_renders_empty_document() {
        let fields = ReleaseNoteFields::new(&[], "1.0.0", &[], date());

        assert_eq!(render_document("", &fields), "");
    }
}
