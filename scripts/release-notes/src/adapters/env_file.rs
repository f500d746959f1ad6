use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use semver::Version;

/// Appends `KEY=value` lines to an environment file, the format GitHub
/// Actions reads back from `$GITHUB_ENV`.
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, vars: &[(&str, String)]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        for (key, value) in vars {
            writeln!(file, "{key}={value}")?;
        }
        Ok(())
    }

    /// Exports `RELEASE_VERSION` and `RELEASE_BRANCH` for later workflow steps.
    pub fn export_release(&self, version: &str) -> std::io::Result<()> {
        let vars = release_vars(version);
        self.append(&vars)?;
        tracing::info!(
            "exported {} to {:?}",
            vars.iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join(" "),
            self.path
        );
        Ok(())
    }
}

pub fn release_vars(version: &str) -> Vec<(&'static str, String)> {
    vec![
        ("RELEASE_VERSION", format!("v{version}")),
        ("RELEASE_BRANCH", release_branch(version)),
    ]
}

/// `release-<major>.<minor>`. Versions that are not semver fall back to
/// their first two dot separated components.
pub fn release_branch(version: &str) -> String {
    match Version::parse(version) {
        Ok(Version { major, minor, .. }) => format!("release-{major}.{minor}"),
        Err(e) => {
            tracing::warn!("'{version}' is not a semver version ({e})");
            let major_minor = version.split('.').take(2).collect::<Vec<_>>().join(".");
            format!("release-{major_minor}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn branch_uses_major_and_minor() {
        assert_eq!(release_branch("0.9.3"), "release-0.9");
        assert_eq!(release_branch("1.0.0-beta.12"), "release-1.0");
    }

    #[test]
    fn branch_of_non_semver_version_uses_leading_components() {
        assert_eq!(release_branch("2.1"), "release-2.1");
        assert_eq!(release_branch("2024.05.x"), "release-2024.05");
    }

    #[test]
    fn release_vars_are_appended() {
        // given
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_env");
        fs::write(&path, "EXISTING=1\n").unwrap();
        let env_file = EnvFile::new(&path);

        // when
        env_file.export_release("0.9.3").unwrap();

        // then
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "EXISTING=1\nRELEASE_VERSION=v0.9.3\nRELEASE_BRANCH=release-0.9\n"
        );
    }

    #[test]
    fn missing_env_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_env");

        EnvFile::new(&path)
            .append(&[("KEY", "value".to_string())])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "KEY=value\n");
    }
}
