use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ports::release_notes_writer::ReleaseNotesWriter;

pub const RELEASE_NOTES_DIR: &str = "docs/release_notes";

/// Writes `docs/release_notes/v<version>.md` under the repository root,
/// replacing any previous notes of the same release.
pub struct FileReleaseNotesWriter {
    pub root: PathBuf,
}

impl FileReleaseNotesWriter {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn release_notes_path(&self, version: &str) -> PathBuf {
        self.root
            .join(RELEASE_NOTES_DIR)
            .join(format!("v{version}.md"))
    }
}

impl ReleaseNotesWriter for FileReleaseNotesWriter {
    fn write_release_notes(&self, version: &str, notes: &str) -> std::io::Result<()> {
        let path = self.release_notes_path(version);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(&path)?;
        file.write_all(notes.as_bytes())?;
        tracing::info!("release notes written to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_derived_from_version() {
        let writer = FileReleaseNotesWriter::new("/repo");

        let path = writer.release_notes_path("1.2.3");

        assert_eq!(path, PathBuf::from("/repo/docs/release_notes/v1.2.3.md"));
    }

    #[test]
    fn creates_missing_directories() {
        // given
        let root = tempfile::tempdir().unwrap();
        let writer = FileReleaseNotesWriter::new(root.path());

        // when
        writer.write_release_notes("0.1.0", "notes").unwrap();

        // then
        let written = fs::read_to_string(writer.release_notes_path("0.1.0")).unwrap();
        assert_eq!(written, "notes");
    }

    #[test]
    fn overwrites_existing_notes() {
        // given
        let root = tempfile::tempdir().unwrap();
        let writer = FileReleaseNotesWriter::new(root.path());
        writer
            .write_release_notes("0.1.0", "a much longer first draft")
            .unwrap();

        // when
        writer.write_release_notes("0.1.0", "final").unwrap();

        // then
        let written = fs::read_to_string(writer.release_notes_path("0.1.0")).unwrap();
        assert_eq!(written, "final");
    }
}
