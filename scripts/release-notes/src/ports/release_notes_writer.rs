/// This port abstracts the output of the rendered release notes.
pub trait ReleaseNotesWriter {
    /// Write the notes of release `version`. For example, this could write to a file.
    fn write_release_notes(&self, version: &str, notes: &str) -> std::io::Result<()>;
}
