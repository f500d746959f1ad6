use std::io::Write;

use crate::ports::release_notes_writer::ReleaseNotesWriter;

/// Prints the notes instead of writing them, used for dry runs.
pub struct StdoutReleaseNotesWriter;

impl ReleaseNotesWriter for StdoutReleaseNotesWriter {
    fn write_release_notes(&self, _version: &str, notes: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(notes.as_bytes())?;
        if !notes.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()
    }
}
