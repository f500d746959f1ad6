pub mod issue_tracker;
pub mod release_notes_writer;
