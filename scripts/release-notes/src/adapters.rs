pub mod env_file;
pub mod file_release_notes_writer;
pub mod octocrab;
pub mod stdout_release_notes_writer;
