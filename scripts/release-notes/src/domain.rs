pub mod changes;
pub mod models;
pub mod release_notes;
pub mod template;
pub mod tracking;
