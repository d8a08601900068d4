//! Application configuration constants
//!
//! Central location for file names, managed directory names and domain
//! constants used throughout the crate.

// ===== Storage Layout =====

/// SQLite database file name inside the application data directory
pub const DATABASE_FILE: &str = "school_notes.db";

/// Directory for images copied in from the user's filesystem
pub const USER_IMAGES_DIR: &str = "user_images";

/// Default target directory for note exports
pub const EXPORTS_DIR: &str = "exports";

/// Directory reserved for database backups
pub const BACKUPS_DIR: &str = "backups";

// ===== Domain Constants =====

/// The only school grade the current curriculum covers.
/// Every curated-note query filters on this value.
pub const FIRST_GRADE: i64 = 1;

/// Width of the `=` rule separating the export header from the note body
pub const EXPORT_RULE_LEN: usize = 50;
