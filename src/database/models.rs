//! Database models
//!
//! Rust structs representing database entities. Query results are always
//! surfaced as named records, never positional tuples. All models use
//! serde for serialization to the presentation shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;

/// A school subject with its fixed display color
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    /// Hex RGB display hint, e.g. "#3498db"
    pub color: String,
}

/// A pre-authored note shipped with the application, joined with its
/// subject's name and color
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CuratedNote {
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
    pub content: String,
    pub grade: i64,
    pub created_at: DateTime<Utc>,
    pub subject_name: String,
    pub subject_color: String,
}

/// A note authored by the end user through the editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNote {
    pub id: i64,
    /// Denormalized subject name; user notes may reference subjects
    /// outside the fixed list
    pub subject: String,
    pub title: String,
    pub content: String,
    /// Paths of images copied into the managed image directory
    pub images: Vec<String>,
    pub grade: i64,
    pub created_at: DateTime<Utc>,
}

/// Raw `user_notes` row before the image list is decoded
#[derive(Debug, FromRow)]
pub(crate) struct UserNoteRow {
    pub id: i64,
    pub subject: String,
    pub title: String,
    pub content: String,
    pub images: Option<String>,
    pub grade: i64,
    pub created_at: DateTime<Utc>,
}

impl UserNoteRow {
    pub(crate) fn decode(self) -> Result<UserNote> {
        Ok(UserNote {
            id: self.id,
            subject: self.subject,
            title: self.title,
            content: self.content,
            images: decode_images(self.images.as_deref())?,
            grade: self.grade,
            created_at: self.created_at,
        })
    }
}

/// Decode the serialized image list. NULL and empty both mean "no images".
pub(crate) fn decode_images(raw: Option<&str>) -> Result<Vec<String>> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => Ok(serde_json::from_str(s)?),
    }
}

/// Editor submission for creating or fully replacing a user note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNoteDraft {
    pub subject: String,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
}

/// Per-subject curated note count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubjectCount {
    pub subject: String,
    pub count: i64,
}

/// Aggregate counts shown in the statistics panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub curated_notes: i64,
    pub user_notes: i64,
    pub by_subject: Vec<SubjectCount>,
}
