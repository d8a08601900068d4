//! Notes service
//!
//! High-level operations behind the presentation shell: browsing and
//! searching curated notes, the user-note lifecycle with validation, and
//! statistics.

use crate::database::{CuratedNote, Repository, Statistics, Subject, UserNote, UserNoteDraft};
use crate::error::{AppError, Result};

/// Service for browsing and authoring notes
#[derive(Clone)]
pub struct NotesService {
    repo: Repository,
}

impl NotesService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Subjects in sidebar order
    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.repo.list_subjects().await
    }

    /// Curated notes for one subject
    pub async fn notes_for_subject(&self, subject_id: i64) -> Result<Vec<CuratedNote>> {
        self.repo.notes_by_subject(subject_id).await
    }

    /// All curated notes, optionally filtered to one subject name
    pub async fn all_notes(&self, subject_filter: Option<&str>) -> Result<Vec<CuratedNote>> {
        self.repo.all_notes(subject_filter).await
    }

    /// Substring search over curated titles and contents. A blank
    /// keyword is a no-op and returns nothing.
    pub async fn search(&self, keyword: &str) -> Result<Vec<CuratedNote>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!("Searching notes for '{}'", keyword);
        self.repo.search_notes(keyword).await
    }

    /// Create a user note after validating the draft
    pub async fn create_user_note(&self, draft: UserNoteDraft) -> Result<UserNote> {
        validate(&draft)?;

        tracing::info!("Creating user note: {}", draft.title);
        self.repo.add_user_note(&draft).await
    }

    /// User notes, newest first
    pub async fn user_notes(&self) -> Result<Vec<UserNote>> {
        self.repo.list_user_notes().await
    }

    /// Fetch one user note
    pub async fn user_note(&self, id: i64) -> Result<UserNote> {
        self.repo.get_user_note(id).await
    }

    /// Replace a user note's mutable fields after validating the draft
    pub async fn update_user_note(&self, id: i64, draft: UserNoteDraft) -> Result<UserNote> {
        validate(&draft)?;

        tracing::info!("Updating user note: {}", id);
        self.repo.update_user_note(id, &draft).await
    }

    /// Delete a user note
    pub async fn delete_user_note(&self, id: i64) -> Result<()> {
        tracing::info!("Deleting user note: {}", id);
        self.repo.delete_user_note(id).await
    }

    /// Clone a curated note into the user's own collection
    pub async fn save_copy(&self, note: &CuratedNote) -> Result<UserNote> {
        let draft = UserNoteDraft {
            subject: note.subject_name.clone(),
            title: format!("Копия: {}", note.title),
            content: note.content.clone(),
            images: Vec::new(),
        };

        tracing::info!("Copying curated note {} into user notes", note.id);
        self.repo.add_user_note(&draft).await
    }

    /// Aggregate counts for the statistics panel
    pub async fn statistics(&self) -> Result<Statistics> {
        self.repo.statistics().await
    }
}

/// Check the editor's required fields, collecting every failure so the
/// user sees them all at once
fn validate(draft: &UserNoteDraft) -> Result<()> {
    let mut errors = Vec::new();

    if draft.subject.trim().is_empty() {
        errors.push("Выберите предмет".to_string());
    }
    if draft.title.trim().is_empty() {
        errors.push("Введите название конспекта".to_string());
    }
    if draft.content.trim().is_empty() {
        errors.push("Введите содержание конспекта".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
