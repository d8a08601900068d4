//! Repository layer for database operations
//!
//! Query and write operations for subjects, curated notes and user notes.
//! The repository owns the pool handle; consumers receive it by injection
//! and never touch ambient connection state.

use super::models::{
    CuratedNote, Statistics, Subject, SubjectCount, UserNote, UserNoteDraft, UserNoteRow,
};
use crate::config::FIRST_GRADE;
use crate::error::{AppError, Result};
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Release the underlying pool. Called exactly once at controlled
    /// shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// List all subjects in id order
    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let subjects =
            sqlx::query_as::<_, Subject>("SELECT id, name, color FROM subjects ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(subjects)
    }

    /// Curated notes for one subject, ordered by title
    pub async fn notes_by_subject(&self, subject_id: i64) -> Result<Vec<CuratedNote>> {
        let notes = sqlx::query_as::<_, CuratedNote>(
            r#"
            SELECT n.id, n.subject_id, n.title, n.content, n.grade, n.created_at,
                   s.name AS subject_name, s.color AS subject_color
            FROM notes n
            JOIN subjects s ON n.subject_id = s.id
            WHERE n.subject_id = ? AND n.grade = ?
            ORDER BY n.title
            "#,
        )
        .bind(subject_id)
        .bind(FIRST_GRADE)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// Curated notes whose title or content contains the keyword as a
    /// literal substring, ordered by title
    pub async fn search_notes(&self, keyword: &str) -> Result<Vec<CuratedNote>> {
        let pattern = format!("%{}%", escape_like(keyword));

        let notes = sqlx::query_as::<_, CuratedNote>(
            r#"
            SELECT n.id, n.subject_id, n.title, n.content, n.grade, n.created_at,
                   s.name AS subject_name, s.color AS subject_color
            FROM notes n
            JOIN subjects s ON n.subject_id = s.id
            WHERE (n.title LIKE ? ESCAPE '\' OR n.content LIKE ? ESCAPE '\')
              AND n.grade = ?
            ORDER BY n.title
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(FIRST_GRADE)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Search '{}' matched {} notes", keyword, notes.len());
        Ok(notes)
    }

    /// All curated notes, optionally restricted to one subject name,
    /// ordered by subject name then title
    pub async fn all_notes(&self, subject_filter: Option<&str>) -> Result<Vec<CuratedNote>> {
        let notes = match subject_filter {
            Some(name) => {
                sqlx::query_as::<_, CuratedNote>(
                    r#"
                    SELECT n.id, n.subject_id, n.title, n.content, n.grade, n.created_at,
                           s.name AS subject_name, s.color AS subject_color
                    FROM notes n
                    JOIN subjects s ON n.subject_id = s.id
                    WHERE n.grade = ? AND s.name = ?
                    ORDER BY s.name, n.title
                    "#,
                )
                .bind(FIRST_GRADE)
                .bind(name)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, CuratedNote>(
                    r#"
                    SELECT n.id, n.subject_id, n.title, n.content, n.grade, n.created_at,
                           s.name AS subject_name, s.color AS subject_color
                    FROM notes n
                    JOIN subjects s ON n.subject_id = s.id
                    WHERE n.grade = ?
                    ORDER BY s.name, n.title
                    "#,
                )
                .bind(FIRST_GRADE)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(notes)
    }

    /// Persist a new user note, returning the stored row
    pub async fn add_user_note(&self, draft: &UserNoteDraft) -> Result<UserNote> {
        let now = Utc::now();
        let images = serde_json::to_string(&draft.images)?;

        let row = sqlx::query_as::<_, UserNoteRow>(
            r#"
            INSERT INTO user_notes (subject, title, content, images, grade, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&draft.subject)
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(&images)
        .bind(FIRST_GRADE)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created user note: {}", row.id);
        row.decode()
    }

    /// Get a user note by id
    pub async fn get_user_note(&self, id: i64) -> Result<UserNote> {
        let row = sqlx::query_as::<_, UserNoteRow>("SELECT * FROM user_notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NoteNotFound(id))?;

        row.decode()
    }

    /// User notes, newest first
    pub async fn list_user_notes(&self) -> Result<Vec<UserNote>> {
        let rows =
            sqlx::query_as::<_, UserNoteRow>("SELECT * FROM user_notes ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(UserNoteRow::decode).collect()
    }

    /// Replace the four mutable fields of a user note. The id and
    /// created_at never change.
    pub async fn update_user_note(&self, id: i64, draft: &UserNoteDraft) -> Result<UserNote> {
        let images = serde_json::to_string(&draft.images)?;

        let rows = sqlx::query(
            r#"
            UPDATE user_notes
            SET subject = ?, title = ?, content = ?, images = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.subject)
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(&images)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(AppError::NoteNotFound(id));
        }

        tracing::debug!("Updated user note: {}", id);
        self.get_user_note(id).await
    }

    /// Delete a user note
    pub async fn delete_user_note(&self, id: i64) -> Result<()> {
        let rows = sqlx::query("DELETE FROM user_notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NoteNotFound(id));
        }

        tracing::debug!("Deleted user note: {}", id);
        Ok(())
    }

    /// Aggregate counts for the statistics panel
    pub async fn statistics(&self) -> Result<Statistics> {
        let curated_notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE grade = ?")
            .bind(FIRST_GRADE)
            .fetch_one(&self.pool)
            .await?;

        let user_notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_notes")
            .fetch_one(&self.pool)
            .await?;

        let by_subject = sqlx::query_as::<_, SubjectCount>(
            r#"
            SELECT s.name AS subject, COUNT(n.id) AS count
            FROM notes n
            JOIN subjects s ON n.subject_id = s.id
            WHERE n.grade = ?
            GROUP BY s.name
            ORDER BY s.name
            "#,
        )
        .bind(FIRST_GRADE)
        .fetch_all(&self.pool)
        .await?;

        Ok(Statistics {
            curated_notes,
            user_notes,
            by_subject,
        })
    }
}

/// Escape LIKE wildcards so a keyword matches as a literal substring
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::initialize_database;
    use crate::database::seed::seed_reference_data;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_repo() -> Repository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();
        seed_reference_data(&pool).await.unwrap();

        Repository::new(pool)
    }

    fn draft(subject: &str, title: &str, content: &str, images: &[&str]) -> UserNoteDraft {
        UserNoteDraft {
            subject: subject.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_list_subjects_in_id_order() {
        let repo = create_test_repo().await;

        let subjects = repo.list_subjects().await.unwrap();

        assert_eq!(subjects.len(), 8);
        assert_eq!(subjects[0].name, "Математика");
        assert_eq!(subjects[0].color, "#3498db");
        assert_eq!(subjects[7].name, "Музыка");
        assert!(subjects.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_notes_by_subject_ordered_by_title() {
        let repo = create_test_repo().await;

        let math = repo
            .list_subjects()
            .await
            .unwrap()
            .into_iter()
            .find(|s| s.name == "Математика")
            .unwrap();

        let notes = repo.notes_by_subject(math.id).await.unwrap();

        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Сложение и вычитание до 10", "Цифры от 0 до 9"]);
        assert!(notes.iter().all(|n| n.subject_name == "Математика"));
        assert!(notes.iter().all(|n| n.subject_color == "#3498db"));
    }

    #[tokio::test]
    async fn test_notes_by_subject_empty_for_unseeded_subject() {
        let repo = create_test_repo().await;

        let music = repo
            .list_subjects()
            .await
            .unwrap()
            .into_iter()
            .find(|s| s.name == "Музыка")
            .unwrap();

        let notes = repo.notes_by_subject(music.id).await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_title_and_content() {
        let repo = create_test_repo().await;

        let by_title = repo.search_notes("Алфавит").await.unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Алфавит");

        // "плюс" appears only in the addition note's content
        let by_content = repo.search_notes("плюс").await.unwrap();
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].title, "Сложение и вычитание до 10");

        let none = repo.search_notes("нет такого слова").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = create_test_repo().await;

        // A bare "%" would match every note if passed through unescaped
        let notes = repo.search_notes("%").await.unwrap();
        assert!(notes.is_empty());

        let underscore = repo.search_notes("_").await.unwrap();
        assert!(underscore.is_empty());
    }

    #[tokio::test]
    async fn test_all_notes_grouped_and_filtered() {
        let repo = create_test_repo().await;

        let all = repo.all_notes(None).await.unwrap();
        assert_eq!(all.len(), 9);

        // Ordered by subject name, then title
        let keys: Vec<(&str, &str)> = all
            .iter()
            .map(|n| (n.subject_name.as_str(), n.title.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let math_only = repo.all_notes(Some("Математика")).await.unwrap();
        assert_eq!(math_only.len(), 2);

        let unknown = repo.all_notes(Some("Астрономия")).await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_user_note_round_trip() {
        let repo = create_test_repo().await;

        let note = repo
            .add_user_note(&draft(
                "Математика",
                "Мой конспект",
                "📌 ТЕМА:\n• Пункт",
                &["user_images/1_схема.png"],
            ))
            .await
            .unwrap();

        let fetched = repo.get_user_note(note.id).await.unwrap();
        assert_eq!(fetched.subject, "Математика");
        assert_eq!(fetched.title, "Мой конспект");
        assert_eq!(fetched.content, "📌 ТЕМА:\n• Пункт");
        assert_eq!(fetched.images, vec!["user_images/1_схема.png"]);
        assert_eq!(fetched.grade, 1);
    }

    #[tokio::test]
    async fn test_user_note_empty_images_round_trip() {
        let repo = create_test_repo().await;

        let note = repo
            .add_user_note(&draft("Чтение", "Без картинок", "текст", &[]))
            .await
            .unwrap();

        let fetched = repo.get_user_note(note.id).await.unwrap();
        assert!(fetched.images.is_empty());
    }

    #[tokio::test]
    async fn test_list_user_notes_newest_first() {
        let repo = create_test_repo().await;

        let first = repo
            .add_user_note(&draft("Чтение", "Первый", "а", &[]))
            .await
            .unwrap();
        let second = repo
            .add_user_note(&draft("Чтение", "Второй", "б", &[]))
            .await
            .unwrap();

        let notes = repo.list_user_notes().await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, second.id);
        assert_eq!(notes[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields_only() {
        let repo = create_test_repo().await;

        let note = repo
            .add_user_note(&draft("Чтение", "Старое", "старый текст", &[]))
            .await
            .unwrap();

        let updated = repo
            .update_user_note(
                note.id,
                &draft("Музыка", "Новое", "новый текст", &["user_images/2_ноты.png"]),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.created_at, note.created_at);
        assert_eq!(updated.subject, "Музыка");
        assert_eq!(updated.title, "Новое");
        assert_eq!(updated.content, "новый текст");
        assert_eq!(updated.images, vec!["user_images/2_ноты.png"]);
    }

    #[tokio::test]
    async fn test_update_missing_note_is_not_found() {
        let repo = create_test_repo().await;

        let result = repo
            .update_user_note(9999, &draft("Чтение", "x", "y", &[]))
            .await;

        assert!(matches!(result, Err(AppError::NoteNotFound(9999))));
    }

    #[tokio::test]
    async fn test_delete_user_note() {
        let repo = create_test_repo().await;

        let note = repo
            .add_user_note(&draft("Чтение", "На удаление", "текст", &[]))
            .await
            .unwrap();

        repo.delete_user_note(note.id).await.unwrap();

        let result = repo.get_user_note(note.id).await;
        assert!(matches!(result, Err(AppError::NoteNotFound(_))));

        let again = repo.delete_user_note(note.id).await;
        assert!(matches!(again, Err(AppError::NoteNotFound(_))));
    }

    #[tokio::test]
    async fn test_statistics() {
        let repo = create_test_repo().await;

        let before = repo.statistics().await.unwrap();
        assert_eq!(before.curated_notes, 9);
        assert_eq!(before.user_notes, 0);

        // Only subjects that actually have curated notes appear
        assert_eq!(before.by_subject.len(), 6);
        let math = before
            .by_subject
            .iter()
            .find(|c| c.subject == "Математика")
            .unwrap();
        assert_eq!(math.count, 2);
        assert!(before
            .by_subject
            .windows(2)
            .all(|w| w[0].subject < w[1].subject));

        let note = repo
            .add_user_note(&draft("Чтение", "Счётчик", "текст", &[]))
            .await
            .unwrap();
        assert_eq!(repo.statistics().await.unwrap().user_notes, 1);

        repo.delete_user_note(note.id).await.unwrap();
        assert_eq!(repo.statistics().await.unwrap().user_notes, 0);
    }
}
