//! Note import and export
//!
//! Plain-text transfer of notes: reading a file in as editor content and
//! writing notes out with the fixed header block.

use std::path::Path;

use tokio::fs;

use crate::config::EXPORT_RULE_LEN;
use crate::database::UserNote;
use crate::error::Result;

/// Draft produced from an imported file. The editor is pre-filled with
/// these values and the user picks the subject before saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedNote {
    pub title: String,
    pub content: String,
}

/// Read a UTF-8 text file as note content; the title comes from the
/// file stem.
pub async fn import_note(path: &Path) -> Result<ImportedNote> {
    let content = fs::read_to_string(path).await?;

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::info!("Imported note draft from {:?}", path);

    Ok(ImportedNote { title, content })
}

/// Write one note to `path` with the viewer's export header
pub async fn export_note(path: &Path, title: &str, subject: &str, content: &str) -> Result<()> {
    let text = format!(
        "Конспект: {}\nПредмет: {}\nКласс: 1\n{}\n\n{}",
        title,
        subject,
        "=".repeat(EXPORT_RULE_LEN),
        content
    );

    fs::write(path, text).await?;

    tracing::info!("Exported note '{}' to {:?}", title, path);
    Ok(())
}

/// Export every user note into `dir` as `{title}.txt`. Individual
/// failures are logged and skipped; the count of written files is
/// returned.
pub async fn export_user_notes(dir: &Path, notes: &[UserNote]) -> Result<usize> {
    let mut exported = 0;

    for note in notes {
        let path = dir.join(format!("{}.txt", file_stem_for(note)));
        let text = format!(
            "Конспект: {}\nПредмет: {}\nДата создания: {}\n{}\n\n{}",
            note.title,
            note.subject,
            note.created_at,
            "=".repeat(EXPORT_RULE_LEN),
            note.content
        );

        match fs::write(&path, text).await {
            Ok(()) => exported += 1,
            Err(e) => tracing::warn!("Skipping export of '{}': {}", note.title, e),
        }
    }

    tracing::info!(
        "Exported {} of {} user notes to {:?}",
        exported,
        notes.len(),
        dir
    );
    Ok(exported)
}

/// Reduce a title to a safe file stem. Falls back to the note id when
/// nothing survives the filter.
fn file_stem_for(note: &UserNote) -> String {
    let stem: String = note
        .title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = stem.trim_end();

    if stem.is_empty() {
        format!("konspekt_{}", note.id)
    } else {
        stem.to_string()
    }
}
