//! Editor starter templates
//!
//! Pre-filled note skeletons the editor inserts on request.

/// Available starter templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTemplate {
    Math,
    Reading,
    World,
}

impl NoteTemplate {
    /// Skeleton text inserted into the editor
    pub fn body(self) -> &'static str {
        match self {
            NoteTemplate::Math => MATH,
            NoteTemplate::Reading => READING,
            NoteTemplate::World => WORLD,
        }
    }
}

const MATH: &str = r#"📌 ТЕМА:
• Правило 1
• Правило 2
• Правило 3

🎯 ПРИМЕРЫ:
1) Пример 1
2) Пример 2
3) Пример 3

❗ ЗАПОМНИ:
Важное правило"#;

const READING: &str = r#"📖 ПРОИЗВЕДЕНИЕ:
Автор:
Жанр:

👥 ГЕРОИ:
• Персонаж 1
• Персонаж 2

🎯 ГЛАВНАЯ МЫСЛЬ:
Текст главной мысли"#;

const WORLD: &str = r#"🌍 ТЕМА:
📅 Время года/период:
📍 Место:

📌 ОСОБЕННОСТИ:
• Особенность 1
• Особенность 2
• Особенность 3

🖼️ ИЛЛЮСТРАЦИИ:
[описание изображения]"#;
