//! Reference-data seeding
//!
//! Inserts the fixed subject list and the built-in first-grade notes.
//! Safe to run on every startup: subjects go through INSERT OR IGNORE on
//! the unique name, and a curated note is skipped when its title already
//! exists.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::config::FIRST_GRADE;
use crate::error::Result;

/// The fixed subject list with display colors
const SUBJECTS: &[(&str, &str)] = &[
    ("Математика", "#3498db"),
    ("Русский язык", "#e74c3c"),
    ("Чтение", "#2ecc71"),
    ("Письмо", "#f39c12"),
    ("Окружающий мир", "#9b59b6"),
    ("Технология", "#1abc9c"),
    ("Физкультура", "#e67e22"),
    ("Музыка", "#34495e"),
];

/// Built-in notes keyed by subject name. Subject ids are resolved at
/// insert time, never assumed from insertion order.
const CURATED_NOTES: &[(&str, &str, &str)] = &[
    (
        "Математика",
        "Сложение и вычитание до 10",
        r#"📌 СЛОЖЕНИЕ:
• Объединение двух чисел
• Знак: + (плюс)
• Пример: 3 + 2 = 5

📌 ВЫЧИТАНИЕ:
• Удаление части
• Знак: - (минус)
• Пример: 5 - 2 = 3

📌 ПРАВИЛА:
1. От перестановки слагаемых сумма не меняется
2. Прибавить 0 - число не изменится
3. Вычесть 0 - число не изменится"#,
    ),
    (
        "Математика",
        "Цифры от 0 до 9",
        r#"0 - ноль (ничего)
1 - один (точка)
2 - два (пара)
3 - три (треугольник)
4 - четыре (квадрат)
5 - пять (звезда)
6 - шесть
7 - семь
8 - восемь
9 - девять

🔢 Число - количество предметов
🔢 Цифра - знак для записи числа"#,
    ),
    (
        "Русский язык",
        "Гласные и согласные",
        r#"🎵 ГЛАСНЫЕ ЗВУКИ (6):
А, О, У, Ы, И, Э
• Можно петь
• Образуют слог

🎵 СОГЛАСНЫЕ ЗВУКИ:
• Твердые: Б, В, Г, Д, З, К, Л, М, Н, П, Р, С, Т, Ф, Х
• Мягкие: Бь, Вь, Гь, Дь, Зь, Ль, Мь, Нь, Пь, Рь, Сь, Ть, Фь, Хь

❗ Й, Ч, Щ - всегда мягкие
❗ Ж, Ш, Ц - всегда твердые"#,
    ),
    (
        "Русский язык",
        "Алфавит",
        r#"А Б В Г Д Е Ё Ж З И Й К Л М Н О П Р С Т У Ф Х Ц Ч Ш Щ Ъ Ы Ь Э Ю Я

Всего 33 буквы:
• 10 гласных (А, Е, Ё, И, О, У, Ы, Э, Ю, Я)
• 21 согласная
• 2 знака (Ъ, Ь)"#,
    ),
    (
        "Окружающий мир",
        "Времена года",
        r#"❄️ ЗИМА (декабрь, январь, февраль):
• Снег, лед, мороз
• Новый год, Рождество
• Зимние забавы

🌸 ВЕСНА (март, апрель, май):
• Таяние снега, ледоход
• Первые цветы, почки
• Возвращение птиц

☀️ ЛЕТО (июнь, июль, август):
• Тепло, солнце, дожди
• Ягоды, фрукты, овощи
• Каникулы, отдых

🍂 ОСЕНЬ (сентябрь, октябрь, ноябрь):
• Листопад, дожди, заморозки
• Уборка урожая
• Птицы улетают на юг"#,
    ),
    (
        "Окружающий мир",
        "Дни недели",
        r#"📅 ПОРЯДОК ДНЕЙ:
1. Понедельник
2. Вторник
3. Среда
4. Четверг
5. Пятница
6. Суббота
7. Воскресенье

🎯 ЗАПОМИНАЛКА:
"Пошел Вторник за Средой,
В Четверг встретился с Пятницей,
Суббота с Воскресеньем
Гуляли целую неделю""#,
    ),
    (
        "Чтение",
        "Сказки для чтения",
        r#"📖 РУССКИЕ НАРОДНЫЕ СКАЗКИ:
• "Колобок"
• "Репка"
• "Теремок"
• "Курочка Ряба"

📖 АВТОРСКИЕ СКАЗКИ:
• А.С. Пушкин - "Сказка о рыбаке и рыбке"
• К.И. Чуковский - "Мойдодыр", "Айболит"
• С.Я. Маршак - "Вот какой рассеянный"

🎯 КАК ЧИТАТЬ:
1. Читай вслух
2. Следи за пальцем
3. Делай паузы на точках
4. Выражай голосом эмоции"#,
    ),
    (
        "Письмо",
        "Прописи букв",
        r#"✏️ ПРАВИЛА ПИСЬМА:
1. Сиди прямо
2. Держи ручку правильно
3. Тетрадь под наклоном
4. Соблюдай наклон букв

🔤 ЭЛЕМЕНТЫ БУКВ:
│ - палочка
○ - овал
∩ - полуовал
∼ - крючок

📝 ПРИМЕРЫ:
А - две палочки и перекладина
О - овал
Л - треугольник
М - две палочки и две перекладины"#,
    ),
    (
        "Технология",
        "Аппликация из бумаги",
        r#"✂️ МАТЕРИАЛЫ:
• Цветная бумага
• Ножницы (безопасные)
• Клей-карандаш
• Лист-основа

🎨 ПРОСТЫЕ ПОДЕЛКИ:
1. Гусеница (кружочки)
2. Домик (геометрические фигуры)
3. Цветок (лепестки и серединка)
4. Рыбка (треугольники)

⚠️ ПРАВИЛА БЕЗОПАСНОСТИ:
• Ножницы передавай кольцами вперед
• Не бери клей в рот
• Работай на клеенке"#,
    ),
];

/// Seed subjects and curated notes. Idempotent.
pub async fn seed_reference_data(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Seeding reference data");

    for (name, color) in SUBJECTS {
        sqlx::query("INSERT OR IGNORE INTO subjects (name, color) VALUES (?, ?)")
            .bind(name)
            .bind(color)
            .execute(pool)
            .await?;
    }

    let now = Utc::now();

    for (subject, title, content) in CURATED_NOTES {
        let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM notes WHERE title = ?")
            .bind(title)
            .fetch_optional(pool)
            .await?;

        if exists.is_some() {
            continue;
        }

        let subject_id: i64 = sqlx::query_scalar("SELECT id FROM subjects WHERE name = ?")
            .bind(subject)
            .fetch_one(pool)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO notes (subject_id, title, content, grade, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(subject_id)
        .bind(title)
        .bind(content)
        .bind(FIRST_GRADE)
        .bind(now)
        .execute(pool)
        .await?;
    }

    tracing::info!("Reference data ready");
    Ok(())
}
