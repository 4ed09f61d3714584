//! SQL DDL for initializing the trivia store.

/// SQLite schema with:
/// - `categories`: `id` INTEGER PRIMARY KEY, `type` display label
/// - `questions`: `id` INTEGER PRIMARY KEY AUTOINCREMENT, `category` references `categories(id)`
/// - index on `questions(category)` for category listing and quiz pools
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    difficulty INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;

/// Standard trivia categories inserted into an empty store.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];
