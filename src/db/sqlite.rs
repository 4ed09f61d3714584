use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::{DEFAULT_CATEGORIES, SQLITE_INIT};
use crate::error::TriviaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// Open a pool for `database_url`, creating the database file when missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, TriviaError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the default categories if the table is empty. Returns how many were inserted.
    pub async fn seed_categories(&self) -> Result<usize, TriviaError> {
        let mut tx = self.pool.begin().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            return Ok(0);
        }

        for (id, kind) in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(id)
                .bind(kind)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(DEFAULT_CATEGORIES.len())
    }

    /// All categories ordered by their display label.
    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY type")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// All questions ordered by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(&format!("{QUESTION_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_questions_by_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "{QUESTION_COLUMNS} WHERE category = ? ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a question and return its id.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64, TriviaError> {
        let done = sqlx::query(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(done.last_insert_rowid())
    }

    /// Delete by id. Returns `false` when no row matched.
    pub async fn delete_question(&self, id: i64) -> Result<bool, TriviaError> {
        let done = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    /// Questions eligible for a quiz draw: optionally restricted to one category,
    /// never containing an id from `exclude`.
    ///
    /// `exclude` is bound as a single JSON array so its length is not capped by
    /// SQLite's host parameter limit.
    pub async fn quiz_pool(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, TriviaError> {
        let exclude_json =
            serde_json::to_string(exclude).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let mut qb = QueryBuilder::<Sqlite>::new(QUESTION_COLUMNS);
        qb.push(" WHERE id NOT IN (SELECT value FROM json_each(")
            .push_bind(exclude_json)
            .push("))");

        if let Some(category) = category {
            qb.push(" AND category = ").push_bind(category);
        }

        qb.push(" ORDER BY id");
        let rows = qb.build_query_as::<Question>().fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
