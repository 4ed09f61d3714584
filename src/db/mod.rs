//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup and the question/category queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, CategoryMap, NewQuestion, Question};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TriviaStorage, connect};

/// Connect to `database_url` and make sure the schema exists.
pub async fn open(database_url: &str) -> Result<TriviaStorage, crate::TriviaError> {
    let pool = connect(database_url).await?;
    let storage = TriviaStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
