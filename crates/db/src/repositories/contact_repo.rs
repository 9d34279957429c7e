//! Repository for the `contacts` table.

use folio_core::models::contact::{Contact, CreateContact};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, message, created_at";

/// Stores contact messages. The API never reads them back; [`ContactRepo::list`]
/// exists for operators and tests.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new message. `created_at` is stamped by the database.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List every stored message, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at, id");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }
}
