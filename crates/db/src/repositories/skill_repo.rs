//! Repository for the `skills` table.

use folio_core::models::skill::{CreateSkill, Skill};
use folio_core::types::DbId;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, level";

/// Provides create, list and delete for skills. Skills are never updated.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, level) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(input.level)
            .fetch_one(pool)
            .await
    }

    /// List every skill in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY id");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
