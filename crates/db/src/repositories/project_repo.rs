//! The `projects` collection.

use folio_core::models::project::{CreateProject, Project, UpdateProject};
use folio_core::types::DbId;
use sqlx::PgPool;

const PROJECT_FIELDS: &str = "id, title, description, tech, repo, demo";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Store a validated project. A missing `tech` is stored as an empty list.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let sql = format!(
            "INSERT INTO projects (title, description, tech, repo, demo) \
             VALUES ($1, $2, COALESCE($3, '{{}}'::TEXT[]), $4, $5) \
             RETURNING {PROJECT_FIELDS}"
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.tech.as_deref())
            .bind(input.repo.as_deref())
            .bind(input.demo.as_deref())
            .fetch_one(pool)
            .await
    }

    /// All projects, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let sql = format!("SELECT {PROJECT_FIELDS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&sql).fetch_all(pool).await
    }

    /// Overwrite the fields present in `input`, leaving the rest as stored.
    /// An empty `repo` or `demo` clears that link. `Ok(None)` means the id
    /// is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let sql = format!(
            "UPDATE projects \
             SET title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 tech = COALESCE($4, tech), \
                 repo = CASE WHEN $5::TEXT IS NULL THEN repo ELSE NULLIF($5, '') END, \
                 demo = CASE WHEN $6::TEXT IS NULL THEN demo ELSE NULLIF($6, '') END \
             WHERE id = $1 \
             RETURNING {PROJECT_FIELDS}"
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.tech.as_deref())
            .bind(input.repo.as_deref())
            .bind(input.demo.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Remove a project; `false` if there was nothing to remove.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let done = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(done.rows_affected() == 1)
    }
}
