use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Expense, Project, Task};

pub struct NewProject<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub progress: i32,
    pub budget: f64,
    pub spent: f64,
    pub status: &'a str,
    pub tasks: &'a [Task],
    pub assigned_contractors: &'a [String],
    pub expenses: &'a [Expense],
}

pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewProject<'_>) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects
         (name, description, progress, budget, spent, status, tasks, assigned_contractors, expenses)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(new.name)
    .bind(new.description)
    .bind(new.progress)
    .bind(new.budget)
    .bind(new.spent)
    .bind(new.status)
    .bind(Json(new.tasks))
    .bind(Json(new.assigned_contractors))
    .bind(Json(new.expenses))
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(pool: &PgPool, id: Uuid, new: &NewProject<'_>) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET name = $2, description = $3, progress = $4, budget = $5,
         spent = $6, status = $7, tasks = $8, assigned_contractors = $9, expenses = $10,
         updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(new.name)
    .bind(new.description)
    .bind(new.progress)
    .bind(new.budget)
    .bind(new.spent)
    .bind(new.status)
    .bind(Json(new.tasks))
    .bind(Json(new.assigned_contractors))
    .bind(Json(new.expenses))
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
