use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Alert;

pub async fn list(pool: &PgPool) -> Result<Vec<Alert>, sqlx::Error> {
    sqlx::query_as::<_, Alert>("SELECT * FROM alerts ORDER BY date DESC")
        .fetch_all(pool)
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &PgPool,
    kind: &str,
    title: &str,
    description: &str,
    project_id: Uuid,
    date: DateTime<Utc>,
    read: bool,
) -> Result<Alert, sqlx::Error> {
    sqlx::query_as::<_, Alert>(
        "INSERT INTO alerts (kind, title, description, project_id, date, read)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(kind)
    .bind(title)
    .bind(description)
    .bind(project_id)
    .bind(date)
    .bind(read)
    .fetch_one(pool)
    .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM alerts")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
