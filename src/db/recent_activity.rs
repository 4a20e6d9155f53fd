use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::RecentActivity;

pub async fn list(pool: &PgPool) -> Result<Vec<RecentActivity>, sqlx::Error> {
    sqlx::query_as::<_, RecentActivity>(
        "SELECT * FROM recent_activity ORDER BY occurred_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    actor: &str,
    action: &str,
    occurred_at: DateTime<Utc>,
) -> Result<RecentActivity, sqlx::Error> {
    sqlx::query_as::<_, RecentActivity>(
        "INSERT INTO recent_activity (actor, action, occurred_at)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(actor)
    .bind(action)
    .bind(occurred_at)
    .fetch_one(pool)
    .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recent_activity")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
