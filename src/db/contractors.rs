use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Contractor;

pub async fn list(pool: &PgPool) -> Result<Vec<Contractor>, sqlx::Error> {
    sqlx::query_as::<_, Contractor>("SELECT * FROM contractors ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    company: &str,
    status: &str,
    project_count: i32,
    avatar: &str,
) -> Result<Contractor, sqlx::Error> {
    sqlx::query_as::<_, Contractor>(
        "INSERT INTO contractors (name, company, status, project_count, avatar)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(name)
    .bind(company)
    .bind(status)
    .bind(project_count)
    .bind(avatar)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Contractor>, sqlx::Error> {
    sqlx::query_as::<_, Contractor>("SELECT * FROM contractors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    company: &str,
    status: &str,
    project_count: i32,
    avatar: &str,
) -> Result<Contractor, sqlx::Error> {
    sqlx::query_as::<_, Contractor>(
        "UPDATE contractors SET name = $2, company = $3, status = $4, project_count = $5,
         avatar = $6 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(company)
    .bind(status)
    .bind(project_count)
    .bind(avatar)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM contractors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contractors")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
