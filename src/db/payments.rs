use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Payment;

pub async fn list(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY date DESC")
        .fetch_all(pool)
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &PgPool,
    project_id: Uuid,
    project_name: &str,
    contractor_name: &str,
    amount: f64,
    date: NaiveDate,
    status: &str,
    invoice_id: &str,
) -> Result<Payment, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        "INSERT INTO payments (project_id, project_name, contractor_name, amount, date, status, invoice_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(project_id)
    .bind(project_name)
    .bind(contractor_name)
    .bind(amount)
    .bind(date)
    .bind(status)
    .bind(invoice_id)
    .fetch_one(pool)
    .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
