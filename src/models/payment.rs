use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub project_id: Uuid,
    pub project_name: String,
    pub contractor_name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: String,
    pub invoice_id: String,
}
