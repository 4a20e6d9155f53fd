use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub project_id: Uuid,
    pub date: DateTime<Utc>,
    pub read: bool,
}
