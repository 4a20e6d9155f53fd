use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Contractor {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub status: String,
    pub project_count: i32,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

pub const CONTRACTOR_STATUSES: &[&str] = &["Active", "Inactive"];
