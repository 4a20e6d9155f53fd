use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The columns stay `actor`/`occurred_at` (`user` is reserved in Postgres),
/// but the wire contract keeps the original `user`/`time` key names.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub actor: String,
    pub action: String,
    #[serde(rename = "time")]
    pub occurred_at: DateTime<Utc>,
}
