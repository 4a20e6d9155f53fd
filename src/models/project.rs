use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// A task inside a project. Stored as part of the project's JSONB task list,
/// not as its own table; the task lifecycle is client-driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

/// progress, spent, and status are independently settable; nothing recomputes
/// them from the task list or budget.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub progress: i32,
    pub budget: f64,
    pub spent: f64,
    pub status: String,
    pub tasks: Json<Vec<Task>>,
    pub assigned_contractors: Json<Vec<String>>,
    pub expenses: Json<Vec<Expense>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const PROJECT_STATUSES: &[&str] = &["On Track", "Delayed", "Completed"];
pub const TASK_STATUSES: &[&str] = &["To Do", "In Progress", "Done"];
