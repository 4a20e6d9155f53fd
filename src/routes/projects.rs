use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db;
use crate::db::projects::NewProject;
use crate::error::AppError;
use crate::models::project::{PROJECT_STATUSES, TASK_STATUSES};
use crate::models::{Expense, Project, Task};
use crate::state::SharedState;
use crate::validate;

#[derive(Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub assigned_contractors: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

fn default_status() -> String {
    "On Track".to_string()
}

#[derive(Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

impl ProjectRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::min_len(&self.name, 2, "Name must be at least 2 characters.")?;
        validate::percentage(self.progress, "progress")?;
        validate::non_negative(self.budget, "budget")?;
        validate::non_negative(self.spent, "spent")?;
        validate::one_of(&self.status, PROJECT_STATUSES, "status")?;
        for t in &self.tasks {
            validate::one_of(&t.status, TASK_STATUSES, "task status")?;
        }
        Ok(())
    }

    fn as_new(&self) -> NewProject<'_> {
        NewProject {
            name: &self.name,
            description: &self.description,
            progress: self.progress,
            budget: self.budget,
            spent: self.spent,
            status: &self.status,
            tasks: &self.tasks,
            assigned_contractors: &self.assigned_contractors,
            expenses: &self.expenses,
        }
    }
}

/// Pure read. An empty store returns an empty list; seeding happens once at
/// startup, never here.
pub async fn list(State(state): State<SharedState>) -> Result<Json<ProjectsResponse>, AppError> {
    let projects = db::projects::list(&state.pool).await?;
    Ok(Json(ProjectsResponse { projects }))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<Project>, AppError> {
    req.validate()?;
    let project = db::projects::create(&state.pool, &req.as_new()).await?;
    tracing::info!(project_id = %project.id, "Project created");
    Ok(Json(project))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Json(project))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<Project>, AppError> {
    req.validate()?;
    let project = db::projects::update(&state.pool, id, &req.as_new())
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Project not found".to_string()),
            _ => AppError::Database(e),
        })?;
    tracing::info!(project_id = %project.id, "Project updated");
    Ok(Json(project))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::projects::delete(&state.pool, id).await?;
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
