use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::contractor::CONTRACTOR_STATUSES;
use crate::models::Contractor;
use crate::state::SharedState;
use crate::validate;

#[derive(Deserialize)]
pub struct ContractorRequest {
    pub name: String,
    pub company: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub project_count: i32,
    #[serde(default)]
    pub avatar: String,
}

fn default_status() -> String {
    "Active".to_string()
}

impl ContractorRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::min_len(&self.name, 2, "Name must be at least 2 characters.")?;
        validate::non_empty(&self.company, "Company is required.")?;
        validate::one_of(&self.status, CONTRACTOR_STATUSES, "status")?;
        if self.project_count < 0 {
            return Err(AppError::BadRequest(
                "project_count must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Contractor>>, AppError> {
    let contractors = db::contractors::list(&state.pool).await?;
    Ok(Json(contractors))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<ContractorRequest>,
) -> Result<Json<Contractor>, AppError> {
    req.validate()?;
    let contractor = db::contractors::create(
        &state.pool,
        &req.name,
        &req.company,
        &req.status,
        req.project_count,
        &req.avatar,
    )
    .await?;
    tracing::info!(contractor_id = %contractor.id, "Contractor created");
    Ok(Json(contractor))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Contractor>, AppError> {
    let contractor = db::contractors::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contractor not found".to_string()))?;
    Ok(Json(contractor))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ContractorRequest>,
) -> Result<Json<Contractor>, AppError> {
    req.validate()?;
    let contractor = db::contractors::update(
        &state.pool,
        id,
        &req.name,
        &req.company,
        &req.status,
        req.project_count,
        &req.avatar,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("Contractor not found".to_string()),
        _ => AppError::Database(e),
    })?;
    tracing::info!(contractor_id = %contractor.id, "Contractor updated");
    Ok(Json(contractor))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::contractors::delete(&state.pool, id).await?;
    tracing::info!(contractor_id = %id, "Contractor deleted");
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
