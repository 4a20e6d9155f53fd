use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::Alert;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Alert>>, AppError> {
    let alerts = db::alerts::list(&state.pool).await?;
    Ok(Json(alerts))
}
