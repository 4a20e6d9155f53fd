use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::RecentActivity;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<RecentActivity>>, AppError> {
    let activity = db::recent_activity::list(&state.pool).await?;
    Ok(Json(activity))
}
