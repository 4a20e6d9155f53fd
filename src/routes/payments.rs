use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::Payment;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = db::payments::list(&state.pool).await?;
    Ok(Json(payments))
}
