use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::flows::stock::{PredictStockInput, PredictStockOutput};
use crate::flows::summary::{SummarizeProjectInput, SummarizeProjectOutput};
use crate::flows::tasks::{GenerateTasksInput, GenerateTasksOutput};
use crate::flows::FlowError;
use crate::state::SharedState;
use crate::validate;

pub async fn list_flows(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let flows: Vec<serde_json::Value> = state
        .flows
        .list()
        .iter()
        .map(|f| {
            json!({
                "id": f.id(),
                "name": f.name(),
                "input_schema": f.input_schema(),
                "output_schema": f.output_schema(),
            })
        })
        .collect();
    Json(json!({ "flows": flows }))
}

/// Render a flow's prompt against a typed input, submit it to the hosted
/// model, and parse the JSON reply into the flow's output type.
async fn run_flow<I, O>(state: &SharedState, flow_id: &str, input: &I) -> Result<O, AppError>
where
    I: Serialize,
    O: DeserializeOwned,
{
    let flow = state
        .flows
        .get(flow_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown flow: {flow_id}")))?;

    let model = state.model.as_ref().ok_or_else(|| {
        AppError::Unavailable("Model service is not configured".to_string())
    })?;

    let input = serde_json::to_value(input)
        .map_err(|e| AppError::Internal(format!("Failed to serialize flow input: {e}")))?;

    let prompt = flow.render_prompt(&input);

    let output = model
        .generate_json(&prompt, &flow.output_schema())
        .await
        .map_err(|e| match e {
            FlowError::Unavailable(msg) => {
                tracing::warn!("Model service unreachable: {msg}");
                AppError::Unavailable("Model service is unavailable".to_string())
            }
            FlowError::Failed(msg) => AppError::Internal(format!("Flow {flow_id} failed: {msg}")),
        })?;

    serde_json::from_value(output)
        .map_err(|e| AppError::Internal(format!("Model output did not match flow schema: {e}")))
}

pub async fn predict_stock(
    State(state): State<SharedState>,
    Json(req): Json<PredictStockInput>,
) -> Result<Json<PredictStockOutput>, AppError> {
    validate::non_empty(&req.material_name, "Material name is required.")?;
    validate::non_empty(&req.project_id, "Project ID is required.")?;
    validate::non_negative(req.initial_stock_level, "initial_stock_level")?;
    validate::non_negative(req.daily_usage_rate, "daily_usage_rate")?;
    validate::non_negative(req.lead_time_days, "lead_time_days")?;

    let output = run_flow(&state, "predict-stock", &req).await?;
    Ok(Json(output))
}

pub async fn generate_tasks(
    State(state): State<SharedState>,
    Json(req): Json<GenerateTasksInput>,
) -> Result<Json<GenerateTasksOutput>, AppError> {
    validate::non_empty(&req.goal, "Goal is required.")?;

    let output = run_flow(&state, "generate-tasks", &req).await?;
    Ok(Json(output))
}

pub async fn summarize_project(
    State(state): State<SharedState>,
    Json(req): Json<SummarizeProjectInput>,
) -> Result<Json<SummarizeProjectOutput>, AppError> {
    validate::non_empty(&req.name, "Project name is required.")?;
    validate::percentage(req.progress, "progress")?;

    let output = run_flow(&state, "summarize-project", &req).await?;
    Ok(Json(output))
}
