use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::PromptFlow;

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictStockInput {
    pub material_name: String,
    pub initial_stock_level: f64,
    pub daily_usage_rate: f64,
    pub lead_time_days: f64,
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictStockOutput {
    pub predicted_depletion_date: String,
    pub reorder_quantity: f64,
    pub reorder_alert: String,
}

const PROMPT: &str = "\
You are an AI assistant helping project admins manage stock levels and avoid material shortages.

Given the following information, predict the stock depletion date, recommend a reorder quantity, and generate a reorder alert:

Material Name: {{material_name}}
Initial Stock Level: {{initial_stock_level}}
Daily Usage Rate: {{daily_usage_rate}}
Lead Time (Days): {{lead_time_days}}
Project ID: {{project_id}}

Consider the lead time when recommending a reorder date. The reorder alert should clearly state when to reorder the material to avoid shortages.

Ensure the predicted_depletion_date is formatted as YYYY-MM-DD.

Output MUST be a JSON object.
";

pub struct PredictStockFlow;

impl PromptFlow for PredictStockFlow {
    fn id(&self) -> &str {
        "predict-stock"
    }

    fn name(&self) -> &str {
        "Stock Depletion Prediction"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "material_name": { "type": "string", "description": "The name of the material." },
                "initial_stock_level": { "type": "number", "description": "The initial stock level of the material." },
                "daily_usage_rate": { "type": "number", "description": "The average daily usage rate of the material." },
                "lead_time_days": { "type": "number", "description": "The lead time in days for reordering the material." },
                "project_id": { "type": "string", "description": "The project ID." }
            },
            "required": ["material_name", "initial_stock_level", "daily_usage_rate", "lead_time_days", "project_id"]
        })
    }

    fn output_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "predicted_depletion_date": { "type": "string", "description": "The predicted date when the stock will be depleted, formatted as YYYY-MM-DD." },
                "reorder_quantity": { "type": "number", "description": "The recommended reorder quantity to avoid shortages." },
                "reorder_alert": { "type": "string", "description": "The text of the reorder alert, suggesting when to reorder." }
            },
            "required": ["predicted_depletion_date", "reorder_quantity", "reorder_alert"]
        })
    }

    fn prompt_template(&self) -> &str {
        PROMPT
    }
}
