use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::PromptFlow;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTasksInput {
    pub goal: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedTask {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTasksOutput {
    pub tasks: Vec<GeneratedTask>,
}

const PROMPT: &str = "\
You are an expert project manager for civil engineering projects. A user will provide a high-level goal, and your job is to break it down into a list of smaller, actionable tasks.

Goal: {{goal}}

Generate a list of tasks that need to be completed to achieve this goal. The tasks should be clear, concise, and logical.
";

pub struct GenerateTasksFlow;

impl PromptFlow for GenerateTasksFlow {
    fn id(&self) -> &str {
        "generate-tasks"
    }

    fn name(&self) -> &str {
        "Task Generation"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "goal": { "type": "string", "description": "The high-level project goal to be broken down." }
            },
            "required": ["goal"]
        })
    }

    fn output_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "tasks": {
                    "type": "array",
                    "description": "An array of generated tasks.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string", "description": "The clear and concise title of the task." }
                        },
                        "required": ["title"]
                    }
                }
            },
            "required": ["tasks"]
        })
    }

    fn prompt_template(&self) -> &str {
        PROMPT
    }
}
