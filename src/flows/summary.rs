use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{template, PromptFlow};
use crate::models::Task;

/// Snapshot of a project as fed to the summarizer. Mirrors the Project record
/// minus store bookkeeping; the caller decides which project state to send.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeProjectInput {
    pub name: String,
    pub description: String,
    pub progress: i32,
    pub budget: f64,
    pub spent: f64,
    pub status: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeProjectOutput {
    pub summary: String,
}

const PROMPT: &str = "\
You are an expert project manager AI. Analyze the following project data and provide a concise, insightful summary.

Your summary should cover:
- Overall project health and progress against the plan.
- Budget status (are they over/under budget?).
- Key upcoming tasks or potential blockers based on the task list.
- Any risks you identify from the data.

Project Name: {{name}}
Description: {{description}}
Status: {{status}}
Progress: {{progress}}%
Budget: ${{budget}}
Spent: ${{spent}}

Tasks:
{{task_list}}

Generate a summary that would be useful for a project stakeholder who needs a quick update.
";

pub struct SummarizeProjectFlow;

impl PromptFlow for SummarizeProjectFlow {
    fn id(&self) -> &str {
        "summarize-project"
    }

    fn name(&self) -> &str {
        "Project Summary"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "The name of the project." },
                "description": { "type": "string", "description": "A brief description of the project." },
                "progress": { "type": "number", "description": "The overall completion percentage of the project." },
                "budget": { "type": "number", "description": "The total budget for the project." },
                "spent": { "type": "number", "description": "The amount of the budget already spent." },
                "status": { "type": "string", "description": "The current status of the project (e.g., On Track, Delayed)." },
                "tasks": {
                    "type": "array",
                    "description": "The list of tasks associated with the project.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "title": { "type": "string" },
                            "status": { "type": "string", "enum": ["To Do", "In Progress", "Done"] },
                            "due_date": { "type": "string" }
                        },
                        "required": ["id", "title", "status", "due_date"]
                    }
                }
            },
            "required": ["name", "description", "progress", "budget", "spent", "status", "tasks"]
        })
    }

    fn output_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string", "description": "A concise, insightful summary of the project's status, health, and potential risks." }
            },
            "required": ["summary"]
        })
    }

    fn prompt_template(&self) -> &str {
        PROMPT
    }

    /// The task list has no scalar rendering, so it is pre-formatted into a
    /// `task_list` field before the template is applied.
    fn render_prompt(&self, input: &Value) -> String {
        let task_list = input
            .get("tasks")
            .and_then(|v| v.as_array())
            .map(|tasks| {
                tasks
                    .iter()
                    .map(|t| {
                        format!(
                            "- {} (Status: {}, Due: {})",
                            t.get("title").and_then(|v| v.as_str()).unwrap_or(""),
                            t.get("status").and_then(|v| v.as_str()).unwrap_or(""),
                            t.get("due_date").and_then(|v| v.as_str()).unwrap_or(""),
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        let mut enriched = input.clone();
        if let Some(obj) = enriched.as_object_mut() {
            obj.insert("task_list".to_string(), Value::String(task_list));
        }

        template::render(self.prompt_template(), &enriched)
    }
}
