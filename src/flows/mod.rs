pub mod client;
pub mod stock;
pub mod summary;
pub mod tasks;
pub mod template;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// A prompt flow is a named (input schema, prompt template, output schema)
/// triple. The reasoning happens entirely in the hosted model; this side only
/// renders the template against a validated input and parses the reply
/// against the output schema.
pub trait PromptFlow: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn input_schema(&self) -> Value;
    fn output_schema(&self) -> Value;
    fn prompt_template(&self) -> &str;

    fn render_prompt(&self, input: &Value) -> String {
        template::render(self.prompt_template(), input)
    }
}

/// Transport failures (the service cannot be reached) are kept apart from
/// protocol failures (the service answered but the exchange went wrong) so
/// callers can answer 503 for the former and 500 for the latter.
#[derive(Debug)]
pub enum FlowError {
    Unavailable(String),
    Failed(String),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::Unavailable(msg) | FlowError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

pub struct FlowRegistry {
    flows: HashMap<String, Arc<dyn PromptFlow>>,
}

impl FlowRegistry {
    pub fn new() -> Self {
        Self {
            flows: HashMap::new(),
        }
    }

    pub fn register(&mut self, flow: Arc<dyn PromptFlow>) {
        self.flows.insert(flow.id().to_string(), flow);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn PromptFlow>> {
        self.flows.get(id)
    }

    pub fn list(&self) -> Vec<&Arc<dyn PromptFlow>> {
        self.flows.values().collect()
    }
}

impl Default for FlowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
