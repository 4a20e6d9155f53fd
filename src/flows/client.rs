use serde_json::{json, Value};

use crate::config::ModelConfig;
use crate::flows::FlowError;

/// Thin client for the hosted language-model service. One contract: submit a
/// rendered prompt plus the expected output schema, get back a JSON document
/// matching that schema, or fail.
pub struct ModelClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ModelClient {
    pub fn new(config: &ModelConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build model HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Submit a prompt constrained to JSON output and parse the reply.
    pub async fn generate_json(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> Result<Value, FlowError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": output_schema,
            },
        });

        // Connect errors and timeouts mean the service cannot be reached;
        // surface those as Unavailable rather than an internal failure.
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| FlowError::Unavailable(format!("Model request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect::<String>();
            return Err(FlowError::Failed(format!(
                "Model service returned {status}: {detail}"
            )));
        }

        let reply: Value = resp
            .json()
            .await
            .map_err(|e| FlowError::Failed(format!("Model reply was not JSON: {e}")))?;

        let text = reply
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| FlowError::Failed("Model reply missing text candidate".to_string()))?;

        serde_json::from_str(text)
            .map_err(|e| FlowError::Failed(format!("Model output was not valid JSON: {e}")))
    }
}
