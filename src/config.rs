use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub model: Option<ModelConfig>,
}

/// Hosted language-model service. Optional: when absent, the prompt-flow
/// endpoints answer 503 instead of failing at startup.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("CIVILSAGE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CIVILSAGE_HOST: {e}"))?;

        let port: u16 = env_or("CIVILSAGE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CIVILSAGE_PORT: {e}"))?;

        let max_body_size: usize = env_or("CIVILSAGE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CIVILSAGE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CIVILSAGE_LOG_LEVEL", "info");

        let model = std::env::var("CIVILSAGE_MODEL_API_KEY")
            .ok()
            .map(|api_key| ModelConfig {
                api_url: env_or(
                    "CIVILSAGE_MODEL_API_URL",
                    "https://generativelanguage.googleapis.com",
                ),
                api_key,
                model: env_or("CIVILSAGE_MODEL", "gemini-2.0-flash"),
            });

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            log_level,
            model,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
