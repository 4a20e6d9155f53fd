use std::sync::Arc;

use sqlx::PgPool;

use crate::flows::client::ModelClient;
use crate::flows::FlowRegistry;
use crate::rate_limit::LoginRateLimiter;

pub type SharedState = Arc<AppState>;

/// Config knobs are consumed while building the router; handlers only need
/// what is stored here.
pub struct AppState {
    pub pool: PgPool,
    pub flows: FlowRegistry,
    pub model: Option<Arc<ModelClient>>,
    pub login_limiter: LoginRateLimiter,
}
