pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod flows;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod validate;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::flows::client::ModelClient;
use crate::flows::stock::PredictStockFlow;
use crate::flows::summary::SummarizeProjectFlow;
use crate::flows::tasks::GenerateTasksFlow;
use crate::flows::FlowRegistry;
use crate::rate_limit::LoginRateLimiter;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    // Flow registry: the three declarative prompt flows.
    let mut flows = FlowRegistry::new();
    flows.register(Arc::new(PredictStockFlow));
    flows.register(Arc::new(GenerateTasksFlow));
    flows.register(Arc::new(SummarizeProjectFlow));

    let model = config.model.as_ref().and_then(|mc| match ModelClient::new(mc) {
        Ok(client) => {
            tracing::info!(model = %mc.model, "Model service configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!("Model service not available: {e}");
            None
        }
    });

    let state: SharedState = Arc::new(AppState {
        pool,
        flows,
        model,
        login_limiter: LoginRateLimiter::new(),
    });

    // Sweep stale login-failure entries so the per-email map stays bounded.
    let limiter_state = state.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(10 * 60));
        loop {
            tick.tick().await;
            limiter_state.login_limiter.cleanup(Duration::from_secs(30 * 60));
        }
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
