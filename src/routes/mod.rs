pub mod activity;
pub mod alerts;
pub mod auth;
pub mod contractors;
pub mod flows;
pub mod payments;
pub mod projects;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Contractors
        .route(
            "/api/contractors",
            get(contractors::list).post(contractors::create),
        )
        .route(
            "/api/contractors/{id}",
            get(contractors::get)
                .put(contractors::update)
                .delete(contractors::delete),
        )
        // Reference / display collections
        .route("/api/payments", get(payments::list))
        .route("/api/alerts", get(alerts::list))
        .route("/api/activity", get(activity::list))
        // Prompt flows
        .route("/api/ai/flows", get(flows::list_flows))
        .route("/api/ai/predict-stock", post(flows::predict_stock))
        .route("/api/ai/generate-tasks", post(flows::generate_tasks))
        .route("/api/ai/summarize-project", post(flows::summarize_project))
}
