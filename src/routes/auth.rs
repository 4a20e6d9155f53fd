use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::User;
use crate::state::SharedState;
use crate::validate;

const DEFAULT_ROLE: &str = "Admin";

/// Credential failures share one message so an attacker cannot tell a missing
/// account from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    // First validation failure wins; nothing touches the store before this.
    validate::min_len(&req.name, 2, "Name must be at least 2 characters.")?;
    validate::email(&req.email)?;
    validate::min_len(&req.password, 6, "Password must be at least 6 characters.")?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Single conditional insert: the unique constraint on users.email decides
    // the duplicate case, so two racing signups cannot both succeed.
    let user = db::users::create(&state.pool, &req.name, &req.email, &pw_hash, DEFAULT_ROLE)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("User with this email already exists.".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Signup successful".to_string(),
            user,
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate::email(&req.email)?;
    validate::non_empty(&req.password, "Password is required.")?;

    if state.login_limiter.check(&req.email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let Some(user) = db::users::find_by_email(&state.pool, &req.email).await? else {
        state.login_limiter.record_failure(&req.email);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        state.login_limiter.record_failure(&req.email);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    tracing::info!(user_id = %user.id, "User logged in");

    // No session or token is issued here; the product has not settled on a
    // session design yet.
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
