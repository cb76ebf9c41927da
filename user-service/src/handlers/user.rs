use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{user::CreateUserRequest, ErrorResponse},
    models::SanitizedUser,
    utils::{hash_password, Password, ValidatedJson},
    AppState,
};

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = SanitizedUser),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Missing or malformed fields", body = ErrorResponse),
    ),
    tag = "Users"
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Json<SanitizedUser>, AppError> {
    if state.db.find_user_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Email already registered"
        )));
    }

    let password_hash = hash_password(&Password::new(req.password))?;

    let user = state
        .db
        .create_user(&req.name, &req.email, &password_hash)
        .await?;

    Ok(Json(user.sanitized()))
}

/// Look up a user by id
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Numeric user identifier"),
    ),
    responses(
        (status = 200, description = "User found", body = SanitizedUser),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Identifier is not numeric", body = ErrorResponse),
    ),
    tag = "Users"
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SanitizedUser>, AppError> {
    // Reject non-numeric identifiers before touching storage.
    let user_id: i64 = user_id
        .parse()
        .map_err(|_| AppError::InvalidParameter("user_id must be an integer".to_string()))?;

    let user = state
        .db
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("User not found")))?;

    Ok(Json(user.sanitized()))
}
