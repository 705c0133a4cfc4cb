//! Handlers for the `/accounts` resource (user account CRUD).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use mastery_core::account;
use mastery_core::error::CoreError;
use mastery_core::types::DbId;
use mastery_db::models::user::{CreateUser, UpdateUser, UserResponse};
use mastery_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /accounts`.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub roles: i32,
}

/// Request body for `PUT /accounts/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/accounts
///
/// Create a new account. Validates field shapes and password strength,
/// hashes the password, and returns a safe [`UserResponse`] with 201 Created.
pub async fn create_account(
    State(state): State<AppState>,
    Json(input): Json<CreateAccountRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    account::validate_username(&input.username)?;
    account::validate_email(&input.email)?;
    if let Some(ref first_name) = input.first_name {
        account::validate_name(first_name, "First name")?;
    }
    if let Some(ref last_name) = input.last_name {
        account::validate_name(last_name, "Last name")?;
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        first_name: input.first_name,
        last_name: input.last_name,
        roles: input.roles,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(user_id = user.id, username = %user.username, "Account created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/v1/accounts
///
/// List all accounts, newest first.
pub async fn list_accounts(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses = users.iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// GET /api/v1/accounts/{id}
///
/// Get a single account by ID.
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/v1/accounts/{id}
///
/// Partially update an account. Only provided fields are changed.
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAccountRequest>,
) -> AppResult<Json<UserResponse>> {
    if let Some(ref username) = input.username {
        account::validate_username(username)?;
    }
    if let Some(ref email) = input.email {
        account::validate_email(email)?;
    }
    if let Some(ref first_name) = input.first_name {
        account::validate_name(first_name, "First name")?;
    }
    if let Some(ref last_name) = input.last_name {
        account::validate_name(last_name, "Last name")?;
    }

    let update_dto = UpdateUser {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        roles: input.roles,
        is_onboarding: None,
        is_active: input.is_active,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = user.id, "Account updated");

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/v1/accounts/{id}
///
/// Soft-deactivate an account. Returns 204 No Content.
pub async fn deactivate_account(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        // Either the user never existed or was already inactive; only the
        // former is an error.
        let exists = UserRepo::find_by_id(&state.pool, id).await?.is_some();
        if !exists {
            return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
        }
    }

    tracing::info!(user_id = id, "Account deactivated");

    Ok(StatusCode::NO_CONTENT)
}
