//! User record service routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    error::{UserError, UserResult},
    models::{NewUser, UpdateUser},
    state::AppState,
};

/// Request for user creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request for user edits
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

/// Request for user deletion
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub email: Option<String>,
}

/// Create the router for the user record service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/user/create", post(create_user))
        .route("/user/edit", put(edit_user))
        .route("/user/delete", delete(delete_user))
        .route("/user/getAll", get(list_users))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn required(value: Option<String>, field: &str) -> UserResult<String> {
    value.ok_or_else(|| UserError::Validation(format!("{} is required", field)))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> UserResult<T> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| UserError::Validation(rejection.body_text()))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "user-service"
    }))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> UserResult<impl IntoResponse> {
    let payload = body(payload)?;
    let input = NewUser {
        full_name: required(payload.full_name, "Full name")?,
        email: required(payload.email, "Email")?,
        password: required(payload.password, "Password")?,
    };

    let id = state.user_service.create_user(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully", "id": id })),
    ))
}

/// Update user details
pub async fn edit_user(
    State(state): State<AppState>,
    payload: Result<Json<EditUserRequest>, JsonRejection>,
) -> UserResult<impl IntoResponse> {
    let payload = body(payload)?;
    let email = required(payload.email, "Email")?;

    let update = UpdateUser {
        full_name: payload.full_name,
        password: payload.password,
    };
    state.user_service.update_user(&email, update).await?;

    Ok(Json(json!({ "message": "User details updated successfully" })))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    payload: Result<Json<DeleteUserRequest>, JsonRejection>,
) -> UserResult<impl IntoResponse> {
    let email = required(body(payload)?.email, "Email")?;

    state.user_service.delete_user(&email).await?;

    Ok(Json(json!({ "message": "User deleted successfully" })))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> UserResult<impl IntoResponse> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}
