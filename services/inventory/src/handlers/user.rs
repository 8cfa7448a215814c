use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::{DepartmentId, UserId};
use assetdesk_domain::role::Role;

use crate::domain::types::User;
use crate::error::InventoryError;
use crate::handlers::{DepartmentFilter, Payload, caller_context, created};
use crate::state::AppState;
use crate::usecase::user::UserInput;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_role")]
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    pub password: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_role() -> Role {
    Role::User
}

impl From<UserPayload> for UserInput {
    fn from(p: UserPayload) -> Self {
        Self {
            username: p.username,
            email: p.email,
            enabled: p.enabled,
            role: p.role,
            department_id: p.department_id,
            password: p.password,
        }
    }
}

/// The stored credential is never serialized.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            enabled: user.enabled,
            role: user.role,
            department_id: user.department_id,
        }
    }
}

pub async fn list_users(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> Result<Json<Vec<UserResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.users().list(&ctx, filter.department_id).await?;
    Ok(Json(listing.map(UserResponse::from).into_rows()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserResponse>, InventoryError> {
    Ok(Json(state.users().get(id).await?.into()))
}

pub async fn create_user(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<Response, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let user = state.users().create(&ctx, payload.into()).await?;
    Ok(created(format!("/api/users/{}", user.id), UserResponse::from(user)))
}

pub async fn update_user(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Payload(payload): Payload<UserPayload>,
) -> Result<Json<UserResponse>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    Ok(Json(state.users().update(&ctx, id, payload.into()).await?.into()))
}

pub async fn delete_user(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    state.users().delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
