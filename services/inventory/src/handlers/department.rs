use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::DepartmentId;

use crate::domain::types::Department;
use crate::error::InventoryError;
use crate::handlers::{Payload, caller_context, created};
use crate::state::AppState;
use crate::usecase::department::DepartmentInput;

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<DepartmentPayload> for DepartmentInput {
    fn from(payload: DepartmentPayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            active: payload.active,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl From<Department> for DepartmentResponse {
    fn from(d: Department) -> Self {
        Self {
            id: d.id,
            name: d.name,
            description: d.description,
            active: d.active,
        }
    }
}

// ── GET /api/departments ─────────────────────────────────────────────────────

pub async fn list_departments(
    caller: CallerHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.departments().list(&ctx).await?;
    Ok(Json(listing.map(DepartmentResponse::from).into_rows()))
}

// ── GET /api/departments/active ──────────────────────────────────────────────

pub async fn list_active_departments(
    caller: CallerHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.departments().list_active(&ctx).await?;
    Ok(Json(listing.map(DepartmentResponse::from).into_rows()))
}

// ── GET /api/departments/{id} ────────────────────────────────────────────────

pub async fn get_department(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<Json<DepartmentResponse>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let department = state.departments().get(&ctx, id).await?;
    Ok(Json(department.into()))
}

// ── POST /api/departments ────────────────────────────────────────────────────

pub async fn create_department(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Payload(payload): Payload<DepartmentPayload>,
) -> Result<Response, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let department = state.departments().create(&ctx, payload.into()).await?;
    Ok(created(
        format!("/api/departments/{}", department.id),
        DepartmentResponse::from(department),
    ))
}

// ── PUT /api/departments/{id} ────────────────────────────────────────────────

pub async fn update_department(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
    Payload(payload): Payload<DepartmentPayload>,
) -> Result<Json<DepartmentResponse>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let department = state.departments().update(&ctx, id, payload.into()).await?;
    Ok(Json(department.into()))
}

// ── DELETE /api/departments/{id} ─────────────────────────────────────────────

pub async fn delete_department(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<StatusCode, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    state.departments().delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
