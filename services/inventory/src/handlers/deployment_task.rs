use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::{DepartmentId, TaskId, UserId, VmId};

use crate::domain::types::{DeploymentStatus, DeploymentTask};
use crate::error::InventoryError;
use crate::handlers::{DepartmentFilter, Payload, caller_context, created};
use crate::state::AppState;
use crate::usecase::deployment_task::DeploymentTaskInput;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTaskPayload {
    pub task_name: Option<String>,
    pub description: Option<String>,
    pub vm_id: Option<VmId>,
    pub requested_by_id: Option<UserId>,
    /// Alias for `requestedById`; wins when both are sent.
    pub assigned_user_id: Option<UserId>,
    pub status: Option<DeploymentStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub department_id: Option<DepartmentId>,
}

impl From<DeploymentTaskPayload> for DeploymentTaskInput {
    fn from(p: DeploymentTaskPayload) -> Self {
        Self {
            task_name: p.task_name,
            description: p.description,
            vm_id: p.vm_id,
            requested_by: p.assigned_user_id.or(p.requested_by_id),
            status: p.status,
            created_at: p.created_at,
            completed_at: p.completed_at,
            scheduled_date: p.scheduled_date,
            department_id: p.department_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTaskResponse {
    pub id: TaskId,
    pub task_name: Option<String>,
    pub description: Option<String>,
    pub vm_id: VmId,
    pub requested_by_id: UserId,
    pub status: DeploymentStatus,
    #[serde(serialize_with = "assetdesk_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "assetdesk_core::serde::opt_to_rfc3339_ms")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "assetdesk_core::serde::opt_to_rfc3339_ms")]
    pub scheduled_date: Option<DateTime<Utc>>,
    pub department_id: Option<DepartmentId>,
}

impl From<DeploymentTask> for DeploymentTaskResponse {
    fn from(task: DeploymentTask) -> Self {
        Self {
            id: task.id,
            task_name: task.task_name,
            description: task.description,
            vm_id: task.vm_id,
            requested_by_id: task.requested_by,
            status: task.status,
            created_at: task.created_at,
            completed_at: task.completed_at,
            scheduled_date: task.scheduled_date,
            department_id: task.department_id,
        }
    }
}

pub async fn list_tasks(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> Result<Json<Vec<DeploymentTaskResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.tasks().list(&ctx, filter.department_id).await?;
    Ok(Json(listing.map(DeploymentTaskResponse::from).into_rows()))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<DeploymentTaskResponse>, InventoryError> {
    Ok(Json(state.tasks().get(id).await?.into()))
}

pub async fn create_task(
    State(state): State<AppState>,
    Payload(payload): Payload<DeploymentTaskPayload>,
) -> Result<Response, InventoryError> {
    let task = state.tasks().create(payload.into()).await?;
    Ok(created(
        format!("/api/deployment-tasks/{}", task.id),
        DeploymentTaskResponse::from(task),
    ))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Payload(payload): Payload<DeploymentTaskPayload>,
) -> Result<Json<DeploymentTaskResponse>, InventoryError> {
    Ok(Json(state.tasks().update(id, payload.into()).await?.into()))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, InventoryError> {
    state.tasks().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
