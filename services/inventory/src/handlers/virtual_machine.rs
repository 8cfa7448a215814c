use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::{DepartmentId, HardwareId, VmId};

use crate::domain::types::{VirtualMachine, VmSpec, VmStatus};
use crate::error::InventoryError;
use crate::handlers::{DepartmentFilter, Payload, caller_context, created};
use crate::state::AppState;
use crate::usecase::virtual_machine::VirtualMachineInput;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachinePayload {
    pub name: String,
    pub hostname: String,
    pub ip_address: Option<String>,
    pub operating_system: String,
    pub vcpu: i32,
    pub vram: i32,
    pub disk_size: i32,
    /// Omitted status resets to `STOPPED`.
    pub status: Option<VmStatus>,
    pub hardware_id: Option<HardwareId>,
    pub department_id: Option<DepartmentId>,
}

impl From<VirtualMachinePayload> for VirtualMachineInput {
    fn from(p: VirtualMachinePayload) -> Self {
        Self {
            spec: VmSpec {
                name: p.name,
                hostname: p.hostname,
                ip_address: p.ip_address,
                operating_system: p.operating_system,
                vcpu: p.vcpu,
                vram: p.vram,
                disk_size: p.disk_size,
                status: p.status.unwrap_or_default(),
            },
            hardware_id: p.hardware_id,
            department_id: p.department_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineResponse {
    pub id: VmId,
    pub name: String,
    pub hostname: String,
    pub ip_address: Option<String>,
    pub operating_system: String,
    pub vcpu: i32,
    pub vram: i32,
    pub disk_size: i32,
    pub status: VmStatus,
    pub hardware_id: HardwareId,
    pub department_id: Option<DepartmentId>,
}

impl From<VirtualMachine> for VirtualMachineResponse {
    fn from(vm: VirtualMachine) -> Self {
        let spec = vm.spec;
        Self {
            id: vm.id,
            name: spec.name,
            hostname: spec.hostname,
            ip_address: spec.ip_address,
            operating_system: spec.operating_system,
            vcpu: spec.vcpu,
            vram: spec.vram,
            disk_size: spec.disk_size,
            status: spec.status,
            hardware_id: vm.hardware_id,
            department_id: vm.department_id,
        }
    }
}

pub async fn list_vms(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> Result<Json<Vec<VirtualMachineResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.vms().list(&ctx, filter.department_id).await?;
    Ok(Json(listing.map(VirtualMachineResponse::from).into_rows()))
}

pub async fn get_vm(
    State(state): State<AppState>,
    Path(id): Path<VmId>,
) -> Result<Json<VirtualMachineResponse>, InventoryError> {
    Ok(Json(state.vms().get(id).await?.into()))
}

pub async fn create_vm(
    State(state): State<AppState>,
    Payload(payload): Payload<VirtualMachinePayload>,
) -> Result<Response, InventoryError> {
    let vm = state.vms().create(payload.into()).await?;
    Ok(created(
        format!("/api/virtual-machines/{}", vm.id),
        VirtualMachineResponse::from(vm),
    ))
}

pub async fn update_vm(
    State(state): State<AppState>,
    Path(id): Path<VmId>,
    Payload(payload): Payload<VirtualMachinePayload>,
) -> Result<Json<VirtualMachineResponse>, InventoryError> {
    Ok(Json(state.vms().update(id, payload.into()).await?.into()))
}

pub async fn delete_vm(
    State(state): State<AppState>,
    Path(id): Path<VmId>,
) -> Result<StatusCode, InventoryError> {
    state.vms().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
