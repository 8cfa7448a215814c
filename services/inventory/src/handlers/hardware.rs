use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::{DepartmentId, HardwareId, SiteId};

use crate::domain::types::{Hardware, HardwareSpec, HardwareStatus, HardwareType};
use crate::error::InventoryError;
use crate::handlers::{DepartmentFilter, Payload, caller_context, created};
use crate::state::AppState;
use crate::usecase::hardware::HardwareInput;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwarePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub hardware_type: HardwareType,
    pub model: String,
    pub serial_number: String,
    pub ip_address: Option<String>,
    pub cpu_cores: Option<i32>,
    pub ram_gb: Option<i32>,
    pub storage_gb: Option<i32>,
    /// Omitted status resets to `OPERATIONAL`.
    pub status: Option<HardwareStatus>,
    pub purchase_date: NaiveDate,
    pub warranty_end_date: NaiveDate,
    pub site_id: Option<SiteId>,
    pub department_id: Option<DepartmentId>,
}

impl From<HardwarePayload> for HardwareInput {
    fn from(p: HardwarePayload) -> Self {
        Self {
            spec: HardwareSpec {
                name: p.name,
                hardware_type: p.hardware_type,
                model: p.model,
                serial_number: p.serial_number,
                ip_address: p.ip_address,
                cpu_cores: p.cpu_cores,
                ram_gb: p.ram_gb,
                storage_gb: p.storage_gb,
                status: p.status.unwrap_or_default(),
                purchase_date: p.purchase_date,
                warranty_end_date: p.warranty_end_date,
            },
            site_id: p.site_id,
            department_id: p.department_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareResponse {
    pub id: HardwareId,
    pub name: String,
    #[serde(rename = "type")]
    pub hardware_type: HardwareType,
    pub model: String,
    pub serial_number: String,
    pub ip_address: Option<String>,
    pub cpu_cores: Option<i32>,
    pub ram_gb: Option<i32>,
    pub storage_gb: Option<i32>,
    pub status: HardwareStatus,
    pub purchase_date: NaiveDate,
    pub warranty_end_date: NaiveDate,
    pub site_id: SiteId,
    pub department_id: Option<DepartmentId>,
}

impl From<Hardware> for HardwareResponse {
    fn from(hw: Hardware) -> Self {
        let spec = hw.spec;
        Self {
            id: hw.id,
            name: spec.name,
            hardware_type: spec.hardware_type,
            model: spec.model,
            serial_number: spec.serial_number,
            ip_address: spec.ip_address,
            cpu_cores: spec.cpu_cores,
            ram_gb: spec.ram_gb,
            storage_gb: spec.storage_gb,
            status: spec.status,
            purchase_date: spec.purchase_date,
            warranty_end_date: spec.warranty_end_date,
            site_id: hw.site_id,
            department_id: hw.department_id,
        }
    }
}

pub async fn list_hardware(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> Result<Json<Vec<HardwareResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.hardware().list(&ctx, filter.department_id).await?;
    Ok(Json(listing.map(HardwareResponse::from).into_rows()))
}

pub async fn get_hardware(
    State(state): State<AppState>,
    Path(id): Path<HardwareId>,
) -> Result<Json<HardwareResponse>, InventoryError> {
    Ok(Json(state.hardware().get(id).await?.into()))
}

pub async fn create_hardware(
    State(state): State<AppState>,
    Payload(payload): Payload<HardwarePayload>,
) -> Result<Response, InventoryError> {
    let hw = state.hardware().create(payload.into()).await?;
    Ok(created(
        format!("/api/hardware/{}", hw.id),
        HardwareResponse::from(hw),
    ))
}

pub async fn update_hardware(
    State(state): State<AppState>,
    Path(id): Path<HardwareId>,
    Payload(payload): Payload<HardwarePayload>,
) -> Result<Json<HardwareResponse>, InventoryError> {
    Ok(Json(state.hardware().update(id, payload.into()).await?.into()))
}

pub async fn delete_hardware(
    State(state): State<AppState>,
    Path(id): Path<HardwareId>,
) -> Result<StatusCode, InventoryError> {
    state.hardware().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
