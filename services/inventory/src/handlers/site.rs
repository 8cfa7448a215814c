use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::{DepartmentId, SiteId};

use crate::domain::types::Site;
use crate::error::InventoryError;
use crate::handlers::{DepartmentFilter, Payload, caller_context, created};
use crate::state::AppState;
use crate::usecase::site::SiteInput;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePayload {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department_id: Option<DepartmentId>,
}

impl From<SitePayload> for SiteInput {
    fn from(payload: SitePayload) -> Self {
        Self {
            name: payload.name,
            address: payload.address,
            city: payload.city,
            country: payload.country,
            department_id: payload.department_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub id: SiteId,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department_id: Option<DepartmentId>,
}

impl From<Site> for SiteResponse {
    fn from(site: Site) -> Self {
        Self {
            id: site.id,
            name: site.name,
            address: site.address,
            city: site.city,
            country: site.country,
            department_id: site.department_id,
        }
    }
}

pub async fn list_sites(
    caller: CallerHeaders,
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> Result<Json<Vec<SiteResponse>>, InventoryError> {
    let ctx = caller_context(&state, caller).await;
    let listing = state.sites().list(&ctx, filter.department_id).await?;
    Ok(Json(listing.map(SiteResponse::from).into_rows()))
}

pub async fn get_site(
    State(state): State<AppState>,
    Path(id): Path<SiteId>,
) -> Result<Json<SiteResponse>, InventoryError> {
    Ok(Json(state.sites().get(id).await?.into()))
}

pub async fn create_site(
    State(state): State<AppState>,
    Payload(payload): Payload<SitePayload>,
) -> Result<Response, InventoryError> {
    let site = state.sites().create(payload.into()).await?;
    Ok(created(format!("/api/sites/{}", site.id), SiteResponse::from(site)))
}

pub async fn update_site(
    State(state): State<AppState>,
    Path(id): Path<SiteId>,
    Payload(payload): Payload<SitePayload>,
) -> Result<Json<SiteResponse>, InventoryError> {
    Ok(Json(state.sites().update(id, payload.into()).await?.into()))
}

pub async fn delete_site(
    State(state): State<AppState>,
    Path(id): Path<SiteId>,
) -> Result<StatusCode, InventoryError> {
    state.sites().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
