use axum::Json;
use axum::extract::FromRequest;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::DepartmentId;

use crate::error::InventoryError;
use crate::state::AppState;
use crate::usecase::context::CallerContext;

pub mod auth;
pub mod department;
pub mod deployment_task;
pub mod hardware;
pub mod site;
pub mod user;
pub mod virtual_machine;

/// JSON request body whose rejections render as `VALIDATION_ERROR` instead
/// of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(InventoryError))]
pub struct Payload<T>(pub T);

/// `?departmentId=` on list endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentFilter {
    pub department_id: Option<DepartmentId>,
}

/// Build the per-request caller context from the identity header.
pub(crate) async fn caller_context(state: &AppState, headers: CallerHeaders) -> CallerContext {
    CallerContext::resolve(&state.user_store(), headers.user_id, state.anonymous_access).await
}

/// 201 with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}
