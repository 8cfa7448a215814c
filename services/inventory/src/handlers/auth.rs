use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use assetdesk_auth_types::identity::CallerHeaders;
use assetdesk_domain::id::{DepartmentId, UserId};
use assetdesk_domain::role::Role;

use crate::error::InventoryError;
use crate::handlers::Payload;
use crate::state::AppState;
use crate::usecase::auth::Profile;

#[derive(Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    pub department_name: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let user = profile.user;
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            department_id: user.department_id,
            department_name: profile.department.map(|d| d.name),
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginPayload>,
) -> Result<Json<ProfileResponse>, InventoryError> {
    let profile = state.auth().login(&payload.username, &payload.password).await?;
    Ok(Json(profile.into()))
}

pub async fn me(
    caller: CallerHeaders,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, InventoryError> {
    Ok(Json(state.auth().me(caller.user_id).await?.into()))
}
