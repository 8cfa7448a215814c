//! Caller identity header extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use assetdesk_domain::id::UserId;

/// Header carrying the numeric id of the calling user.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity supplied out-of-band via the `x-user-id` header.
///
/// The header is optional: `user_id` is `None` when it is absent, which
/// callers treat as an anonymous request. A present but non-numeric value
/// is rejected with 400 rather than silently downgraded to anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerHeaders {
    pub user_id: Option<UserId>,
}

impl CallerHeaders {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    fn from_parts(parts: &Parts) -> Result<Self, StatusCode> {
        let Some(raw) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(Self::anonymous());
        };
        let user_id = raw
            .to_str()
            .ok()
            .map(str::trim)
            .and_then(|s| s.parse::<UserId>().ok())
            .ok_or(StatusCode::BAD_REQUEST)?;
        Ok(Self {
            user_id: Some(user_id),
        })
    }
}

impl<S> FromRequestParts<S> for CallerHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = Self::from_parts(parts);
        async move { result }
    }
}
