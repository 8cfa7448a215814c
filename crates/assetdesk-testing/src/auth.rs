//! Mock caller identity for router tests.
//!
//! Production traffic carries the caller id in `x-user-id`. Tests attach the
//! same header directly so no login flow is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use assetdesk_auth_types::identity::USER_ID_HEADER;
use assetdesk_domain::id::UserId;

/// Caller identity injected into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockCaller {
    pub user_id: Option<UserId>,
}

impl MockCaller {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// A request without any caller header.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Return headers as a client would send them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(id) = self.user_id {
            map.insert(
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from(id.0),
            );
        }
        map
    }
}
