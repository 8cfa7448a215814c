use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::EntityKind;

/// Inventory service error variants.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },
    /// A foreign key in the payload is missing or points at no row.
    #[error("{}", bad_reference_message(.entity, .id))]
    BadReference { entity: EntityKind, id: Option<i64> },
    /// Credentials were rejected or no caller identity was supplied.
    #[error("unauthorized: {reason}")]
    Unauthorized { reason: &'static str },
    #[error("forbidden: {action}")]
    Forbidden { action: &'static str },
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

fn bad_reference_message(entity: &EntityKind, id: &Option<i64>) -> String {
    match id {
        Some(id) => format!("invalid {} reference: {id}", entity.field_name()),
        None => format!("{} is required", entity.field_name()),
    }
}

impl InventoryError {
    pub fn not_found(entity: EntityKind, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn bad_reference(entity: EntityKind, id: Option<impl Into<i64>>) -> Self {
        Self::BadReference {
            entity,
            id: id.map(Into::into),
        }
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::BadReference { .. } => "BAD_REFERENCE",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadReference { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for InventoryError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client errors; TraceLayer already records them.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
