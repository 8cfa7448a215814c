use axum::extract::State;
use axum::http::StatusCode;

/// Something that can report whether the service is ready to take traffic,
/// typically by pinging its database.
pub trait ReadinessProbe: Send + Sync {
    fn is_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}

/// Liveness check for `GET /healthz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: 200 when the probe succeeds, 503 otherwise.
pub async fn readyz<P>(State(probe): State<P>) -> StatusCode
where
    P: ReadinessProbe + Clone,
{
    if probe.is_ready().await {
        StatusCode::OK
    } else {
        tracing::warn!("readiness probe failed");
        StatusCode::SERVICE_UNAVAILABLE
    }
}
