use axum::Json;

use crate::domain::HealthStatus;

/// Liveness probe for uptime monitors. Served for both `GET /` and `HEAD /`;
/// the transport drops the body on `HEAD`.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::awake())
}
