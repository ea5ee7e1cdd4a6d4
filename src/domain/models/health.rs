use serde::{Deserialize, Serialize};

pub const HEALTH_STATUS_OK: &str = "ok";
pub const HEALTH_MESSAGE: &str = "Backend is awake!";

/// Liveness payload returned to uptime monitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    status: String,
    message: String,
}

impl HealthStatus {
    pub fn awake() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
