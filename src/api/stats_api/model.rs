//! Stats API model types
//!
//! Response bodies of the stats backend and their parsers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;

/// Body of `GET /api/health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    /// Any extra fields the backend reports
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok" | "OK")
    }
}

/// Parse a player search body: a JSON array of names, or `null` for none
pub fn to_usernames(body: &str) -> Result<Vec<String>, ApiError> {
    let names: Option<Vec<String>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(names.unwrap_or_default())
}

pub fn to_health_status(body: &str) -> Result<HealthStatus, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
