use serde::{Deserialize, Serialize};
use crate::models::domain::Gender;

/// Response for the fuse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuseGenderResponse {
    pub gender: Gender,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
