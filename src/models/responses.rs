use serde::{Deserialize, Serialize};
use crate::models::domain::Marker;

/// Response for the map area search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSearchResponse {
    pub markers: Vec<Marker>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
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
