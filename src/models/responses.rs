use serde::{Deserialize, Serialize};
use crate::core::Presentation;
use crate::models::domain::{DislikedName, LikedName, Match, Role};

/// Response for the "what next" endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextResponse {
    pub role: Role,
    #[serde(flatten)]
    pub presentation: Presentation,
}

/// Response for a dislike
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DislikeResponse {
    pub name: String,
    #[serde(rename = "dislikeCount")]
    pub dislike_count: u32,
}

/// Response for a catalog import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub submitted: usize,
    pub inserted: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikedResponse {
    pub role: Role,
    pub names: Vec<LikedName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DislikedResponse {
    pub role: Role,
    pub names: Vec<DislikedName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub role: Role,
    pub matches: Vec<Match>,
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

/// Empty acknowledgement for state-changing requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub success: bool,
}
