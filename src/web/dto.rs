//! Data Transfer Objects
//!
//! Response types serialized to JSON by the API routes.

use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok"; monitors match on this field
    pub status: String,
    /// Server time the probe was answered, ISO-8601 with milliseconds
    pub timestamp: String,
    /// Fixed service identifier
    pub service: String,
}
