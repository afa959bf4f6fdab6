//! Health Route
//!
//! GET /api/health - fixed-shape status payload for uptime monitors and
//! the installed app's connectivity probe.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::web::dto::HealthResponse;

/// Service identifier reported by the health endpoint
pub const SERVICE_NAME: &str = "gilnokie-gms";

/// GET /api/health
///
/// Always 200 while the process can answer at all. No inputs and no side
/// effects beyond reading the clock; a failure to respond is itself the
/// signal monitors act on.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload() {
        let Json(body) = health().await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "gilnokie-gms");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
        assert!(body.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_health_timestamp_is_current() {
        let before = Utc::now();
        let Json(body) = health().await;
        let reported = chrono::DateTime::parse_from_rfc3339(&body.timestamp)
            .unwrap()
            .with_timezone(&Utc);

        assert!(reported >= before - chrono::Duration::seconds(1));
        assert!(reported <= Utc::now() + chrono::Duration::seconds(1));
    }
}
