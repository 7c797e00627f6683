use axum::{http::StatusCode, response::IntoResponse, Json};
use formsmith_core::export::strategy::supported_resolvers;
use formsmith_core::{FormDefinition, ResolverKind, UiLibKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub core_version: String,
    pub uptime_seconds: u64,
    /// Resolvers the export path can serialize for.
    pub resolvers: Vec<ResolverKind>,
    pub ui_libs: Vec<UiLibKind>,
    /// Rows in the definition a fresh editor starts from.
    pub seed_fields: usize,
}

pub struct HealthHandler {
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn status(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            core_version: formsmith_core::VERSION.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            resolvers: supported_resolvers(),
            ui_libs: UiLibKind::ALL.to_vec(),
            seed_fields: FormDefinition::seed().fields.len(),
        }
    }

    /// Returns 200 while the server is running
    pub async fn health(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(self.status()))
    }
}

impl Default for HealthHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let handler = HealthHandler::new();
        let response = handler.health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_status_reports_export_capabilities() {
        let status = HealthHandler::new().status();
        assert_eq!(status.core_version, formsmith_core::VERSION);
        assert_eq!(status.resolvers, vec![ResolverKind::Zod]);
        assert_eq!(status.ui_libs.len(), 3);
        assert_eq!(status.seed_fields, 1);
    }
}
