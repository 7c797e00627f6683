//! REST API handlers over the form core
//!
//! Provides the seed definition, export and rule interpretation endpoints.

use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
    response::IntoResponse,
};
use formsmith_core::export::ExportPayload;
use formsmith_core::rules::{interpret, tokenize, RuleToken};
use formsmith_core::{ExportError, ExportSerializer, FieldError, FormDefinition};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            errors: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }
}

// ============================================================================
// Definition
// ============================================================================

/// GET /api/definition/seed
pub async fn get_seed_definition() -> impl IntoResponse {
    let payload = ExportPayload::from(&FormDefinition::seed());
    (StatusCode::OK, Json(ApiResponse::success(payload)))
}

/// POST /api/export
///
/// Accepts any JSON value and returns the canonical export text.
pub async fn export_definition(body: Result<Json<Value>, JsonRejection>) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!("Rejected export body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<String>::error(rejection.body_text())),
            );
        }
    };

    match ExportSerializer::render_value(&input) {
        Ok(text) => (StatusCode::OK, Json(ApiResponse::success(text))),
        Err(e) => {
            let status = match &e {
                ExportError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ExportError::UnsupportedResolver(_) => StatusCode::NOT_IMPLEMENTED,
                ExportError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let errors = e.field_errors().to_vec();
            let mut response = ApiResponse::<String>::error(e.to_string());
            if !errors.is_empty() {
                response = response.with_errors(errors);
            }
            (status, Json(response))
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

#[derive(Deserialize)]
pub struct RulesRequest {
    #[serde(default)]
    pub rules: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RulesSummary {
    pub required: bool,
    pub tokens: Vec<RuleToken>,
}

/// POST /api/rules
pub async fn interpret_rules(body: Result<Json<RulesRequest>, JsonRejection>) -> impl IntoResponse {
    match body {
        Ok(Json(request)) => {
            let summary = RulesSummary {
                required: interpret(&request.rules).required,
                tokens: tokenize(&request.rules),
            };
            (StatusCode::OK, Json(ApiResponse::success(summary)))
        }
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(rejection.body_text())),
        ),
    }
}
