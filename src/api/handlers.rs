//! API request handlers
//!
//! Handlers for all REST API endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::core::form::NOT_SUPPORTED_MESSAGE;
use crate::core::FormOutcome;
use crate::error::ConvertError;
use crate::types::{deserialize_selection, ConversionRequest, ConversionRule, Unit};

use super::server::AppState;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Unit Converter API".to_string(),
        version: state.version.clone(),
        description: "Convert values between meter/kilometer and gram/kilogram".to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new("/api/v1/units", "GET", "List units and conversion rules"),
            EndpointInfo::new("/api/v1/convert", "POST", "Convert a value between two units"),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["units".to_string(), "convert".to_string()],
    }))
}

/// A unit as shown in a selector
#[derive(Serialize)]
pub struct UnitInfo {
    pub id: Unit,
    pub label: String,
}

/// Units response
#[derive(Serialize)]
pub struct UnitsResponse {
    pub units: Vec<UnitInfo>,
    pub rules: Vec<ConversionRule>,
}

/// GET /api/v1/units - Units and registered rules
pub async fn units(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(UnitsResponse {
        units: Unit::ALL
            .into_iter()
            .map(|unit| UnitInfo {
                id: unit,
                label: unit.label().to_string(),
            })
            .collect(),
        rules: state.table.rules().copied().collect(),
    }))
}

/// Convert request
///
/// `from` and `to` accept `null`, `""` or a missing field as "no unit selected".
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub value: f64,
    #[serde(default, deserialize_with = "deserialize_selection")]
    pub from: Option<Unit>,
    #[serde(default, deserialize_with = "deserialize_selection")]
    pub to: Option<Unit>,
}

impl ConvertRequest {
    /// Resolve the selections into a concrete request
    pub fn resolve(&self) -> Result<ConversionRequest, ConvertError> {
        let from = self
            .from
            .ok_or_else(|| ConvertError::MissingUnit("from".to_string()))?;
        let to = self
            .to
            .ok_or_else(|| ConvertError::MissingUnit("to".to_string()))?;
        Ok(ConversionRequest::new(self.value, from, to))
    }
}

/// Convert response
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub supported: bool,
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
    /// JSON `null` when unsupported, and also when the product is not finite
    /// (serde_json has no infinity); `supported` tells the two apart.
    pub result: Option<f64>,
    pub message: String,
}

/// POST /api/v1/convert - Convert a value
///
/// An unsupported pair is a successful call with `supported: false`.
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvertRequest>,
) -> Response {
    let request = match req.resolve() {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejected convert request: {}", e);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::<ConvertResponse>::err(e.to_string())),
            )
                .into_response();
        }
    };

    let outcome = FormOutcome::from(request.evaluate(&state.table));
    debug!(
        "Converted {} {} -> {}: {}",
        request.value, request.from, request.to, outcome
    );

    let message = match outcome {
        FormOutcome::Converted(_) => outcome.message(),
        FormOutcome::Unsupported(_) => NOT_SUPPORTED_MESSAGE.to_string(),
    };

    Json(ApiResponse::ok(ConvertResponse {
        supported: outcome.is_supported(),
        value: request.value,
        from: request.from,
        to: request.to,
        result: outcome.value(),
        message,
    }))
    .into_response()
}
