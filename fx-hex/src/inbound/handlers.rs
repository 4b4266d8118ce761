//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use currency_directory::CurrencyDirectory;
use fx_types::{
    ConversionError, ConversionResponse, ConvertRequest, CurrencyInfo, ErrorResponse, RateProvider,
};

use crate::ConversionService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConversionService<P>,
    pub directory: CurrencyDirectory,
}

/// Errors a handler can answer with.
#[derive(Debug)]
pub enum ApiError {
    Conversion(ConversionError),
    NotFound(String),
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        ApiError::Conversion(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            ApiError::Conversion(err) => {
                let status = match err {
                    ConversionError::RateUnavailable { .. } => StatusCode::NOT_FOUND,
                    ConversionError::ProviderError(_) | ConversionError::NonPositiveRate(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, err.kind(), err.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
            kind: kind.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state), fields(base = %req.base, target = %req.target))]
pub async fn convert<P: RateProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<ConvertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    match state
        .service
        .convert(&req.amount, &req.base, &req.target)
        .await
    {
        Ok(result) => {
            tracing::info!(converted = %result.converted(), "conversion succeeded");
            Ok(Json(ConversionResponse::from(&result)))
        }
        Err(err) => {
            if err.is_input_error() {
                tracing::debug!(kind = err.kind(), "conversion rejected: {}", err);
            } else {
                tracing::warn!(kind = err.kind(), "conversion failed: {}", err);
            }
            Err(err.into())
        }
    }
}

/// List the currency directory.
pub async fn list_currencies<P: RateProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    let currencies: Vec<CurrencyInfo> = state
        .directory
        .iter()
        .map(CurrencyInfo::summary)
        .collect();
    Json(currencies)
}

/// Get one currency, including its flag.
#[tracing::instrument(skip(state))]
pub async fn get_currency<P: RateProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .directory
        .find(&code)
        .map(|currency| Json(CurrencyInfo::detailed(currency)))
        .ok_or_else(|| ApiError::NotFound(format!("Currency {} not found", code.to_uppercase())))
}

/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
