//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fx_types::domain::CurrencyCode;
use fx_types::dto::{ConversionResponse, ConvertRequest, CurrencyInfo, ErrorResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount using a live rate
#[utoipa::path(
    post,
    path = "/api/convert",
    tag = "conversion",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion succeeded", body = ConversionResponse),
        (status = 400, description = "Invalid amount or identical currencies", body = ErrorResponse),
        (status = 404, description = "Provider does not quote this pair", body = ErrorResponse),
        (status = 502, description = "Rate provider failed", body = ErrorResponse)
    )
)]
async fn convert() {}

/// List all currencies
#[utoipa::path(
    get,
    path = "/api/currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "Currency directory, without flags", body = Vec<CurrencyInfo>)
    )
)]
async fn list_currencies() {}

/// Get one currency with its flag
#[utoipa::path(
    get,
    path = "/api/currencies/{code}",
    tag = "currencies",
    params(
        ("code" = String, Path, description = "Currency code, case-insensitive")
    ),
    responses(
        (status = 200, description = "Currency found", body = CurrencyInfo),
        (status = 404, description = "Currency not found", body = ErrorResponse)
    )
)]
async fn get_currency() {}

/// OpenAPI documentation for the conversion API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter API",
        version = "1.0.0",
        description = "Converts amounts between currencies using live rates from currencylayer.\n\nEvery call fetches a fresh rate. Failed lookups are reported, never retried.",
        license(name = "MIT"),
    ),
    paths(health, convert, list_currencies, get_currency),
    components(
        schemas(
            ConvertRequest,
            ConversionResponse,
            CurrencyInfo,
            CurrencyCode,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "conversion", description = "Currency conversion"),
        (name = "currencies", description = "Currency directory"),
    )
)]
pub struct ApiDoc;
