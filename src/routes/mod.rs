// Route exports
pub mod admin;
pub mod export;
pub mod lists;
pub mod queue;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{Repository, RepositoryError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        let matcher = Matcher::new(repo.clone());
        Self { repo, matcher }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(admin::configure)
            .service(
                web::scope("/roles/{role}")
                    .configure(queue::configure)
                    .configure(lists::configure),
            ),
    );
}

/// Register the JSON error handlers for malformed payloads and paths
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

/// JSON error response for extractor errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle unknown roles and other malformed path segments
pub fn handle_path_error(err: error::PathError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::debug!("Path error on {}: {}", req.path(), err);
    JsonError {
        error: "not_found".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 404,
    }
    .into()
}

/// Build the response for a failed repository call
pub(crate) fn repository_error(context: &str, err: RepositoryError) -> HttpResponse {
    match &err {
        RepositoryError::UnknownName(id) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Unknown name".to_string(),
            message: format!("Name '{}' is not in the catalog", id),
            status_code: 404,
        }),
        _ if err.is_retryable() => {
            tracing::warn!("{}: {}", context, err);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: context.to_string(),
                message: err.to_string(),
                status_code: 503,
            })
        }
        _ => {
            tracing::error!("{}: {}", context, err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Build the response for a request that failed validation
pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
