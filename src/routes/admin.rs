use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{repository_error, validation_error, AppState};
use crate::models::{HealthResponse, ImportRequest, ImportResponse};

/// Configure the role-independent routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/import", web::post().to(import_names));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.repo.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Import names into the catalog
///
/// POST /api/v1/import
///
/// Request body:
/// ```json
/// {
///   "names": ["string"],
///   "text": "one name\nper line"
/// }
/// ```
///
/// Names already in the catalog are left untouched.
async fn import_names(state: web::Data<AppState>, req: web::Json<ImportRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let names = req.collect_names();
    tracing::info!("Importing {} names", names.len());

    match state.repo.import_names(&names).await {
        Ok(inserted) => HttpResponse::Ok().json(ImportResponse {
            submitted: names.len(),
            inserted,
        }),
        Err(e) => repository_error("Failed to import names", e),
    }
}
