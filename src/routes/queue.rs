use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{repository_error, validation_error, AppState};
use crate::models::{DislikeResponse, NameRequest, NextResponse, OkResponse, Role};

/// Configure the judging routes under `/roles/{role}`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/next", web::get().to(next))
        .route("/like", web::post().to(like))
        .route("/like/undo", web::post().to(undo_like))
        .route("/superlike", web::post().to(superlike))
        .route("/dislike", web::post().to(dislike))
        .route("/dislike/undo", web::post().to(undo_dislike));
}

/// What the role should see next
///
/// GET /api/v1/roles/{role}/next
///
/// Presenting an unseen match acknowledges it, so the next call moves on.
async fn next(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    let role = role.into_inner();

    match state.matcher.next_for(role).await {
        Ok(presentation) => HttpResponse::Ok().json(NextResponse { role, presentation }),
        Err(e) => repository_error("Failed to pick next name", e),
    }
}

/// Like a name
///
/// POST /api/v1/roles/{role}/like
///
/// Request body:
/// ```json
/// { "name": "string" }
/// ```
async fn like(
    state: web::Data<AppState>,
    role: web::Path<Role>,
    req: web::Json<NameRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.repo.like(role.into_inner(), &req.name).await {
        Ok(()) => HttpResponse::Ok().json(OkResponse { success: true }),
        Err(e) => repository_error("Failed to like name", e),
    }
}

async fn undo_like(
    state: web::Data<AppState>,
    role: web::Path<Role>,
    req: web::Json<NameRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.repo.undo_like(role.into_inner(), &req.name).await {
        Ok(()) => HttpResponse::Ok().json(OkResponse { success: true }),
        Err(e) => repository_error("Failed to undo like", e),
    }
}

/// Superlike a name, prompting the partner to react to it
///
/// POST /api/v1/roles/{role}/superlike
async fn superlike(
    state: web::Data<AppState>,
    role: web::Path<Role>,
    req: web::Json<NameRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.repo.superlike(role.into_inner(), &req.name).await {
        Ok(()) => HttpResponse::Ok().json(OkResponse { success: true }),
        Err(e) => repository_error("Failed to superlike name", e),
    }
}

/// Dislike a name
///
/// POST /api/v1/roles/{role}/dislike
///
/// Responds with how many times the role has now disliked the name.
async fn dislike(
    state: web::Data<AppState>,
    role: web::Path<Role>,
    req: web::Json<NameRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.repo.dislike(role.into_inner(), &req.name).await {
        Ok(count) => HttpResponse::Ok().json(DislikeResponse {
            name: req.name.clone(),
            dislike_count: count,
        }),
        Err(e) => repository_error("Failed to dislike name", e),
    }
}

async fn undo_dislike(
    state: web::Data<AppState>,
    role: web::Path<Role>,
    req: web::Json<NameRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.repo.undo_dislike(role.into_inner(), &req.name).await {
        Ok(()) => HttpResponse::Ok().json(OkResponse { success: true }),
        Err(e) => repository_error("Failed to undo dislike", e),
    }
}
