use actix_web::{web, HttpResponse, Responder};

use super::export::{attachment, disliked_csv, liked_csv, matches_csv};
use super::{repository_error, AppState};
use crate::models::{DislikedResponse, LikedResponse, MatchesResponse, Role};

/// Configure the read-only list routes under `/roles/{role}`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/liked", web::get().to(liked))
        .route("/liked/export_csv", web::get().to(export_liked))
        .route("/disliked", web::get().to(disliked))
        .route("/disliked/export_csv", web::get().to(export_disliked))
        .route("/matches", web::get().to(matches))
        .route("/matches/export_csv", web::get().to(export_matches))
        .route("/stats", web::get().to(stats));
}

/// Names the role liked, ordered by name
///
/// GET /api/v1/roles/{role}/liked
async fn liked(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    let role = role.into_inner();
    match state.repo.liked_names(role).await {
        Ok(names) => HttpResponse::Ok().json(LikedResponse { role, names }),
        Err(e) => repository_error("Failed to fetch liked names", e),
    }
}

async fn export_liked(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    match state.repo.liked_names(role.into_inner()).await {
        Ok(names) => attachment("liked.csv", liked_csv(&names)),
        Err(e) => repository_error("Failed to export liked names", e),
    }
}

/// Names the role disliked, ordered by name
///
/// GET /api/v1/roles/{role}/disliked
async fn disliked(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    let role = role.into_inner();
    match state.repo.disliked_names(role).await {
        Ok(names) => HttpResponse::Ok().json(DislikedResponse { role, names }),
        Err(e) => repository_error("Failed to fetch disliked names", e),
    }
}

async fn export_disliked(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    match state.repo.disliked_names(role.into_inner()).await {
        Ok(names) => attachment("disliked.csv", disliked_csv(&names)),
        Err(e) => repository_error("Failed to export disliked names", e),
    }
}

/// Names liked by both roles, ordered by name
///
/// GET /api/v1/roles/{role}/matches
async fn matches(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    let role = role.into_inner();
    match state.repo.matches(role).await {
        Ok(matches) => HttpResponse::Ok().json(MatchesResponse { role, matches }),
        Err(e) => repository_error("Failed to fetch matches", e),
    }
}

async fn export_matches(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    match state.repo.matches(role.into_inner()).await {
        Ok(matches) => attachment("matches.csv", matches_csv(&matches)),
        Err(e) => repository_error("Failed to export matches", e),
    }
}

/// Progress of the role through the catalog
///
/// GET /api/v1/roles/{role}/stats
async fn stats(state: web::Data<AppState>, role: web::Path<Role>) -> impl Responder {
    match state.matcher.stats(role.into_inner()).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => repository_error("Failed to fetch stats", e),
    }
}
