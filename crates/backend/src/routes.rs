use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers;
use crate::domain::a001_pokemon::service::PokemonService;
use crate::shared::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(service: Arc<PokemonService>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Pokemon handlers
        .route(
            "/api/pokemon/list",
            get(handlers::a001_pokemon::list_paginated),
        )
        .route("/api/pokemon/:id", get(handlers::a001_pokemon::get_by_id))
        .with_state(service)
        // SPA: /list и /pokemon/:id отдаются как index.html
        .fallback_service(
            ServeDir::new(static_dir)
                .not_found_service(ServeFile::new(format!("{}/index.html", static_dir))),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
