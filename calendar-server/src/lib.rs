pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use actix_cors::Cors;
use actix_web::{Scope, web};

use crate::infrastructure::config::AppConfig;
use crate::presentation::handlers;

/// Everything served under `/api`: the content routes plus the health probe.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health::health))
        .service(handlers::content::scope())
}

/// CORS policy from config. A lone `*` means any origin; actix-cors only
/// accepts the wildcard via `allow_any_origin`, and credentials cannot be
/// combined with it.
pub fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
        .max_age(3600);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    cors = cors.supports_credentials();
    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
