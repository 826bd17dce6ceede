use std::sync::Arc;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};

use calendar_server::{api_scope, build_cors};
use calendar_server::application::content_service::ContentService;
use calendar_server::data::content_repository::InMemoryContentRepository;
use calendar_server::infrastructure::config::AppConfig;
use calendar_server::infrastructure::logging::init_logging;
use calendar_server::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");

    let content_repo = Arc::new(InMemoryContentRepository::new());
    let content_service = ContentService::new(Arc::clone(&content_repo));

    let config_data = config.clone();

    tracing::info!(host = %config.host, port = config.port, "starting content calendar server");

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(content_service.clone()))
            .service(api_scope())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
