mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::post_service::PostService;
use crate::data::post_repository::JsonFilePostRepository;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use infrastructure::config::AppConfig;
use infrastructure::logging::init_logging;
use presentation::assets::{self, PublicAssets};
use presentation::handlers;
use presentation::middleware::RequestTracing;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;

    let post_repo = Arc::new(JsonFilePostRepository::open(&config.posts_file));
    let post_service = PostService::new(post_repo);
    let public_assets = PublicAssets::new(config.public_dir.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestTracing)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .app_data(web::Data::new(post_service.clone()))
            .app_data(web::Data::new(public_assets.clone()))
            .configure(handlers::configure)
            .service(assets::resource())
    })
    .bind((config.host.as_str(), config.port))?;

    info!(
        "Pizza blog server is running on http://{}:{}",
        config.host, config.port
    );

    server.run().await?;
    Ok(())
}
