pub mod emoji;
pub mod handlers;

use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, middleware::Logger, web};
use log::info;

use crate::emoji::{AppConfig, LookupTable};
use crate::handlers::Pipelines;

pub async fn run() -> io::Result<()> {
    let config = AppConfig::load();
    let server_cfg = config.server.clone();

    // Build the Unicode table up front instead of on the first request.
    let table = LookupTable::standard();
    info!("Loaded {} emoji sequences", table.len());

    info!(
        "emojify is listening on: http://{}:{}",
        server_cfg.host, server_cfg.port
    );
    let pipelines = web::Data::new(Pipelines::new(&config));
    let max_bytes = server_cfg.max_payload_bytes();
    let cors_origins = server_cfg.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pipelines.clone())
            .app_data(web::JsonConfig::default().limit(max_bytes))
            .wrap(api_cors(&cors_origins))
            .configure(handlers::config)
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}

/// The API only answers JSON GETs and POSTs and never reads cookies, so
/// credentials stay off even for an explicit origin list.
pub fn api_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
