//! Server mode
//!
//! Configures and starts the HTTP server with all routes.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::TimingMiddleware;
use crate::api::services::{json_error_handler, link_routes, redirect_routes};
use crate::config::{CorsConfig, get_config};
use crate::runtime::lifetime;

/// Build CORS middleware from configuration
///
/// `"*"` in `allowed_origins` allows any origin; an empty list keeps the
/// browser's same-origin policy.
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(cors_config.max_age as usize);

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Register the JSON body config and all routes
///
/// `/api` is registered before the catch-all redirect route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(link_routes())
        .service(redirect_routes());
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup()
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let link_service = startup.link_service.clone();

    let config = get_config();
    let cors_config = config.cors.clone();
    if cors_config.allowed_origins.is_empty() {
        warn!("CORS allowed_origins is empty, cross-origin requests will be rejected");
    }

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware)
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .app_data(web::Data::new(link_service.clone()))
            .configure(configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count)
    .disable_signals();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res.context("HTTP server exited with error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            handle.stop(true).await;
            warn!("Graceful shutdown: HTTP server stopped");
        }
    }

    lifetime::shutdown::shutdown_storage(&storage).await;
    Ok(())
}
