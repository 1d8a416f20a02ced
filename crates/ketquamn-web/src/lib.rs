//! HTTP surface of KETQUAMN: robots.txt, sitemaps, the sitemap-ping API, the
//! Web Vitals beacon and the static legal pages.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod cli;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

use routes::{
    lottery_sitemap_handler, method_not_allowed, news_sitemap_handler, ping_sitemap_handler,
    robots_handler, sitemap_index_handler, vitals_handler,
};
pub use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let api = Router::new()
        .route(
            "/api/ping-sitemap",
            post(ping_sitemap_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/vitals",
            post(vitals_handler).fallback(method_not_allowed),
        )
        .layer(cors);

    let mut app = Router::new()
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_index_handler))
        .route("/sitemap-lottery.xml", get(lottery_sitemap_handler))
        .route("/news-sitemap.xml", get(news_sitemap_handler));

    for page in pages::LEGAL_PAGES.iter() {
        app = app.route(page.path, get(pages::legal_page_handler));
    }

    app.merge(api).with_state(state)
}

/// Bind `address` and serve until Ctrl+C or SIGTERM.
pub async fn serve(state: Arc<AppState>, address: &str) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(
        site = state.config.base_url(),
        environment = ?state.config.environment,
        "listening on {address}"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
