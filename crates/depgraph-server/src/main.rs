use axum::{
    http::{header, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use depgraph_common::config::AppConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod handlers;
mod store;

use store::{EdgeStore, PgEdgeStore};

struct AppState {
    store: Arc<dyn EdgeStore>,
}

fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::root))
        .route("/version", get(handlers::version))
        .route("/nodes", get(handlers::nodes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::map_response(handlers::cors_headers))
                .layer(cors)
                .into_inner(),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded .env from: {:?}", path),
        Err(e) => tracing::warn!("Failed to load .env file: {}. Using system environment variables.", e),
    }

    let config = AppConfig::load().expect("Failed to load configuration");
    tracing::info!(
        "Database pool: max_connections={}, acquire_timeout={}s",
        config.database.max_connections,
        config.database.acquire_timeout_secs
    );

    let store = PgEdgeStore::new(&config.database).expect("Invalid database URL in configuration");

    let state = Arc::new(AppState {
        store: Arc::new(store),
    });

    let app = build_router(state);

    let http_addr: SocketAddr = config
        .listen_addr()
        .parse()
        .expect("Invalid http.host/http.port in configuration");

    tracing::info!("HTTP API listening on {}", http_addr);
    let listener = tokio::net::TcpListener::bind(http_addr).await.unwrap();

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            tracing::info!("Shutdown signal received.");
        })
        .await
        .unwrap();

    tracing::info!("Depgraph server stopped.");
}
