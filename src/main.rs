use http::{Method, header};
use splitwise::api::handlers::api_routes;
use splitwise::config::CONFIG;
use splitwise::{InMemoryLogging, InMemoryStorage, SplitwiseService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Starting with {:?}", *CONFIG);

    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let service = Arc::new(SplitwiseService::new(storage, logging));

    let app = api_routes(service)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout_secs)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
