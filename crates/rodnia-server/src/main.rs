//! Rodnia server binary - REST API for the family relationship graph.

use clap::Parser;
use parking_lot::RwLock;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;
#[cfg(feature = "swagger-ui")]
use utoipa_swagger_ui::SwaggerUi;

use rodnia_core::{FamilyStore, TraversalLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PATHS};
use rodnia_server::{build_router, AppState};

/// Rodnia Server - family relationship graph API
#[derive(Parser, Debug)]
#[command(name = "rodnia-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "RODNIA_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "RODNIA_PORT")]
    port: u16,

    /// Maximum number of edges in any explored path
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, env = "RODNIA_MAX_DEPTH")]
    max_depth: usize,

    /// Maximum number of paths a single search may collect
    #[arg(long, default_value_t = DEFAULT_MAX_PATHS, env = "RODNIA_MAX_PATHS")]
    max_paths: usize,
}

/// Build CORS layer from environment configuration.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("RODNIA_CORS_ORIGIN") {
        Ok(origins) => {
            use tower_http::cors::AllowOrigin;
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        Err(_) => {
            tracing::warn!(
                "CORS: permissive (dev mode). Set RODNIA_CORS_ORIGIN to restrict origins."
            );
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting Rodnia server...");

    let api_key = std::env::var("RODNIA_API_KEY").ok();
    if api_key.is_some() {
        tracing::info!("Authentication: enabled (RODNIA_API_KEY is set)");
    } else {
        tracing::warn!("Authentication: DISABLED (dev mode). Set RODNIA_API_KEY to enable.");
    }

    let limits = TraversalLimits::new(args.max_depth, args.max_paths);
    tracing::info!(
        "Path search ceilings: max_depth={}, max_paths={}",
        limits.max_depth,
        limits.max_paths
    );
    tracing::info!(
        "Family graph is in-memory. Members and relationships will NOT persist across restarts."
    );

    let state = Arc::new(AppState {
        store: RwLock::new(FamilyStore::new()),
        limits,
        api_key,
    });

    let app = build_router(state);

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", rodnia_server::ApiDoc::openapi()),
    );

    let app = app
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Rodnia server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
