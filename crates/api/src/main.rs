use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use khasra_core::catalog::CityCatalog;
use khasra_db::config::DatabaseConfig;
use khasra_db::resolver::KhasraResolver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use khasra_api::config::ServerConfig;
use khasra_api::router::build_app_router;
use khasra_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let mut config = ServerConfig::from_env();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "khasra_api=debug,khasra_db=debug,tower_http=debug".into());
    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- City catalog ---
    let catalog = CityCatalog::new(&config.city_tables).expect("Invalid CITY_TABLES entry");
    tracing::info!(
        cities = ?catalog.names().collect::<Vec<_>>(),
        "City catalog loaded"
    );

    // --- Database ---
    let db_config = DatabaseConfig::from_env();

    let configured_timeout = config.request_timeout_secs;
    if config.fit_request_timeout(db_config.pool.storage_budget(KhasraResolver::READS)) {
        tracing::info!(
            configured_secs = configured_timeout,
            request_timeout_secs = config.request_timeout_secs,
            "Raised request timeout above database timeouts"
        );
    }

    let connect_options = db_config
        .connect_options()
        .expect("Invalid database connection settings");

    let pool = khasra_db::create_pool(connect_options, &db_config.pool)
        .await
        .expect("Failed to connect to database");
    tracing::info!(
        max_connections = db_config.pool.max_connections,
        "Database connection pool created"
    );

    khasra_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    if db_config.run_migrations {
        khasra_db::run_migrations(&pool)
            .await
            .expect("Failed to run database migrations");
        tracing::info!("Database migrations applied");
    }

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        catalog: Arc::new(catalog),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");

    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(drain, pool.close()).await.is_err() {
        tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Timed out waiting for database connections to close"
        );
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
