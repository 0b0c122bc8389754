//! Process bootstrap: configuration, storage, router assembly, serving.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::app::App;
use crate::infrastructure::config::{AppConfig, ServerConfig};
use crate::infrastructure::persistence::{Database, SqliteRecordRepo};

/// Log filter used when `RUST_LOG` is unset. `sqlx` is included so
/// `DATABASE_LOG_STATEMENTS` output is visible.
const DEFAULT_LOG_FILTER: &str = "notepost_engine=debug,tower_http=debug,sqlx=debug";

pub async fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting notepost engine");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Database: {}", config.database.url);
    tracing::info!("  Max connections: {}", config.database.max_connections);

    // Storage must be reachable and migrated before anything is served
    let db = Database::connect(&config.database)
        .await
        .context("failed to open database")?;
    db.migrate()
        .await
        .context("failed to apply database migrations")?;

    let app = Arc::new(App::new(Arc::new(SqliteRecordRepo::new(
        db.pool().clone(),
    ))));
    let router = build_router(app, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    tracing::info!("notepost engine shutdown complete");
    Ok(())
}

/// Assemble the HTTP router with its outer layers.
pub fn build_router(app: Arc<App>, config: &ServerConfig) -> Router {
    let mut router = api::routes()
        .with_state(app)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config) {
        router = router.layer(cors);
    }

    router
}

fn build_cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let allowed_origins = config.cors_allowed_origins.as_ref()?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS configured to allow ANY origin");
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}

/// Resolves on Ctrl+C, SIGTERM or SIGQUIT.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = unix_signal(tokio::signal::unix::SignalKind::terminate(), "SIGTERM");
    #[cfg(unix)]
    let quit = unix_signal(tokio::signal::unix::SignalKind::quit(), "SIGQUIT");

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    #[cfg(not(unix))]
    let quit = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
        _ = quit => {
            tracing::info!("Received SIGQUIT, initiating graceful shutdown...");
        }
    }
}

#[cfg(unix)]
async fn unix_signal(kind: tokio::signal::unix::SignalKind, name: &'static str) {
    match tokio::signal::unix::signal(kind) {
        Ok(mut signal) => {
            signal.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install {} handler", name);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryRecordRepo;
    use crate::infrastructure::ports::{RecordRepo, RepoError};
    use async_trait::async_trait;
    use axum::body::Body;
    use notepost_domain::{CreateRecord, Record};
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    fn server_config(cors: Option<Vec<&str>>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout: Duration::from_secs(5),
            cors_allowed_origins: cors.map(|o| o.into_iter().map(String::from).collect()),
        }
    }

    fn in_memory_app() -> Arc<App> {
        Arc::new(App::new(Arc::new(InMemoryRecordRepo::new())))
    }

    /// Storage that never answers within any reasonable timeout.
    struct StalledRecordRepo;

    #[async_trait]
    impl RecordRepo for StalledRecordRepo {
        async fn get_all(&self) -> Result<Vec<Record>, RepoError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn create(&self, _input: CreateRecord) -> Result<Record, RepoError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(RepoError::database("create_record", "stalled"))
        }
    }

    #[tokio::test]
    async fn layered_router_serves_records() {
        let router = build_router(in_memory_app(), &server_config(None));

        let request = HttpRequest::post("/data")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message":"layered"}"#))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(HttpRequest::get("/data").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"data": [{"id": 1, "message": "layered"}]})
        );
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let router = build_router(in_memory_app(), &server_config(Some(vec!["http://a.test"])));

        let request = HttpRequest::get("/data")
            .header(header::ORIGIN, "http://a.test")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://a.test"
        );
    }

    #[tokio::test]
    async fn cors_is_off_without_origins() {
        let router = build_router(in_memory_app(), &server_config(None));

        let request = HttpRequest::get("/data")
            .header(header::ORIGIN, "http://a.test")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn wildcard_origin_builds_layer() {
        assert!(build_cors_layer(&server_config(Some(vec!["*"]))).is_some());
    }

    #[test]
    fn unparseable_origins_disable_cors() {
        assert!(build_cors_layer(&server_config(Some(vec!["bad\norigin"]))).is_none());
    }

    #[tokio::test]
    async fn slow_request_times_out_with_408() {
        let mut config = server_config(None);
        config.request_timeout = Duration::from_millis(20);
        let router = build_router(Arc::new(App::new(Arc::new(StalledRecordRepo))), &config);

        let response = router
            .oneshot(HttpRequest::get("/data").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn sigquit_triggers_shutdown() {
        // Own listener first so the signal never falls through to the default action.
        let _guard =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::quit()).unwrap();
        let mut shutdown = tokio::spawn(shutdown_signal());
        let pid = std::process::id().to_string();

        let finished = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                std::process::Command::new("kill")
                    .args(["-QUIT", &pid])
                    .status()
                    .unwrap();
                if tokio::time::timeout(Duration::from_millis(50), &mut shutdown)
                    .await
                    .is_ok()
                {
                    break;
                }
            }
        })
        .await;

        assert!(finished.is_ok());
    }
}
