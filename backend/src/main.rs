mod handlers;
mod middleware;
mod models;
mod repository;
mod routes;
mod services;
mod utils;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    repository::PgInterviewRepository,
    services::interview::InterviewServiceImpl,
    utils::{config::Config, database::create_pool},
};

pub struct AppState<S> {
    pub interviews: Arc<S>,
    pub jwt_secret: String,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            interviews: Arc::clone(&self.interviews),
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interviews_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    let state = AppState {
        interviews: Arc::new(InterviewServiceImpl::new(PgInterviewRepository::new(db))),
        jwt_secret: config.jwt_secret.clone(),
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    let cors = if config.cors_allowed_origin == "*" {
        cors.allow_origin(HeaderValue::from_static("*"))
    } else {
        cors.allow_origin(config.cors_allowed_origin.parse::<HeaderValue>()?)
    };

    let app = routes::router(state)
        .layer(cors)
        .layer(DefaultBodyLimit::max(config.max_request_body_mb * 1024 * 1024));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Interview Service is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
