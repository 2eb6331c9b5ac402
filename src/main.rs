//! Kujira API server.
//!
//! A budgeting backend exposing CRUD REST endpoints over users, overviews,
//! logbooks, entries, purchases, and bug reports, with email/verification-code
//! based authentication.

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::{net::SocketAddr, sync::Arc};

use axum::http::{header, HeaderValue};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kujira=info,tower_http=warn")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let mut app = router::router()
        .with_state(AppState::new(db))
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CompressionLayer::new());

    // Max 20 requests a minute per client, production only.
    if config.rate_limit_enabled() {
        let governor_config = GovernorConfigBuilder::default()
            .per_second(3)
            .burst_size(20)
            .finish()
            .ok_or(ConfigError::InvalidRateLimiter)?;

        app = app.layer(GovernorLayer::new(Arc::new(governor_config)));
    }

    let listener =
        tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;

    tracing::info!(
        "Success! CORS-enabled web server is running at http://localhost:{}",
        config.port
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
