//! Cash App sign-in - Dioxus Fullstack Web Application
//!
//! Two-step email/SMS sign-in in front of the GraphQL API. The flow logic
//! lives in the `login-flow` crate; this crate renders it and talks to the
//! API through server functions.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
// Only server functions talk to the API directly
#[cfg(any(feature = "server", test))]
mod graphql;
mod pages;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[cfg(not(feature = "server"))]
fn main() {
    let config = load_config();
    init_tracing(&config);

    dioxus::launch(app::App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use dioxus::prelude::*;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    let config = load_config();
    init_tracing(&config);
    graphql::init_api_url(config.api_url.clone());

    // Server functions read the sign-in token from this session
    let sessions = SessionManagerLayer::new(MemoryStore::default());

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::builder(), app::App)
        .layer(sessions);

    let address = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Serving sign-in on {}", address);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

fn load_config() -> Config {
    Config::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration, using defaults: {:#}", e);
        Config::default()
    })
}

fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();
}
