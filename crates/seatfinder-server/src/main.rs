//! # seatfinder-server
//!
//! Guest seat finder for a seated event.
//!
//! This binary provides:
//! - **Guest lookup** by placard name or relationship, with a second
//!   dropdown when several guests match
//! - **Floor-plan rendering** with the guest's table circled in red
//! - **JSON API** exposing the search vocabulary and lookup results
//!
//! The guest sheet, floor plan and table coordinates are loaded once at
//! startup and shared read-only by every request.

mod api;
mod config;
mod error;
mod lookup;
mod page;
mod venue;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::ServerConfig;
use crate::page::PageRenderer;
use crate::venue::Venue;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,seatfinder_server=debug")),
        )
        .init();

    info!("Starting seat finder v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Load guest data, floor plan and coordinates (never fatal)
    // -----------------------------------------------------------------------
    let venue = tokio::task::spawn_blocking({
        let config = config.clone();
        move || Venue::load(&config)
    })
    .await?;

    if let Some(err) = &venue.data_error {
        tracing::error!(error = %err, "Guest search disabled");
    }

    let pages = PageRenderer::new()?;

    let http_addr = config.http_addr;
    let app_state = AppState {
        venue: Arc::new(venue),
        config: Arc::new(config),
        pages: Arc::new(pages),
    };

    // -----------------------------------------------------------------------
    // 4. Run the HTTP server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
