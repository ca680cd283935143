//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration next to a `./data` directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use seatfinder_shared::constants::DEFAULT_MAX_MAP_WIDTH;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:8080`
    pub http_addr: SocketAddr,

    /// CSV export of the guest sheet.
    /// Env: `GUEST_DATA_PATH`
    /// Default: `./data/map_seating_plan.csv`
    pub guest_data_path: PathBuf,

    /// Floor-plan image (PNG, JPEG or WebP).
    /// Env: `FLOOR_PLAN_PATH`
    /// Default: `./data/floor_plan.png`
    pub floor_plan_path: PathBuf,

    /// JSON file with table positions and marker radius.
    /// Env: `TABLE_COORDS_PATH`
    /// Default: unset (built-in layout).
    pub table_coords_path: Option<PathBuf>,

    /// Floor plans wider than this are downscaled.
    /// Env: `MAX_MAP_WIDTH`
    /// Default: `1800`
    pub max_map_width: u32,

    /// Page heading.
    /// Env: `EVENT_TITLE`
    /// Default: `"Find Your Seat"`
    pub event_title: String,

    /// Line shown under a found seat.
    /// Env: `CLOSING_MESSAGE`
    /// Default: `"Enjoy the Luncheon!!"`
    pub closing_message: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 8080).into(),
            guest_data_path: PathBuf::from("./data/map_seating_plan.csv"),
            floor_plan_path: PathBuf::from("./data/floor_plan.png"),
            table_coords_path: None,
            max_map_width: DEFAULT_MAX_MAP_WIDTH,
            event_title: "Find Your Seat".to_string(),
            closing_message: "Enjoy the Luncheon!!".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(value = %addr, "Invalid HTTP_ADDR, using default");
            }
        }

        if let Some(path) = var("GUEST_DATA_PATH") {
            config.guest_data_path = PathBuf::from(path);
        }

        if let Some(path) = var("FLOOR_PLAN_PATH") {
            config.floor_plan_path = PathBuf::from(path);
        }

        if let Some(path) = var("TABLE_COORDS_PATH") {
            if !path.is_empty() {
                config.table_coords_path = Some(PathBuf::from(path));
            }
        }

        if let Some(val) = var("MAX_MAP_WIDTH") {
            match val.parse::<u32>() {
                Ok(n) if n > 0 => config.max_map_width = n,
                _ => tracing::warn!(value = %val, "Invalid MAX_MAP_WIDTH, using default"),
            }
        }

        if let Some(title) = var("EVENT_TITLE") {
            config.event_title = title;
        }

        if let Some(msg) = var("CLOSING_MESSAGE") {
            config.closing_message = msg;
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}
