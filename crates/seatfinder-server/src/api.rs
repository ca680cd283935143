use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use seatfinder_shared::floor_plan::encode_png;
use seatfinder_shared::MapRender;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::lookup::{lookup, LookupOutcome};
use crate::page::PageRenderer;
use crate::venue::Venue;

/// Header on `/map.png` responses telling whether the table was marked.
pub const MARKER_STATUS_HEADER: &str = "x-marker-status";

#[derive(Clone)]
pub struct AppState {
    pub venue: Arc<Venue>,
    pub config: Arc<ServerConfig>,
    pub pages: Arc<PageRenderer>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/map.png", get(map_png))
        .route("/api/search-terms", get(search_terms))
        .route("/api/lookup", get(lookup_json))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct LookupParams {
    q: Option<String>,
    pick: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MapParams {
    table: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    guests: usize,
    map_loaded: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        guests: state.venue.directory.len(),
        map_loaded: state.venue.floor_plan.is_some(),
    })
}

async fn index(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Html<String>, ServerError> {
    let outcome = lookup(&state.venue, params.q.as_deref(), params.pick.as_deref());
    let html = state.pages.render(
        &state.config,
        &state.venue,
        params.q.as_deref(),
        &outcome,
    )?;
    Ok(Html(html))
}

async fn search_terms(State(state): State<AppState>) -> Result<Json<Vec<String>>, ServerError> {
    if let Some(err) = &state.venue.data_error {
        return Err(ServerError::DataUnavailable(err.clone()));
    }
    Ok(Json(state.venue.directory.search_terms().to_vec()))
}

async fn lookup_json(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupOutcome>, ServerError> {
    if let Some(err) = &state.venue.data_error {
        return Err(ServerError::DataUnavailable(err.clone()));
    }
    Ok(Json(lookup(
        &state.venue,
        params.q.as_deref(),
        params.pick.as_deref(),
    )))
}

/// The floor plan as PNG, with `table` marked when it has coordinates.
async fn map_png(
    State(state): State<AppState>,
    Query(params): Query<MapParams>,
) -> Result<Response, ServerError> {
    if state.venue.floor_plan.is_none() {
        let reason = state
            .venue
            .map_error
            .clone()
            .unwrap_or_else(|| "no floor plan configured".to_string());
        return Err(ServerError::ImageUnavailable(reason));
    }

    let table = params.table.filter(|t| !t.trim().is_empty());
    let venue = state.venue.clone();

    // PNG encoding is CPU-bound; keep it off the async workers.
    let (png, status) = tokio::task::spawn_blocking(move || -> Result<_, ServerError> {
        let plan = venue
            .floor_plan
            .as_ref()
            .ok_or_else(|| ServerError::Internal("floor plan disappeared".into()))?;

        match table {
            Some(table) => {
                let render = plan.annotate(&table, &venue.coords);
                let status = match &render {
                    MapRender::Marked { .. } => "marked",
                    MapRender::CoordinatesMissing { table, .. } => {
                        info!(table = %table, "Table location missing from map configuration");
                        "missing"
                    }
                };
                Ok((encode_png(render.image())?, status))
            }
            None => Ok((encode_png(plan.base())?, "none")),
        }
    })
    .await
    .map_err(|e| ServerError::Internal(format!("Render task failed: {e}")))??;

    debug!(bytes = png.len(), status, "Serving floor plan");

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
        [(MARKER_STATUS_HEADER, status)],
        png,
    )
        .into_response())
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
