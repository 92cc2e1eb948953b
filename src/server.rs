//! HTTP server setup and routing

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::client::BibClient;
use crate::config::Config;
use crate::error::{BibError, Result};

impl IntoResponse for BibError {
    fn into_response(self) -> Response {
        let status = match &self {
            BibError::Retrieval { .. } | BibError::Http(_) | BibError::Api { .. } => {
                StatusCode::BAD_GATEWAY
            }
            BibError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Health check endpoint
async fn health() -> &'static str {
    "OK"
}

/// `GET {base}<spreadsheet id>.csv` returns the BibTeX document as plain text.
async fn sheet_bibtex(State(client): State<BibClient>, Path(file): Path<String>) -> Response {
    let Some(spreadsheet_id) = file.strip_suffix(".csv") else {
        return not_found().await.into_response();
    };

    match client.generate_bibtex(spreadsheet_id).await {
        Ok(document) => document.into_response(),
        Err(e) => e.into_response(),
    }
}

/// 404 handler
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Build the axum router, with every route under `config.base_path`.
pub fn build_router(config: &Config, client: BibClient) -> Router {
    let base = &config.base_path;
    Router::new()
        .route(&format!("{}health", base), get(health))
        .route(&format!("{}{{file}}", base), get(sheet_bibtex))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

/// Run the server until it is shut down.
pub async fn run_server(config: &Config, client: BibClient, addr: &str) -> Result<()> {
    let router = build_router(config, client);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, base_path = %config.base_path, "Server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
