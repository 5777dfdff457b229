//! Preview HTTP server
//!
//! Serves the organized variables at `/api/variables.json` and the preview UI as static
//! files. The variables are serialized once at startup; every request gets the same
//! snapshot.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::{IoContext, JsonContext, ViewerError, ViewerResult};
use crate::theme::OrganizedVariables;

/// Path the preview UI fetches the variables from
pub const VARIABLES_ROUTE: &str = "/api/variables.json";
/// Number of successive ports tried after the requested one
pub const PORT_RETRIES: u16 = 10;

#[derive(Clone)]
pub struct AppState {
    variables_json: Arc<String>,
}

impl AppState {
    pub fn new(organized: &OrganizedVariables) -> ViewerResult<Self> {
        Ok(Self {
            variables_json: Arc::new(to_json(organized)?),
        })
    }
}

/// Serialize organized variables the way the UI expects them (pretty printed)
pub fn to_json(organized: &OrganizedVariables) -> ViewerResult<String> {
    serde_json::to_string_pretty(organized).with_json_context("Failed to serialize variables")
}

/// Write the organized variables as JSON, creating parent directories
pub async fn write_variables_json(organized: &OrganizedVariables, path: &Path) -> ViewerResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_io_context(&format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(path, to_json(organized)?)
        .await
        .with_io_context(&format!("Failed to write {}", path.display()))?;

    info!("Wrote variables to {}", path.display());
    Ok(())
}

async fn variables_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.variables_json.as_str().to_owned(),
    )
}

/// Build the router: the variables endpoint plus static files from `ui_dir`
pub fn create_router(state: AppState, ui_dir: &Path) -> Router {
    Router::new()
        .route(VARIABLES_ROUTE, get(variables_handler))
        .fallback_service(ServeDir::new(ui_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `127.0.0.1:port`, moving on to the next port while the current one is in use
pub async fn bind_with_retry(port: u16, retries: u16) -> ViewerResult<(TcpListener, u16)> {
    let mut current = port;
    let mut remaining = retries;

    loop {
        match TcpListener::bind(("127.0.0.1", current)).await {
            Ok(listener) => return Ok((listener, current)),
            Err(e) if e.kind() == ErrorKind::AddrInUse && remaining > 0 => {
                let Some(next) = current.checked_add(1) else {
                    break;
                };
                warn!("Port {} is in use, trying {}", current, next);
                current = next;
                remaining -= 1;
            }
            Err(e) => {
                return Err(e).with_io_context(&format!("Failed to bind port {}", current));
            }
        }
    }

    Err(ViewerError::Server {
        message: format!("No free port found starting at {}", port),
    })
}

/// A bound preview server, ready to run
pub struct ViewerServer {
    listener: TcpListener,
    router: Router,
    port: u16,
}

impl ViewerServer {
    /// Prepare the server state and bind a port
    pub async fn bind(organized: &OrganizedVariables, ui_dir: &Path, port: u16) -> ViewerResult<Self> {
        let state = AppState::new(organized)?;

        if ui_dir.is_dir() {
            // The built UI can also load the snapshot without the server
            if let Err(e) = write_variables_json(organized, &ui_dir.join("api/variables.json")).await {
                warn!("Could not write static variables file: {}", e);
            }
        } else {
            warn!("UI directory {} not found, only the API will be served", ui_dir.display());
        }

        let router = create_router(state, ui_dir);
        let (listener, port) = bind_with_retry(port, PORT_RETRIES).await?;

        Ok(Self {
            listener,
            router,
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> ViewerResult<()> {
        info!("Server started at {}", self.url());

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ViewerError::Server {
                message: e.to_string(),
            })?;

        info!("Server closed");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    info!("Shutting down...");
}
