//! Read-only diagnostic view over a scheduler registry.
//!
//! Serves the same snapshots `Scheduler::info` returns; it never mutates
//! scheduler state and is not part of the scheduling contract.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::registry::SchedulerRegistry;

pub fn router(registry: Arc<SchedulerRegistry>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/schedulers", get(list_schedulers_handler))
        .route("/api/schedulers/:id", get(scheduler_handler))
        .layer(cors)
        .with_state(registry)
}

pub async fn run_dashboard(addr: SocketAddr, registry: Arc<SchedulerRegistry>) {
    let app = router(registry);

    tracing::info!(addr = %addr, "Starting dashboard server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind dashboard server");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Dashboard server failed");
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(
        "<html><body><h1>stevedore</h1>\
         <p>Scheduler snapshots: <a href=\"/api/schedulers\">/api/schedulers</a></p>\
         </body></html>",
    )
}

async fn list_schedulers_handler(
    State(registry): State<Arc<SchedulerRegistry>>,
) -> impl IntoResponse {
    Json(registry.infos())
}

async fn scheduler_handler(
    State(registry): State<Arc<SchedulerRegistry>>,
    Path(id): Path<String>,
) -> Response {
    match registry.lookup(&id) {
        Some(scheduler) => Json(scheduler.info()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("scheduler not found: {id}"),
        )
            .into_response(),
    }
}
