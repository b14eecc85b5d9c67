use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::{categories, health, image, partners, promotions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/healthcheck", get(health::check))
        .route("/categories", get(categories::list))
        .route("/partners", get(partners::list))
        .route("/image", get(image::get))
        // The misspelled path is the one clients call.
        .route("/promtions", get(promotions::list))
        .route("/promotions", get(promotions::list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the application router around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
