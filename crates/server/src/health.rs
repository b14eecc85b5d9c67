use axum::extract::State;

use crate::{ServerError, server::ServerState};

pub async fn check(State(state): State<ServerState>) -> Result<&'static str, ServerError> {
    state.engine.ping().await?;
    Ok("ok")
}
