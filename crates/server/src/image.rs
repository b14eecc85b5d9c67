use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

use crate::{
    ServerError,
    params::{QueryParams, str_param},
    server::ServerState,
};

/// `GET /image?url=<url>` answers with the raw banner as `image/jpeg`.
pub async fn get(
    State(state): State<ServerState>,
    Query(params): Query<QueryParams>,
) -> Result<impl IntoResponse, ServerError> {
    let image = state
        .engine
        .banner_image(str_param(&params, "url"))
        .await?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], image))
}
