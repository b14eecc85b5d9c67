//! Category tree endpoint.

use api_types::category::CategoryView;
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    ServerError,
    params::{QueryParams, int_param},
    server::ServerState,
};

fn map_category(category: engine::Category) -> CategoryView {
    CategoryView {
        id: category.id,
        name: category.name,
        url: category.url.unwrap_or_default(),
    }
}

/// `GET /categories?parent=<id>`; the root's children when `parent` is
/// missing or malformed.
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<CategoryView>>, ServerError> {
    let parent = int_param(&params, "parent");
    let categories = state
        .engine
        .categories(parent)
        .await?
        .into_iter()
        .map(map_category)
        .collect();

    Ok(Json(categories))
}
