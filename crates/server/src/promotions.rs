//! Promotions endpoint, either for one partner or ranked by distance.

use api_types::promotion::PromotionView;
use axum::{
    Json,
    extract::{Query, State},
};
use engine::PromotionQuery;

use crate::{
    ServerError,
    params::{QueryParams, float_param, int_param},
    server::ServerState,
};

fn map_promotion(promotion: engine::Promotion) -> PromotionView {
    PromotionView {
        id: promotion.id,
        title: promotion.title,
        description: promotion.description,
        headline_banner_url: promotion.url.unwrap_or_default(),
    }
}

/// `GET /promtions?partner=<id>&lat=<f64>&long=<f64>`
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<PromotionView>>, ServerError> {
    let query = PromotionQuery::from_params(
        int_param(&params, "partner"),
        float_param(&params, "lat"),
        float_param(&params, "long"),
    );
    tracing::debug!("promotions lookup: {query:?}");

    let promotions = state
        .engine
        .promotions(query)
        .await?
        .into_iter()
        .map(map_promotion)
        .collect();

    Ok(Json(promotions))
}
