use api_types::partner::PartnerView;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

fn map_partner(partner: engine::Partner) -> PartnerView {
    PartnerView {
        id: partner.id,
        headline: partner.headline,
        description: partner.description,
        latitude: partner.latitude,
        longitude: partner.longitude,
        price_level: partner.price_level,
        headline_banner_url: partner.banner_url.unwrap_or_default(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PartnerView>>, ServerError> {
    let partners = state
        .engine
        .partners()
        .await?
        .into_iter()
        .map(map_partner)
        .collect();

    Ok(Json(partners))
}
