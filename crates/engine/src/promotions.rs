//! Promotions and the choice between partner-scoped and location-ranked
//! lookups.

use sea_orm::FromQueryResult;

/// An offer owned by a partner. `url` is the promotion's banner, if any.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct Promotion {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

/// A location used to rank promotions by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Which promotion lookup a request asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PromotionQuery {
    /// Every promotion, nearest partner first.
    Geo(GeoPoint),
    /// Promotions of one partner, or of all partners when `None`.
    ByPartner(Option<i32>),
}

impl PromotionQuery {
    /// Builds the query from already coerced request parameters.
    ///
    /// Geo mode wins whenever both coordinates are non-zero, regardless of
    /// `partner`. Otherwise partner `0` means "all partners".
    pub fn from_params(partner: i32, latitude: f64, longitude: f64) -> Self {
        if latitude != 0.0 && longitude != 0.0 {
            return Self::Geo(GeoPoint {
                latitude,
                longitude,
            });
        }

        Self::ByPartner((partner != 0).then_some(partner))
    }
}
