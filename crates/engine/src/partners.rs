//! Businesses listed by the discovery app.

use sea_orm::FromQueryResult;

/// A partner with its location decomposed into scalars and at most one
/// banner url.
#[derive(Clone, Debug, PartialEq)]
pub struct Partner {
    pub id: i32,
    pub headline: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `1..=5`, enforced by the schema. Nullable.
    pub price_level: Option<i16>,
    pub banner_url: Option<String>,
}

#[derive(Debug, FromQueryResult)]
pub(crate) struct PartnerRow {
    pub(crate) id: i32,
    pub(crate) headline: String,
    pub(crate) description: String,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) price_level: Option<i16>,
}

impl PartnerRow {
    pub(crate) fn with_banner(self, banner_url: Option<String>) -> Partner {
        Partner {
            id: self.id,
            headline: self.headline,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            price_level: self.price_level,
            banner_url,
        }
    }
}

/// Row of the partner → banner url lookup.
#[derive(Debug, FromQueryResult)]
pub(crate) struct PartnerBanner {
    pub(crate) partner_id: i32,
    pub(crate) url: String,
}
