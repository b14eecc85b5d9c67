//! Raw SQL for every read, one set per supported backend.
//!
//! PostgreSQL stores the partner location as a `point` (`x` = latitude,
//! `y` = longitude) and ranks with the `<->` distance operator. SQLite keeps
//! the coordinates in two columns and ranks by squared euclidean distance,
//! which yields the same order.
//!
//! Banner urls are picked with `min(url)` so every row carries at most one.

use sea_orm::{DbBackend, Value};

use crate::{EngineError, GeoPoint, ResultEngine};

#[derive(Debug)]
pub(crate) struct Queries {
    pub(crate) categories: &'static str,
    pub(crate) partners: &'static str,
    pub(crate) partner_banners: &'static str,
    pub(crate) banner_image: &'static str,
    pub(crate) promotions: &'static str,
    pub(crate) promotions_by_partner: &'static str,
    pub(crate) promotions_by_geo: &'static str,
    geo_values: fn(GeoPoint) -> Vec<Value>,
}

impl Queries {
    pub(crate) fn for_backend(backend: DbBackend) -> ResultEngine<&'static Self> {
        match backend {
            DbBackend::Postgres => Ok(&POSTGRES),
            DbBackend::Sqlite => Ok(&SQLITE),
            other => Err(EngineError::UnsupportedBackend(other)),
        }
    }

    /// Bind values for [`Queries::promotions_by_geo`].
    pub(crate) fn geo_values(&self, point: GeoPoint) -> Vec<Value> {
        (self.geo_values)(point)
    }
}

static POSTGRES: Queries = Queries {
    categories: r#"
select
    category.id,
    category.name,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.category_id = category.id) as url
from category
where category.parent_id = $1
order by category.id;"#,
    partners: r#"
select
    partner.id, partner.headline, partner.description,
    partner.location[0] as latitude, partner.location[1] as longitude,
    partner.price_level
from partner
order by partner.id;"#,
    partner_banners: r#"
select partner_id, min(url) as url
from headline_banner
where partner_id is not null
group by partner_id;"#,
    banner_image: r#"
select image
from headline_banner
where url = $1;"#,
    promotions: r#"
select
    promotion.id,
    promotion.title,
    promotion.description,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.promotion_id = promotion.id) as url
from promotion
order by promotion.id;"#,
    promotions_by_partner: r#"
select
    promotion.id,
    promotion.title,
    promotion.description,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.promotion_id = promotion.id) as url
from promotion
where promotion.partner_id = $1
order by promotion.id;"#,
    promotions_by_geo: r#"
select
    promotion.id,
    promotion.title,
    promotion.description,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.promotion_id = promotion.id) as url
from promotion
left join partner on promotion.partner_id = partner.id
order by partner.location <-> point($1, $2) asc, promotion.id;"#,
    geo_values: postgres_geo_values,
};

static SQLITE: Queries = Queries {
    categories: r#"
select
    category.id,
    category.name,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.category_id = category.id) as url
from category
where category.parent_id = ?
order by category.id;"#,
    partners: r#"
select
    partner.id, partner.headline, partner.description,
    partner.latitude, partner.longitude,
    partner.price_level
from partner
order by partner.id;"#,
    partner_banners: r#"
select partner_id, min(url) as url
from headline_banner
where partner_id is not null
group by partner_id;"#,
    banner_image: r#"
select image
from headline_banner
where url = ?;"#,
    promotions: r#"
select
    promotion.id,
    promotion.title,
    promotion.description,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.promotion_id = promotion.id) as url
from promotion
order by promotion.id;"#,
    promotions_by_partner: r#"
select
    promotion.id,
    promotion.title,
    promotion.description,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.promotion_id = promotion.id) as url
from promotion
where promotion.partner_id = ?
order by promotion.id;"#,
    promotions_by_geo: r#"
select
    promotion.id,
    promotion.title,
    promotion.description,
    (select min(headline_banner.url)
     from headline_banner
     where headline_banner.promotion_id = promotion.id) as url
from promotion
left join partner on promotion.partner_id = partner.id
order by
    (partner.latitude - ?) * (partner.latitude - ?)
    + (partner.longitude - ?) * (partner.longitude - ?) asc,
    promotion.id;"#,
    geo_values: sqlite_geo_values,
};

fn postgres_geo_values(point: GeoPoint) -> Vec<Value> {
    vec![point.latitude.into(), point.longitude.into()]
}

// Each placeholder is bound separately.
fn sqlite_geo_values(point: GeoPoint) -> Vec<Value> {
    vec![
        point.latitude.into(),
        point.latitude.into(),
        point.longitude.into(),
        point.longitude.into(),
    ]
}
