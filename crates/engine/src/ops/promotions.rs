use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::{EngineError, GeoPoint, Promotion, PromotionQuery, ResultEngine};

use super::Engine;

impl Engine {
    /// Runs the lookup selected by [`PromotionQuery::from_params`].
    pub async fn promotions(&self, query: PromotionQuery) -> ResultEngine<Vec<Promotion>> {
        match query {
            PromotionQuery::Geo(point) => self.promotions_by_geo(point).await,
            PromotionQuery::ByPartner(partner) => self.promotions_by_partner(partner).await,
        }
    }

    /// Lists promotions owned by `partner`, or by every partner when `None`.
    pub async fn promotions_by_partner(
        &self,
        partner: Option<i32>,
    ) -> ResultEngine<Vec<Promotion>> {
        let backend = self.database.get_database_backend();
        let stmt = match partner {
            Some(partner) => Statement::from_sql_and_values(
                backend,
                self.queries.promotions_by_partner,
                vec![partner.into()],
            ),
            None => Statement::from_string(backend, self.queries.promotions),
        };

        Promotion::find_by_statement(stmt)
            .all(&self.database)
            .await
            .map_err(EngineError::query("promotions_by_partner"))
    }

    /// Lists every promotion ordered by the distance between its partner and
    /// `point`, nearest first. No limit is applied.
    pub async fn promotions_by_geo(&self, point: GeoPoint) -> ResultEngine<Vec<Promotion>> {
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            self.queries.promotions_by_geo,
            self.queries.geo_values(point),
        );

        Promotion::find_by_statement(stmt)
            .all(&self.database)
            .await
            .map_err(EngineError::query("promotions_by_geo"))
    }
}
