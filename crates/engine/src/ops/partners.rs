use std::collections::HashMap;

use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::{
    EngineError, Partner, ResultEngine,
    partners::{PartnerBanner, PartnerRow},
};

use super::Engine;

impl Engine {
    /// Lists every partner with at most one banner url.
    ///
    /// Partners and banner urls are read concurrently and joined in memory.
    /// If either read fails, the whole call fails.
    pub async fn partners(&self) -> ResultEngine<Vec<Partner>> {
        let backend = self.database.get_database_backend();

        let partners = async {
            PartnerRow::find_by_statement(Statement::from_string(backend, self.queries.partners))
                .all(&self.database)
                .await
                .map_err(EngineError::query("partners"))
        };
        let banners = async {
            PartnerBanner::find_by_statement(Statement::from_string(
                backend,
                self.queries.partner_banners,
            ))
            .all(&self.database)
            .await
            .map_err(EngineError::query("partner_banners"))
        };

        let (partners, banners) = tokio::try_join!(partners, banners)?;

        let mut urls: HashMap<i32, String> = banners
            .into_iter()
            .map(|banner| (banner.partner_id, banner.url))
            .collect();

        Ok(partners
            .into_iter()
            .map(|row| {
                let url = urls.remove(&row.id);
                row.with_banner(url)
            })
            .collect())
    }
}
