use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::{EngineError, ResultEngine, banners::BannerImage};

use super::Engine;

impl Engine {
    /// Returns the image bytes of the banner stored under exactly `url`.
    ///
    /// A missing banner is an error, never an empty payload.
    pub async fn banner_image(&self, url: &str) -> ResultEngine<Vec<u8>> {
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            self.queries.banner_image,
            vec![url.into()],
        );

        let banner = BannerImage::find_by_statement(stmt)
            .one(&self.database)
            .await
            .map_err(EngineError::query("banner_image"))?
            .ok_or_else(|| EngineError::ImageNotFound(url.to_string()))?;

        Ok(banner.image)
    }
}
