use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{EngineError, ResultEngine, queries::Queries};

mod banners;
mod categories;
mod partners;
mod promotions;

/// Read access to the partner/promotion store over a shared connection pool.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    queries: &'static Queries,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Checks the store is reachable.
    pub async fn ping(&self) -> ResultEngine<()> {
        self.database
            .ping()
            .await
            .map_err(EngineError::query("ping"))
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    ///
    /// Fails with [`EngineError::UnsupportedBackend`] unless the database is
    /// PostgreSQL or SQLite.
    pub async fn build(self) -> ResultEngine<Engine> {
        let queries = Queries::for_backend(self.database.get_database_backend())?;
        Ok(Engine {
            database: self.database,
            queries,
        })
    }
}
