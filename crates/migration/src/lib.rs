pub use sea_orm_migration::prelude::*;

use sea_orm::DbBackend;

mod m20240301_120000_init;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_120000_init::Migration)]
    }
}

/// Returns the idempotent schema script for `backend`.
///
/// The script only creates missing tables and skips seed rows whose primary
/// key already exists, so it can be executed on every start. `None` means the
/// backend is not supported.
pub fn init_script(backend: DbBackend) -> Option<String> {
    m20240301_120000_init::script(backend)
}
