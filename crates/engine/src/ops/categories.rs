use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::{Category, EngineError, ResultEngine};

use super::Engine;

impl Engine {
    /// Lists the children of `parent_id`, each with its banner url if one
    /// exists. `0` is the root, so `categories(0)` returns the top level.
    pub async fn categories(&self, parent_id: i32) -> ResultEngine<Vec<Category>> {
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            self.queries.categories,
            vec![parent_id.into()],
        );

        Category::find_by_statement(stmt)
            .all(&self.database)
            .await
            .map_err(EngineError::query("categories"))
    }
}
