//! Nodes of the category tree, annotated with their banner.

use sea_orm::FromQueryResult;

/// A category under a given parent. `url` is the banner illustrating the
/// category tile, if any.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
}
