//! Initial schema migration - creates all tables and seeds the category tree.
//!
//! - `user`: consumers, referenced by `action`
//! - `partner`: businesses with a location and a price level (1..=5)
//! - `category`: taxonomy tree rooted at category `0`
//! - `promotion`: offers owned by a partner and classified under a category
//! - `action`: a user taking or expending a promotion
//! - `headline_banner`: images keyed by url, optionally attached to a
//!   partner, a promotion and/or a category
//!
//! PostgreSQL receives the schema verbatim. SQLite has no `point` type, so the
//! partner location is split into `latitude`/`longitude` columns there.

use sea_orm::{ConnectionTrait, DbBackend};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum User {
    Table,
}

#[derive(Iden)]
enum Partner {
    Table,
}

#[derive(Iden)]
enum Category {
    Table,
}

#[derive(Iden)]
enum Promotion {
    Table,
}

#[derive(Iden)]
enum Action {
    Table,
}

#[derive(Iden)]
enum HeadlineBanner {
    Table,
}

const POSTGRES_SCHEMA: &str = r#"
create table if not exists "user"(
    id int primary key not null,
    mail text,
    phone_number text
);

create table if not exists partner(
    id int primary key not null,
    headline text not null,
    description text not null,
    location point not null,
    price_level smallint check (price_level between 1 and 5)
);

create table if not exists category(
    id int primary key not null,
    parent_id int null references category(id),
    name text not null
);

create table if not exists promotion(
    id int primary key not null,
    partner_id int not null references partner(id),
    category_id int not null references category(id),
    title text not null,
    description text not null
);

create table if not exists action(
    id int primary key not null,
    "type" text not null check ("type" in ('taken', 'expended')),
    user_id int not null references "user"(id),
    promotion_id int not null references promotion(id)
);

create table if not exists headline_banner(
    url text primary key,
    partner_id int null references partner(id),
    promotion_id int null references promotion(id),
    category_id int null references category(id),
    image bytea not null
);
"#;

const SQLITE_SCHEMA: &str = r#"
create table if not exists "user"(
    id int primary key not null,
    mail text,
    phone_number text
);

create table if not exists partner(
    id int primary key not null,
    headline text not null,
    description text not null,
    latitude real not null,
    longitude real not null,
    price_level smallint check (price_level between 1 and 5)
);

create table if not exists category(
    id int primary key not null,
    parent_id int null references category(id),
    name text not null
);

create table if not exists promotion(
    id int primary key not null,
    partner_id int not null references partner(id),
    category_id int not null references category(id),
    title text not null,
    description text not null
);

create table if not exists action(
    id int primary key not null,
    "type" text not null check ("type" in ('taken', 'expended')),
    user_id int not null references "user"(id),
    promotion_id int not null references promotion(id)
);

create table if not exists headline_banner(
    url text primary key,
    partner_id int null references partner(id),
    promotion_id int null references promotion(id),
    category_id int null references category(id),
    image blob not null
);
"#;

/// Fixed taxonomy. Root first so every parent exists before its children.
const CATEGORY_SEED: &str = r#"
insert into category(id, parent_id, name) values
    ( 0, null, 'Root'),
    ( 1, 0, 'Eating out'),
    ( 2, 0, 'Supermarkets'),
    ( 3, 0, 'Clothes & etc.'),
    ( 4, 0, 'Entertainment'),
    ( 5, 0, 'Transport'),
    ( 6, 0, 'Health & Beauty'),
    ( 7, 1, 'Bars'),
    ( 8, 1, 'Restaurants'),
    ( 9, 1, 'Cafe'),
    (10, 1, 'Burgers'),
    (11, 1, 'Gyros')
on conflict do nothing;
"#;

pub(crate) fn script(backend: DbBackend) -> Option<String> {
    let schema = match backend {
        DbBackend::Postgres => POSTGRES_SCHEMA,
        DbBackend::Sqlite => SQLITE_SCHEMA,
        _ => return None,
    };
    Some(format!("{schema}{CATEGORY_SEED}"))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let script = script(backend).ok_or_else(|| {
            DbErr::Migration(format!("unsupported database backend: {backend:?}"))
        })?;

        manager.get_connection().execute_unprepared(&script).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeadlineBanner::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Action::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Promotion::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Partner::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
