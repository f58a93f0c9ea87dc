//! Database migrations.
//!
//! Tables are created parent-first so foreign keys can be declared inline,
//! which keeps every migration portable between Postgres and SQLite.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user_table;
mod m20250101_000002_create_post_table;
mod m20250101_000003_create_comment_table;
mod m20250101_000004_create_photo_table;
mod m20250101_000005_create_favor_table;
mod m20250101_000006_create_text_key_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user_table::Migration),
            Box::new(m20250101_000002_create_post_table::Migration),
            Box::new(m20250101_000003_create_comment_table::Migration),
            Box::new(m20250101_000004_create_photo_table::Migration),
            Box::new(m20250101_000005_create_favor_table::Migration),
            Box::new(m20250101_000006_create_text_key_table::Migration),
        ]
    }
}
