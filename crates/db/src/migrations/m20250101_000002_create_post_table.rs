//! Create post table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Post::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Post::PublisherId).integer().not_null())
                    .col(
                        ColumnDef::new(Post::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Post::Text).string_len(2000))
                    .col(ColumnDef::new(Post::IsVideo).boolean())
                    .col(ColumnDef::new(Post::Video).string_len(128))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_publisher")
                            .from(Post::Table, Post::PublisherId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite index: (publisher_id, id) for a user's posts, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_post_publisher_id_id")
                    .table(Post::Table)
                    .col(Post::PublisherId)
                    .col(Post::Id)
                    .to_owned(),
            )
            .await?;

        // Index: time
        manager
            .create_index(
                Index::create()
                    .name("idx_post_time")
                    .table(Post::Table)
                    .col(Post::Time)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Post {
    Table,
    Id,
    PublisherId,
    Time,
    Text,
    IsVideo,
    Video,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
