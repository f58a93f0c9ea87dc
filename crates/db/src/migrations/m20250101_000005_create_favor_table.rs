//! Create favor table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favor::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favor::PostId).integer().not_null())
                    .col(ColumnDef::new(Favor::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favor_post")
                            .from(Favor::Table, Favor::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favor_user")
                            .from(Favor::Table, Favor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (post_id, user_id) - one like per user per post
        manager
            .create_index(
                Index::create()
                    .name("idx_favor_post_user")
                    .table(Favor::Table)
                    .col(Favor::PostId)
                    .col(Favor::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for listing a user's likes)
        manager
            .create_index(
                Index::create()
                    .name("idx_favor_user_id")
                    .table(Favor::Table)
                    .col(Favor::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favor::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Favor {
    Table,
    Id,
    PostId,
    UserId,
}

#[derive(Iden)]
enum Post {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
