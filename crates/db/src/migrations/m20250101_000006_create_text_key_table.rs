//! Create text_key table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TextKey::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TextKey::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TextKey::PostId).integer().not_null())
                    .col(ColumnDef::new(TextKey::Key).string_len(128).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_text_key_post")
                            .from(TextKey::Table, TextKey::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_text_key_post_id")
                    .table(TextKey::Table)
                    .col(TextKey::PostId)
                    .to_owned(),
            )
            .await?;

        // Index: key (for keyword search)
        manager
            .create_index(
                Index::create()
                    .name("idx_text_key_key")
                    .table(TextKey::Table)
                    .col(TextKey::Key)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TextKey::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TextKey {
    Table,
    Id,
    PostId,
    Key,
}

#[derive(Iden)]
enum Post {
    Table,
    Id,
}
