use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Clip listing is per owner, oldest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_clip_user_created")
                    .table(Clip::Table)
                    .col(Clip::UserId)
                    .col(Clip::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_clip_user_created").table(Clip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clip { Table, UserId, CreatedAt }
