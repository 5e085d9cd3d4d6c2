//! Create `clip` table with FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clip::Table)
                    .if_not_exists()
                    .col(uuid(Clip::Id).primary_key())
                    .col(uuid(Clip::UserId).not_null())
                    .col(text(Clip::Content).not_null())
                    .col(timestamp_with_time_zone(Clip::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Clip::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clip_user")
                            .from(Clip::Table, Clip::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clip::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Clip { Table, Id, UserId, Content, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
