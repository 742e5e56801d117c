use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Memos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Memos::UserId).uuid().not_null())
                    .col(ColumnDef::new(Memos::NoticeId).integer().not_null())
                    .col(ColumnDef::new(Memos::Body).text().not_null())
                    .col(
                        ColumnDef::new(Memos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Memos::Table, Memos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Memos::Table)
                    .col(Memos::UserId)
                    .name("idx_memos_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Memos {
    Table,
    Id,
    UserId,
    NoticeId,
    Body,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
