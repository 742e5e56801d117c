use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Owned by the external collector service; this API reads it only.
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notices::Title).string().not_null())
                    .col(ColumnDef::new(Notices::Client).string().not_null())
                    .col(
                        ColumnDef::new(Notices::NoticeDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notices::DetailLink).string().not_null())
                    .col(ColumnDef::new(Notices::Office).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Notices::Table)
                    .col(Notices::NoticeDate)
                    .name("idx_notices_notice_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Notices {
    Table,
    Id,
    Title,
    Client,
    NoticeDate,
    DetailLink,
    Office,
}
