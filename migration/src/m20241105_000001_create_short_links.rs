use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 短码区分大小写；MySQL 默认排序规则不区分
        let mut short_code = ColumnDef::new(ShortLink::ShortCode);
        if manager.get_database_backend() == DatabaseBackend::MySql {
            short_code.custom(Alias::new(
                "VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin",
            ));
        } else {
            short_code.string_len(255);
        }
        short_code.not_null();

        manager
            .create_table(
                Table::create()
                    .table(ShortLink::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShortLink::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(&mut short_code)
                    .col(ColumnDef::new(ShortLink::OriginalUrl).text().not_null())
                    .col(
                        ColumnDef::new(ShortLink::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // short_code 唯一索引：并发创建同一短码时由数据库裁决
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_short_links_short_code")
                    .table(ShortLink::Table)
                    .col(ShortLink::ShortCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_short_links_created_at")
                    .table(ShortLink::Table)
                    .col(ShortLink::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_short_links_created_at")
                    .table(ShortLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_short_links_short_code")
                    .table(ShortLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShortLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShortLink {
    #[sea_orm(iden = "short_links")]
    Table,
    Id,
    ShortCode,
    OriginalUrl,
    CreatedAt,
}
