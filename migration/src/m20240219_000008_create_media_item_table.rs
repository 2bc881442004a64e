use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(MediaItem::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(MediaItem::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(MediaItem::FilePath).string().not_null())
          .col(ColumnDef::new(MediaItem::Title).string().null())
          .col(
            ColumnDef::new(MediaItem::UploadedAt)
              .timestamp()
              .not_null()
              .default(Expr::current_timestamp()),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(MediaItem::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum MediaItem {
  Table,
  Id,
  FilePath,
  Title,
  UploadedAt,
}
