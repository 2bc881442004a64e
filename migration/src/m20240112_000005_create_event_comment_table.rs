use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(EventComment::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(EventComment::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(EventComment::EventId).integer().not_null())
          .col(ColumnDef::new(EventComment::AccountId).integer().not_null())
          .col(ColumnDef::new(EventComment::Body).text().not_null())
          .col(
            ColumnDef::new(EventComment::CreatedAt)
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
      .drop_table(Table::drop().table(EventComment::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum EventComment {
  Table,
  Id,
  EventId,
  AccountId,
  Body,
  CreatedAt,
}
