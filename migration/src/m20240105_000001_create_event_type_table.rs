use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(EventType::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(EventType::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(
            ColumnDef::new(EventType::Name)
              .string()
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(EventType::Description).string().not_null())
          .col(ColumnDef::new(EventType::Color).string_len(7).not_null())
          .col(ColumnDef::new(EventType::Icon).string().not_null())
          .col(
            ColumnDef::new(EventType::IsActive)
              .boolean()
              .not_null()
              .default(true),
          )
          .col(
            ColumnDef::new(EventType::CreatedAt)
              .timestamp()
              .not_null()
              .default(Expr::current_timestamp()),
          )
          .col(
            ColumnDef::new(EventType::UpdatedAt)
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
      .drop_table(Table::drop().table(EventType::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum EventType {
  Table,
  Id,
  Name,
  Description,
  Color,
  Icon,
  IsActive,
  CreatedAt,
  UpdatedAt,
}
