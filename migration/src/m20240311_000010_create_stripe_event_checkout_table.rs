use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(StripeEventCheckout::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StripeEventCheckout::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(
            ColumnDef::new(StripeEventCheckout::EventId)
              .integer()
              .not_null(),
          )
          .col(
            ColumnDef::new(StripeEventCheckout::StripeCheckoutId)
              .string()
              .not_null(),
          )
          .col(
            ColumnDef::new(StripeEventCheckout::CreatedAt)
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
      .drop_table(Table::drop().table(StripeEventCheckout::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum StripeEventCheckout {
  Table,
  Id,
  EventId,
  StripeCheckoutId,
  CreatedAt,
}
