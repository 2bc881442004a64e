use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Installment plans: the subscription backing a checkout, how many months it
/// runs, and the fixed-point monthly amount.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .alter_table(
        Table::alter()
          .table(StripeEventCheckout::Table)
          .add_column(
            ColumnDef::new(StripeEventCheckout::StripeSubscriptionId)
              .string()
              .null(),
          )
          .to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(StripeEventCheckout::Table)
          .add_column(
            ColumnDef::new(StripeEventCheckout::PlanMonths)
              .integer()
              .null(),
          )
          .to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(StripeEventCheckout::Table)
          .add_column(
            ColumnDef::new(StripeEventCheckout::MonthlyAmount)
              .decimal_len(10, 2)
              .null(),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .alter_table(
        Table::alter()
          .table(StripeEventCheckout::Table)
          .drop_column(StripeEventCheckout::MonthlyAmount)
          .to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(StripeEventCheckout::Table)
          .drop_column(StripeEventCheckout::PlanMonths)
          .to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(StripeEventCheckout::Table)
          .drop_column(StripeEventCheckout::StripeSubscriptionId)
          .to_owned(),
      )
      .await
  }
}

#[derive(Iden)]
enum StripeEventCheckout {
  Table,
  _Id,
  _EventId,
  _StripeCheckoutId,
  _CreatedAt,
  StripeSubscriptionId,
  PlanMonths,
  MonthlyAmount,
}
