use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// No foreign key on `event_id`. Event deletion leaves these rows behind for
/// the purge procedure to report.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(EventAttendance::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(EventAttendance::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(EventAttendance::EventId).integer().not_null())
          .col(
            ColumnDef::new(EventAttendance::AccountId)
              .integer()
              .not_null(),
          )
          .col(
            ColumnDef::new(EventAttendance::RegisteredAt)
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
      .drop_table(Table::drop().table(EventAttendance::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum EventAttendance {
  Table,
  Id,
  EventId,
  AccountId,
  RegisteredAt,
}
