use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Sole owner of the event/division join table. The unique index is what
/// rejects duplicate (event_id, division_id) pairs.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(EventDivision::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(EventDivision::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(EventDivision::EventId).integer().not_null())
          .col(
            ColumnDef::new(EventDivision::DivisionId)
              .integer()
              .not_null(),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_event_division_event_id_division_id")
          .table(EventDivision::Table)
          .col(EventDivision::EventId)
          .col(EventDivision::DivisionId)
          .unique()
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(EventDivision::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum EventDivision {
  Table,
  Id,
  EventId,
  DivisionId,
}
