use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Base columns only. The long tail of nullable event columns is owned by
/// the column patch procedure in the maintenance binary.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Event::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Event::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(Event::Title).string().not_null())
          .col(ColumnDef::new(Event::EventTypeId).integer().null())
          .col(ColumnDef::new(Event::CityId).integer().null())
          .col(ColumnDef::new(Event::StartDate).timestamp().null())
          .col(ColumnDef::new(Event::EndDate).timestamp().null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Event::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Event {
  Table,
  Id,
  Title,
  EventTypeId,
  CityId,
  StartDate,
  EndDate,
}
