use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Division::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Division::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(Division::Name).string().not_null())
          .col(ColumnDef::new(Division::AgeGroup).string().null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Division::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Division {
  Table,
  Id,
  Name,
  AgeGroup,
}
