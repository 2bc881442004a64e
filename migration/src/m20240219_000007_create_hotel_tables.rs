use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Hotel::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Hotel::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(Hotel::Name).string().not_null())
          .col(ColumnDef::new(Hotel::City).string().null())
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(HotelRoomImage::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(HotelRoomImage::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(HotelRoomImage::HotelId).integer().not_null())
          .col(ColumnDef::new(HotelRoomImage::Caption).string().null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(HotelRoomImage::Table).to_owned())
      .await?;

    manager
      .drop_table(Table::drop().table(Hotel::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Hotel {
  Table,
  Id,
  Name,
  City,
}

#[derive(Iden)]
pub enum HotelRoomImage {
  Table,
  Id,
  HotelId,
  Caption,
}
