use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Both image sources are optional and nothing enforces exclusivity between
/// them; rows can legitimately carry a media reference and a direct upload.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .alter_table(
        Table::alter()
          .table(HotelRoomImage::Table)
          .add_column(
            ColumnDef::new(HotelRoomImage::MediaItemId)
              .integer()
              .null(),
          )
          .to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(HotelRoomImage::Table)
          .add_column(ColumnDef::new(HotelRoomImage::ImagePath).string().null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .alter_table(
        Table::alter()
          .table(HotelRoomImage::Table)
          .drop_column(HotelRoomImage::ImagePath)
          .to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(HotelRoomImage::Table)
          .drop_column(HotelRoomImage::MediaItemId)
          .to_owned(),
      )
      .await
  }
}

#[derive(Iden)]
enum HotelRoomImage {
  Table,
  _Id,
  _HotelId,
  _Caption,
  MediaItemId,
  ImagePath,
}
