use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub name: String,
  pub city: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::hotel_room_image::Entity")]
  HotelRoomImage,
}

impl Related<super::hotel_room_image::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::HotelRoomImage.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
