use sea_orm::entity::prelude::*;

/// A room picture sourced either from the shared media library
/// (`media_item_id`) or a direct upload (`image_path`). Nothing stops both
/// from being set; the frontend prefers the media library entry.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel_room_image")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub hotel_id: i32,
  pub caption: Option<String>,
  pub media_item_id: Option<i32>,
  pub image_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::hotel::Entity",
    from = "Column::HotelId",
    to = "super::hotel::Column::Id"
  )]
  Hotel,
  #[sea_orm(
    belongs_to = "super::media_item::Entity",
    from = "Column::MediaItemId",
    to = "super::media_item::Column::Id"
  )]
  MediaItem,
}

impl Related<super::hotel::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Hotel.def()
  }
}

impl Related<super::media_item::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::MediaItem.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
