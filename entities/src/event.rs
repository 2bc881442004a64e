use sea_orm::entity::prelude::*;

/// The columns after `end_date` were bolted on over time and arrive through
/// the column patch procedure rather than the base migration. Selecting
/// through this entity requires the patch to have run; until then only
/// operations that name no columns, such as `delete_many`, are safe.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub title: String,
  pub event_type_id: Option<i32>,
  pub city_id: Option<i32>,
  pub start_date: Option<DateTimeUtc>,
  pub end_date: Option<DateTimeUtc>,
  pub payment_profile_id: Option<i32>,
  pub show_on_site: Option<bool>,
  pub email_body: Option<String>,
  pub video_url: Option<String>,
  pub hotel_id: Option<i32>,
  pub contact_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::event_type::Entity",
    from = "Column::EventTypeId",
    to = "super::event_type::Column::Id"
  )]
  EventType,
}

impl Related<super::event_type::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::EventType.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
