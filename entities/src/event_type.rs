use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_type")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  #[sea_orm(unique)]
  pub name: String,
  pub description: String,
  /// Hex string, `#RRGGBB`.
  pub color: String,
  /// Icon identifier understood by the platform frontend.
  pub icon: String,
  pub is_active: bool,
  pub created_at: DateTimeUtc,
  pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::event::Entity")]
  Event,
}

impl Related<super::event::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Event.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
