use sea_orm::entity::prelude::*;

/// Join table between events and divisions. (event_id, division_id) is
/// enforced unique by the owning migration.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_division")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub event_id: i32,
  pub division_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::event::Entity",
    from = "Column::EventId",
    to = "super::event::Column::Id"
  )]
  Event,
  #[sea_orm(
    belongs_to = "super::division::Entity",
    from = "Column::DivisionId",
    to = "super::division::Column::Id"
  )]
  Division,
}

impl Related<super::event::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Event.def()
  }
}

impl Related<super::division::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Division.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
