use sea_orm::entity::prelude::*;

/// `event_id` is a plain column without a foreign key constraint, so rows
/// survive an event purge and have to be detected as orphans afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_attendance")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub event_id: i32,
  pub account_id: i32,
  pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
