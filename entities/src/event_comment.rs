use sea_orm::entity::prelude::*;

/// Same orphaning caveat as [`event_attendance`](super::event_attendance):
/// no foreign key constraint against `event`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_comment")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub event_id: i32,
  pub account_id: i32,
  pub body: String,
  pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
