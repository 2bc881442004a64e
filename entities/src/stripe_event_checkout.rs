use sea_orm::entity::prelude::*;

/// A Stripe checkout attached to an event registration. The subscription
/// fields arrived later for installment plans; `monthly_amount` is a
/// fixed-point decimal, never a float.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stripe_event_checkout")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub event_id: i32,
  pub stripe_checkout_id: String,
  pub created_at: DateTimeUtc,
  pub stripe_subscription_id: Option<String>,
  pub plan_months: Option<i32>,
  pub monthly_amount: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::event::Entity",
    from = "Column::EventId",
    to = "super::event::Column::Id"
  )]
  Event,
}

impl Related<super::event::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Event.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
