use sea_orm::entity::prelude::*;

/// Shared media-library entry referenced by hotel room images.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "media_item")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub file_path: String,
  pub title: Option<String>,
  pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
