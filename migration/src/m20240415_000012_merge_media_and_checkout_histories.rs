use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// History merge only. The hotel-media branch and the checkout branch both
/// extend 000008; this node unifies their heads and touches no schema.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
    Ok(())
  }

  async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
    Ok(())
  }
}
