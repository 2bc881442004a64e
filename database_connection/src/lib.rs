use anyhow::anyhow;
use app_config::APP_CONFIG;
use migration::{Migrator, MigratorTrait, SchemaManager};
pub use sea_orm::DatabaseConnection;
use sea_orm::*;
use std::path::Path;
use tokio::sync::OnceCell;

static DATABASE_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

pub async fn get_database_connection() -> &'static DatabaseConnection {
  DATABASE_CONNECTION
    .get_or_init(|| async { get_connection().await.unwrap() })
    .await
}

async fn get_connection() -> anyhow::Result<DatabaseConnection> {
  let database_path = APP_CONFIG.database_path();

  if let Some(parent_dir) = database_path.parent() {
    std::fs::create_dir_all(parent_dir)?;
  }

  let database_connection =
    Database::connect(database_connection_string(database_path)).await?;

  run_migration(&database_connection).await?;

  Ok(database_connection)
}

/// `mode=rwc` so the store file is created on first use.
fn database_connection_string(database_path: &Path) -> String {
  format!("sqlite://{}?mode=rwc", database_path.display())
}

async fn run_migration(database_connection: &DatabaseConnection) -> anyhow::Result<()> {
  let schema_manager = SchemaManager::new(database_connection);

  Migrator::up(database_connection, None).await?;

  let check_tables = [
    "division",
    "event",
    "event_attendance",
    "event_comment",
    "event_division",
    "event_type",
    "hotel",
    "hotel_room_image",
    "media_item",
    "stripe_event_checkout",
  ];

  for table_name in check_tables {
    if !schema_manager.has_table(table_name).await? {
      return Err(anyhow!(
        "Failed to migrate the database due to a missing table: `{:?}`",
        table_name
      ));
    }
  }

  Ok(())
}
