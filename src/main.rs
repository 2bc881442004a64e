use app_config::clap::MaintenanceTask;
use app_config::CLAP_ARGS;
use database_connection::get_database_connection;
use event_maintenance::errors::AppError;
use event_maintenance::{purge, schema_patch, seeding, websocket_smoke};

#[tokio::main]
async fn main() {
  event_maintenance::logging::setup_logging_config().unwrap();

  let task = match CLAP_ARGS.maintenance_task() {
    Ok(Some(task)) => task,
    Ok(None) => {
      println!(
        "No maintenance task given. Use --task <reseed-event-types|patch-event-columns|purge-events|websocket-smoke-test>."
      );

      std::process::exit(1);
    }
    Err(error) => {
      println!("{error}");

      std::process::exit(1);
    }
  };

  if let Err(error) = run_task(task).await {
    tracing::error!("The maintenance task failed. Reason: `{}`", error);

    std::process::exit(1);
  }
}

async fn run_task(task: MaintenanceTask) -> Result<(), AppError> {
  match task {
    MaintenanceTask::ReseedEventTypes => {
      let database_connection = get_database_connection().await;
      let summary = seeding::reseed_event_types(database_connection).await?;

      println!(
        "Removed {} rows. Seeded event types: {:?}",
        summary.deleted, summary.seeded_names
      );
    }
    MaintenanceTask::PatchEventColumns => {
      let database_connection = get_database_connection().await;
      let outcome = schema_patch::patch_event_columns(database_connection).await?;

      println!(
        "Added: {:?} | Skipped: {:?} | Failed: {:?}",
        outcome.added, outcome.skipped, outcome.failed
      );
    }
    MaintenanceTask::PurgeEvents => {
      let database_connection = get_database_connection().await;
      let summary = purge::purge_events(database_connection).await?;

      println!(
        "Deleted {} events. Orphaned attendance rows: {} | Orphaned comment rows: {}",
        summary.deleted_events, summary.orphaned_attendance, summary.orphaned_comments
      );
    }
    MaintenanceTask::WebsocketSmokeTest => {
      let city_id = match CLAP_ARGS.city_id() {
        Ok(city_id) => city_id.unwrap_or(1),
        Err(error) => {
          println!("{error}");

          std::process::exit(1);
        }
      };

      websocket_smoke::run_smoke_test(city_id).await?;
    }
  }

  Ok(())
}
