use crate::errors::AppError;
use entities::{event, event_attendance, event_comment};
use sea_orm::*;

#[derive(Debug, PartialEq)]
pub struct PurgeSummary {
  pub deleted_events: u64,
  pub orphaned_attendance: u64,
  pub orphaned_comments: u64,
}

/// Deletes every event row. Attendance and comment rows pointing at the
/// deleted events are counted and reported, never removed here.
pub async fn purge_events(
  database_connection: &DatabaseConnection,
) -> Result<PurgeSummary, AppError> {
  let delete_result = event::Entity::delete_many()
    .exec(database_connection)
    .await?;

  tracing::info!("Deleted {} event rows.", delete_result.rows_affected);

  let orphaned_attendance = event_attendance::Entity::find()
    .count(database_connection)
    .await?;
  let orphaned_comments = event_comment::Entity::find()
    .count(database_connection)
    .await?;

  if orphaned_attendance > 0 || orphaned_comments > 0 {
    tracing::warn!(
      "The purge left {} attendance rows and {} comment rows without a parent event.",
      orphaned_attendance,
      orphaned_comments
    );
  }

  Ok(PurgeSummary {
    deleted_events: delete_result.rows_affected,
    orphaned_attendance,
    orphaned_comments,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeMap;

  fn count_row(count: i32) -> Vec<BTreeMap<&'static str, Value>> {
    vec![BTreeMap::from([("num_items", Value::from(count))])]
  }

  #[tokio::test]
  async fn purge_deletes_every_event_and_reports_orphans() {
    let mock_database = MockDatabase::new(DatabaseBackend::Sqlite)
      .append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 12,
      }])
      .append_query_results([count_row(3)])
      .append_query_results([count_row(0)])
      .into_connection();

    let summary = purge_events(&mock_database).await.unwrap();

    assert_eq!(
      summary,
      PurgeSummary {
        deleted_events: 12,
        orphaned_attendance: 3,
        orphaned_comments: 0,
      }
    );
  }

  #[tokio::test]
  async fn purging_an_empty_table_reports_zero_deletions() {
    let mock_database = MockDatabase::new(DatabaseBackend::Sqlite)
      .append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 0,
      }])
      .append_query_results([count_row(0)])
      .append_query_results([count_row(0)])
      .into_connection();

    let summary = purge_events(&mock_database).await.unwrap();

    assert_eq!(summary.deleted_events, 0);
  }
}
