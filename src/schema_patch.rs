use crate::errors::AppError;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

const EVENT_TABLE: &str = "event";

/// Nullable columns the platform bolted onto `event` over time, paired with
/// their SQL type. The base migration owns everything before these.
pub const EVENT_PATCH_COLUMNS: &[(&str, &str)] = &[
  ("payment_profile_id", "integer"),
  ("show_on_site", "boolean"),
  ("email_body", "text"),
  ("video_url", "varchar(510)"),
  ("hotel_id", "integer"),
  ("contact_id", "integer"),
];

#[derive(Debug, Default, PartialEq)]
pub struct PatchOutcome {
  pub added: Vec<&'static str>,
  pub skipped: Vec<&'static str>,
  pub failed: Vec<&'static str>,
}

#[derive(Debug, FromQueryResult)]
struct TableColumn {
  name: String,
}

/// Adds every missing column from [`EVENT_PATCH_COLUMNS`] to the event
/// table. Re-running once every column exists performs no ALTERs. A failed
/// ALTER is logged and the remaining columns are still attempted.
pub async fn patch_event_columns(
  database_connection: &DatabaseConnection,
) -> Result<PatchOutcome, AppError> {
  let existing_columns = table_columns(database_connection, EVENT_TABLE).await?;
  let mut outcome = PatchOutcome::default();

  for &(column_name, column_type) in EVENT_PATCH_COLUMNS {
    if existing_columns
      .iter()
      .any(|existing| existing.as_str() == column_name)
    {
      tracing::info!("Column `{}` already exists. Skipping.", column_name);

      outcome.skipped.push(column_name);

      continue;
    }

    let alter_statement = Statement::from_string(
      database_connection.get_database_backend(),
      format!(r#"ALTER TABLE "{EVENT_TABLE}" ADD COLUMN "{column_name}" {column_type} NULL"#),
    );

    match database_connection.execute(alter_statement).await {
      Ok(_) => {
        tracing::info!("Added column `{}` to the event table.", column_name);

        outcome.added.push(column_name);
      }
      Err(error) => {
        tracing::error!(
          "Failed to add column `{}` to the event table. Reason: `{}`",
          column_name,
          error
        );

        outcome.failed.push(column_name);
      }
    }
  }

  Ok(outcome)
}

async fn table_columns(
  database_connection: &DatabaseConnection,
  table_name: &str,
) -> Result<Vec<String>, AppError> {
  let pragma_statement = Statement::from_string(
    database_connection.get_database_backend(),
    format!(r#"PRAGMA table_info("{table_name}")"#),
  );

  Ok(
    TableColumn::find_by_statement(pragma_statement)
      .all(database_connection)
      .await?
      .into_iter()
      .map(|column| column.name)
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};
  use std::collections::BTreeMap;

  fn pragma_rows(column_names: &[&str]) -> Vec<BTreeMap<&'static str, Value>> {
    column_names
      .iter()
      .map(|column_name| BTreeMap::from([("name", Value::from(column_name.to_string()))]))
      .collect()
  }

  const FULLY_PATCHED: &[&str] = &[
    "id",
    "title",
    "event_type_id",
    "city_id",
    "start_date",
    "end_date",
    "payment_profile_id",
    "show_on_site",
    "email_body",
    "video_url",
    "hotel_id",
    "contact_id",
  ];

  #[tokio::test]
  async fn second_run_is_a_no_op() {
    let mock_database = MockDatabase::new(DatabaseBackend::Sqlite)
      .append_query_results([pragma_rows(FULLY_PATCHED)])
      .into_connection();

    let outcome = patch_event_columns(&mock_database).await.unwrap();

    assert!(outcome.added.is_empty());
    assert!(outcome.failed.is_empty());
    assert_eq!(outcome.skipped.len(), EVENT_PATCH_COLUMNS.len());
  }

  #[tokio::test]
  async fn only_missing_columns_are_added() {
    let partially_patched: Vec<&str> = FULLY_PATCHED
      .iter()
      .copied()
      .filter(|column_name| *column_name != "video_url" && *column_name != "contact_id")
      .collect();

    let mock_database = MockDatabase::new(DatabaseBackend::Sqlite)
      .append_query_results([pragma_rows(&partially_patched)])
      .append_exec_results([
        MockExecResult {
          last_insert_id: 0,
          rows_affected: 0,
        },
        MockExecResult {
          last_insert_id: 0,
          rows_affected: 0,
        },
      ])
      .into_connection();

    let outcome = patch_event_columns(&mock_database).await.unwrap();

    assert_eq!(outcome.added, ["video_url", "contact_id"]);
    assert_eq!(outcome.skipped.len(), EVENT_PATCH_COLUMNS.len() - 2);
    assert!(outcome.failed.is_empty());
  }

  #[tokio::test]
  async fn a_failed_alter_does_not_stop_the_remaining_columns() {
    let partially_patched: Vec<&str> = FULLY_PATCHED
      .iter()
      .copied()
      .filter(|column_name| *column_name != "email_body" && *column_name != "hotel_id")
      .collect();

    let mock_database = MockDatabase::new(DatabaseBackend::Sqlite)
      .append_query_results([pragma_rows(&partially_patched)])
      .append_exec_errors([DbErr::Custom("duplicate column name: email_body".into())])
      .append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 0,
      }])
      .into_connection();

    let outcome = patch_event_columns(&mock_database).await.unwrap();

    assert_eq!(outcome.failed, ["email_body"]);
    assert_eq!(outcome.added, ["hotel_id"]);
  }
}
