use crate::errors::AppError;
use entities::event_type;
use sea_orm::*;

pub struct CanonicalEventType {
  pub name: &'static str,
  pub description: &'static str,
  pub color: &'static str,
  pub icon: &'static str,
}

/// The four categories the platform runs on. The reseed procedure makes the
/// table contain exactly these, nothing else.
pub const CANONICAL_EVENT_TYPES: &[CanonicalEventType] = &[
  CanonicalEventType {
    name: "LIGA",
    description: "League play running across a season.",
    color: "#1E88E5",
    icon: "trophy",
  },
  CanonicalEventType {
    name: "SHOWCASES",
    description: "Showcase events in front of scouts.",
    color: "#43A047",
    icon: "star",
  },
  CanonicalEventType {
    name: "TORNEO",
    description: "Single-bracket tournaments.",
    color: "#F4511E",
    icon: "bracket",
  },
  CanonicalEventType {
    name: "WORLD SERIES",
    description: "World series championship events.",
    color: "#8E24AA",
    icon: "globe",
  },
];

#[derive(Debug, PartialEq)]
pub struct ReseedSummary {
  pub deleted: u64,
  /// Names present after the reseed, sorted ascending.
  pub seeded_names: Vec<String>,
}

/// Deletes every event type row and reinserts the canonical categories.
///
/// There is no upsert path: rows are always dropped and recreated, so any
/// foreign keys that pointed at the old rows are left dangling.
pub async fn reseed_event_types(
  database_connection: &DatabaseConnection,
) -> Result<ReseedSummary, AppError> {
  let delete_result = event_type::Entity::delete_many()
    .exec(database_connection)
    .await?;

  tracing::info!(
    "Removed {} existing event type rows.",
    delete_result.rows_affected
  );

  let now = chrono::Utc::now();
  let canonical_rows: Vec<event_type::ActiveModel> = CANONICAL_EVENT_TYPES
    .iter()
    .map(|canonical| event_type::ActiveModel {
      name: ActiveValue::Set(canonical.name.to_string()),
      description: ActiveValue::Set(canonical.description.to_string()),
      color: ActiveValue::Set(canonical.color.to_string()),
      icon: ActiveValue::Set(canonical.icon.to_string()),
      is_active: ActiveValue::Set(true),
      created_at: ActiveValue::Set(now),
      updated_at: ActiveValue::Set(now),
      ..Default::default()
    })
    .collect();

  event_type::Entity::insert_many(canonical_rows)
    .exec(database_connection)
    .await?;

  let mut seeded_names: Vec<String> = event_type::Entity::find()
    .all(database_connection)
    .await?
    .into_iter()
    .map(|model| model.name)
    .collect();

  seeded_names.sort();

  tracing::info!("Seeded event types: {:?}", seeded_names);

  Ok(ReseedSummary {
    deleted: delete_result.rows_affected,
    seeded_names,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn canonical_categories_are_unique_by_name() {
    let names: HashSet<&str> = CANONICAL_EVENT_TYPES
      .iter()
      .map(|canonical| canonical.name)
      .collect();

    assert_eq!(names.len(), CANONICAL_EVENT_TYPES.len());
  }

  #[tokio::test]
  async fn reseed_replaces_all_rows_with_the_canonical_categories() {
    let now = chrono::Utc::now();
    let seeded_rows: Vec<event_type::Model> = CANONICAL_EVENT_TYPES
      .iter()
      .enumerate()
      .map(|(index, canonical)| event_type::Model {
        id: index as i32 + 1,
        name: canonical.name.to_string(),
        description: canonical.description.to_string(),
        color: canonical.color.to_string(),
        icon: canonical.icon.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
      })
      .collect();

    let mock_database = MockDatabase::new(DatabaseBackend::Sqlite)
      .append_exec_results([
        MockExecResult {
          last_insert_id: 0,
          rows_affected: 9,
        },
        MockExecResult {
          last_insert_id: 4,
          rows_affected: 4,
        },
      ])
      .append_query_results([seeded_rows])
      .into_connection();

    let summary = reseed_event_types(&mock_database).await.unwrap();

    assert_eq!(summary.deleted, 9);
    assert_eq!(
      summary.seeded_names,
      ["LIGA", "SHOWCASES", "TORNEO", "WORLD SERIES"]
    );
  }
}
