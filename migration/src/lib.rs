pub use sea_orm_migration::prelude::*;

pub mod history;

mod m20240105_000001_create_event_type_table;
mod m20240105_000002_create_event_table;
mod m20240112_000003_create_division_table;
mod m20240112_000004_create_event_attendance_table;
mod m20240112_000005_create_event_comment_table;
mod m20240203_000006_create_event_division_table;
mod m20240219_000007_create_hotel_tables;
mod m20240219_000008_create_media_item_table;
mod m20240307_000009_add_media_columns_to_hotel_room_image_table;
mod m20240311_000010_create_stripe_event_checkout_table;
mod m20240402_000011_add_subscription_columns_to_stripe_event_checkout_table;
mod m20240415_000012_merge_media_and_checkout_histories;

use history::Descriptor;

/// Every migration with its dependencies. The media branch (000009) and the
/// checkout branch (000010, 000011) both grew out of 000008 on separate
/// deployments; 000012 merges the two heads back into one history.
pub fn descriptors() -> Vec<Descriptor> {
  vec![
    Descriptor {
      name: "m20240105_000001_create_event_type_table",
      dependencies: &[],
      migration: || Box::new(m20240105_000001_create_event_type_table::Migration),
    },
    Descriptor {
      name: "m20240105_000002_create_event_table",
      dependencies: &["m20240105_000001_create_event_type_table"],
      migration: || Box::new(m20240105_000002_create_event_table::Migration),
    },
    Descriptor {
      name: "m20240112_000003_create_division_table",
      dependencies: &["m20240105_000002_create_event_table"],
      migration: || Box::new(m20240112_000003_create_division_table::Migration),
    },
    Descriptor {
      name: "m20240112_000004_create_event_attendance_table",
      dependencies: &["m20240112_000003_create_division_table"],
      migration: || Box::new(m20240112_000004_create_event_attendance_table::Migration),
    },
    Descriptor {
      name: "m20240112_000005_create_event_comment_table",
      dependencies: &["m20240112_000004_create_event_attendance_table"],
      migration: || Box::new(m20240112_000005_create_event_comment_table::Migration),
    },
    Descriptor {
      name: "m20240203_000006_create_event_division_table",
      dependencies: &["m20240112_000005_create_event_comment_table"],
      migration: || Box::new(m20240203_000006_create_event_division_table::Migration),
    },
    Descriptor {
      name: "m20240219_000007_create_hotel_tables",
      dependencies: &["m20240203_000006_create_event_division_table"],
      migration: || Box::new(m20240219_000007_create_hotel_tables::Migration),
    },
    Descriptor {
      name: "m20240219_000008_create_media_item_table",
      dependencies: &["m20240219_000007_create_hotel_tables"],
      migration: || Box::new(m20240219_000008_create_media_item_table::Migration),
    },
    Descriptor {
      name: "m20240307_000009_add_media_columns_to_hotel_room_image_table",
      dependencies: &["m20240219_000008_create_media_item_table"],
      migration: || {
        Box::new(m20240307_000009_add_media_columns_to_hotel_room_image_table::Migration)
      },
    },
    Descriptor {
      name: "m20240311_000010_create_stripe_event_checkout_table",
      dependencies: &["m20240219_000008_create_media_item_table"],
      migration: || Box::new(m20240311_000010_create_stripe_event_checkout_table::Migration),
    },
    Descriptor {
      name: "m20240402_000011_add_subscription_columns_to_stripe_event_checkout_table",
      dependencies: &["m20240311_000010_create_stripe_event_checkout_table"],
      migration: || {
        Box::new(m20240402_000011_add_subscription_columns_to_stripe_event_checkout_table::Migration)
      },
    },
    Descriptor {
      name: "m20240415_000012_merge_media_and_checkout_histories",
      dependencies: &[
        "m20240307_000009_add_media_columns_to_hotel_room_image_table",
        "m20240402_000011_add_subscription_columns_to_stripe_event_checkout_table",
      ],
      migration: || Box::new(m20240415_000012_merge_media_and_checkout_histories::Migration),
    },
  ]
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    let descriptors = descriptors();

    history::linearize(&descriptors)
      .expect("the migration history graph must linearize")
      .into_iter()
      .map(|descriptor| (descriptor.migration)())
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use sea_orm_migration::sea_orm::{ConnectionTrait, Database, Statement};

  #[tokio::test]
  async fn duplicate_event_division_pairs_are_rejected() {
    let database_connection = Database::connect("sqlite::memory:").await.unwrap();

    Migrator::up(&database_connection, None).await.unwrap();

    let insert_pair = Statement::from_string(
      database_connection.get_database_backend(),
      r#"INSERT INTO "event_division" ("event_id", "division_id") VALUES (1, 2)"#,
    );

    database_connection
      .execute(insert_pair.clone())
      .await
      .unwrap();

    let duplicate_insert_result = database_connection.execute(insert_pair).await;

    assert!(duplicate_insert_result.is_err());
  }
}
