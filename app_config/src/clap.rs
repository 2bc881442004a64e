use clap::{Arg, Command};
use lazy_static::lazy_static;
use std::path::PathBuf;
use std::str::FromStr;

lazy_static! {
  pub static ref CLAP_ARGS: ClapArgs = ClapArgs::new();
}

/// The maintenance procedures an operator can run against the platform
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceTask {
  ReseedEventTypes,
  PatchEventColumns,
  PurgeEvents,
  WebsocketSmokeTest,
}

impl FromStr for MaintenanceTask {
  type Err = String;

  fn from_str(task_name: &str) -> Result<Self, Self::Err> {
    match task_name.trim().to_lowercase().as_str() {
      "reseed-event-types" => Ok(Self::ReseedEventTypes),
      "patch-event-columns" => Ok(Self::PatchEventColumns),
      "purge-events" => Ok(Self::PurgeEvents),
      "websocket-smoke-test" => Ok(Self::WebsocketSmokeTest),
      unknown => Err(format!("Unknown maintenance task {unknown:?}")),
    }
  }
}

pub struct ClapArgs {
  args: clap::ArgMatches,
}

impl ClapArgs {
  const MAINTENANCE_TASK: &'static str = "maintenance_task";
  const CITY_ID: &'static str = "city_id";
  const SECURITY_REPORT_PATH: &'static str = "security_report_path";

  pub fn new() -> Self {
    let args = Self::setup_args();

    Self { args }
  }

  pub fn maintenance_task(&self) -> Result<Option<MaintenanceTask>, String> {
    self
      .args
      .get_one::<String>(Self::MAINTENANCE_TASK)
      .map(|value| value.parse::<MaintenanceTask>())
      .transpose()
  }

  pub fn city_id(&self) -> Result<Option<i32>, String> {
    self
      .args
      .get_one::<String>(Self::CITY_ID)
      .map(|value| parse_city_id(value))
      .transpose()
  }

  pub fn security_report_path(&self) -> Option<PathBuf> {
    self
      .args
      .get_one::<String>(Self::SECURITY_REPORT_PATH)
      .map(PathBuf::from)
  }

  fn setup_args() -> clap::ArgMatches {
    Command::new("Event Platform Maintenance")
      .arg(
        Arg::new(Self::MAINTENANCE_TASK)
          .short('t')
          .long("task")
          .action(clap::ArgAction::Set)
          .help("Which maintenance task to run against the platform database."),
      )
      .arg(
        Arg::new(Self::CITY_ID)
          .short('c')
          .long("city")
          .action(clap::ArgAction::Set)
          .help("City ID used by the websocket smoke test subscription."),
      )
      .arg(
        Arg::new(Self::SECURITY_REPORT_PATH)
          .short('r')
          .long("report")
          .action(clap::ArgAction::Set)
          .help("Overrides the configured path of the security report JSON file."),
      )
      .get_matches()
  }
}

impl Default for ClapArgs {
  fn default() -> Self {
    Self::new()
  }
}

fn parse_city_id(value: &str) -> Result<i32, String> {
  value
    .parse::<i32>()
    .map_err(|error| format!("Invalid city ID {value:?}: {error}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maintenance_task_parses_every_known_name() {
    assert_eq!(
      "reseed-event-types".parse::<MaintenanceTask>(),
      Ok(MaintenanceTask::ReseedEventTypes)
    );
    assert_eq!(
      "patch-event-columns".parse::<MaintenanceTask>(),
      Ok(MaintenanceTask::PatchEventColumns)
    );
    assert_eq!(
      "purge-events".parse::<MaintenanceTask>(),
      Ok(MaintenanceTask::PurgeEvents)
    );
    assert_eq!(
      " Websocket-Smoke-Test ".parse::<MaintenanceTask>(),
      Ok(MaintenanceTask::WebsocketSmokeTest)
    );
  }

  #[test]
  fn maintenance_task_rejects_unknown_names() {
    assert!("recreate-divisions".parse::<MaintenanceTask>().is_err());
  }

  #[test]
  fn malformed_city_ids_become_errors() {
    assert_eq!(parse_city_id("7"), Ok(7));

    let error = parse_city_id("downtown").unwrap_err();

    assert!(error.contains("downtown"));
  }
}
