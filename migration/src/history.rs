use sea_orm_migration::MigrationTrait;
use std::collections::BTreeSet;

/// A migration plus the history metadata the migrator orders it by.
///
/// `dependencies` names the migrations that must run first. Descriptors form
/// a graph rather than a list so two histories can evolve independently and
/// later be reconciled by a merge descriptor: one that depends on both branch
/// heads and performs no schema operations.
#[derive(Debug)]
pub struct Descriptor {
  pub name: &'static str,
  pub dependencies: &'static [&'static str],
  pub migration: fn() -> Box<dyn MigrationTrait>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
  #[error("Migration {dependent:?} depends on unknown migration {dependency:?}")]
  UnknownDependency { dependent: String, dependency: String },

  #[error("The migration history contains a dependency cycle involving {:?}", .0)]
  DependencyCycle(String),

  #[error(
    "The migration history has multiple heads: {:?}. Add a merge migration depending on every head before advancing.",
    .0
  )]
  DivergentHeads(Vec<String>),
}

/// The leaf descriptors nothing else depends on, in registration order.
pub fn heads(descriptors: &[Descriptor]) -> Vec<&'static str> {
  let depended_upon: BTreeSet<&str> = descriptors
    .iter()
    .flat_map(|descriptor| descriptor.dependencies.iter().copied())
    .collect();

  descriptors
    .iter()
    .map(|descriptor| descriptor.name)
    .filter(|name| !depended_upon.contains(name))
    .collect()
}

/// Flattens the descriptor graph into a runnable order: every dependency
/// before its dependents, ties broken by registration order.
///
/// Fails on unknown dependencies, cycles, and histories left with more than
/// one head.
pub fn linearize(descriptors: &[Descriptor]) -> Result<Vec<&Descriptor>, HistoryError> {
  let known_names: BTreeSet<&str> = descriptors
    .iter()
    .map(|descriptor| descriptor.name)
    .collect();

  for descriptor in descriptors {
    for dependency in descriptor.dependencies {
      if !known_names.contains(dependency) {
        return Err(HistoryError::UnknownDependency {
          dependent: descriptor.name.to_string(),
          dependency: dependency.to_string(),
        });
      }
    }
  }

  let mut ordered: Vec<&Descriptor> = Vec::with_capacity(descriptors.len());
  let mut emitted: BTreeSet<&str> = BTreeSet::new();

  while ordered.len() < descriptors.len() {
    let next = descriptors.iter().find(|descriptor| {
      !emitted.contains(descriptor.name)
        && descriptor
          .dependencies
          .iter()
          .all(|dependency| emitted.contains(dependency))
    });

    let Some(next) = next else {
      let stuck = descriptors
        .iter()
        .find(|descriptor| !emitted.contains(descriptor.name))
        .map(|descriptor| descriptor.name.to_string())
        .unwrap_or_default();

      return Err(HistoryError::DependencyCycle(stuck));
    };

    emitted.insert(next.name);
    ordered.push(next);
  }

  let heads = heads(descriptors);

  if heads.len() > 1 {
    return Err(HistoryError::DivergentHeads(
      heads.into_iter().map(String::from).collect(),
    ));
  }

  Ok(ordered)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn descriptor(name: &'static str, dependencies: &'static [&'static str]) -> Descriptor {
    Descriptor {
      name,
      dependencies,
      migration: || Box::new(crate::m20240415_000012_merge_media_and_checkout_histories::Migration),
    }
  }

  #[test]
  fn linear_history_keeps_registration_order() {
    let descriptors = [
      descriptor("0001_base", &[]),
      descriptor("0002_extend", &["0001_base"]),
      descriptor("0003_more", &["0002_extend"]),
    ];

    let ordered: Vec<&str> = linearize(&descriptors)
      .unwrap()
      .into_iter()
      .map(|descriptor| descriptor.name)
      .collect();

    assert_eq!(ordered, ["0001_base", "0002_extend", "0003_more"]);
  }

  #[test]
  fn dependencies_run_before_dependents_regardless_of_registration_order() {
    let descriptors = [
      descriptor("0002_extend", &["0001_base"]),
      descriptor("0001_base", &[]),
    ];

    let ordered: Vec<&str> = linearize(&descriptors)
      .unwrap()
      .into_iter()
      .map(|descriptor| descriptor.name)
      .collect();

    assert_eq!(ordered, ["0001_base", "0002_extend"]);
  }

  #[test]
  fn divergent_heads_are_rejected_until_merged() {
    let mut descriptors = vec![
      descriptor("0001_base", &[]),
      descriptor("0002_local", &["0001_base"]),
      descriptor("0003_server", &["0001_base"]),
    ];

    assert_eq!(
      linearize(&descriptors).unwrap_err(),
      HistoryError::DivergentHeads(vec!["0002_local".to_string(), "0003_server".to_string()])
    );

    descriptors.push(descriptor("0004_merge", &["0002_local", "0003_server"]));

    let ordered: Vec<&str> = linearize(&descriptors)
      .unwrap()
      .into_iter()
      .map(|descriptor| descriptor.name)
      .collect();

    assert_eq!(
      ordered,
      ["0001_base", "0002_local", "0003_server", "0004_merge"]
    );
    assert_eq!(heads(&descriptors), ["0004_merge"]);
  }

  #[test]
  fn unknown_dependencies_are_rejected() {
    let descriptors = [descriptor("0001_base", &["0000_missing"])];

    assert_eq!(
      linearize(&descriptors).unwrap_err(),
      HistoryError::UnknownDependency {
        dependent: "0001_base".to_string(),
        dependency: "0000_missing".to_string(),
      }
    );
  }

  #[test]
  fn dependency_cycles_are_rejected() {
    let descriptors = [
      descriptor("0001_a", &["0002_b"]),
      descriptor("0002_b", &["0001_a"]),
    ];

    assert_eq!(
      linearize(&descriptors).unwrap_err(),
      HistoryError::DependencyCycle("0001_a".to_string())
    );
  }

  #[test]
  fn registered_history_linearizes_with_the_merge_as_sole_head() {
    let descriptors = crate::descriptors();
    let ordered = linearize(&descriptors).unwrap();

    assert_eq!(ordered.len(), descriptors.len());
    assert_eq!(
      heads(&descriptors),
      ["m20240415_000012_merge_media_and_checkout_histories"]
    );

    for (position, descriptor) in ordered.iter().enumerate() {
      for dependency in descriptor.dependencies {
        let dependency_position = ordered
          .iter()
          .position(|other| other.name == *dependency)
          .unwrap();

        assert!(dependency_position < position);
      }
    }
  }
}
