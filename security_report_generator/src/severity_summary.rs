use crate::errors::AppError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// The scanner output: a `results` list where each finding carries an
/// `issue_severity` label. Everything else in the file is ignored.
#[derive(Debug, Deserialize)]
pub struct SecurityReport {
  #[serde(default)]
  pub results: Vec<Finding>,
}

#[derive(Debug, Deserialize)]
pub struct Finding {
  pub issue_severity: String,
  #[serde(default)]
  pub issue_text: Option<String>,
}

#[derive(Tabled)]
struct SeverityRow {
  severity: String,
  findings: usize,
}

#[derive(Debug, PartialEq)]
pub struct SeveritySummary {
  pub total_findings: usize,
  pub counts_by_severity: BTreeMap<String, usize>,
}

impl SeveritySummary {
  pub fn from_report(report: &SecurityReport) -> Self {
    let mut counts_by_severity: BTreeMap<String, usize> = BTreeMap::new();

    for finding in &report.results {
      *counts_by_severity
        .entry(finding.issue_severity.clone())
        .or_default() += 1;
    }

    Self {
      total_findings: report.results.len(),
      counts_by_severity,
    }
  }

  pub fn to_table(&self) -> String {
    let severity_rows: Vec<SeverityRow> = self
      .counts_by_severity
      .iter()
      .map(|(severity, findings)| SeverityRow {
        severity: severity.clone(),
        findings: *findings,
      })
      .collect();

    let mut table = Table::new(severity_rows);

    table.with(Style::markdown());

    table.to_string()
  }
}

/// Loads the findings file. Returns None when the report does not exist,
/// which the caller treats as nothing to print.
pub fn load_report<P: AsRef<Path>>(report_path: P) -> Result<Option<SecurityReport>, AppError> {
  let report_path = report_path.as_ref();

  if !report_path.exists() {
    return Ok(None);
  }

  let report_contents = std::fs::read_to_string(report_path)?;

  Ok(Some(serde_json::from_str(&report_contents)?))
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE_REPORT: &str = r#"{
    "results": [
      {"issue_severity": "HIGH", "issue_text": "Use of insecure hash."},
      {"issue_severity": "LOW", "issue_text": "Try/except/pass detected."},
      {"issue_severity": "HIGH", "issue_text": "Hardcoded password."},
      {"issue_severity": "MEDIUM"}
    ]
  }"#;

  #[test]
  fn findings_are_grouped_and_counted_by_severity() {
    let report: SecurityReport = serde_json::from_str(SAMPLE_REPORT).unwrap();
    let summary = SeveritySummary::from_report(&report);

    assert_eq!(summary.total_findings, 4);
    assert_eq!(summary.counts_by_severity["HIGH"], 2);
    assert_eq!(summary.counts_by_severity["MEDIUM"], 1);
    assert_eq!(summary.counts_by_severity["LOW"], 1);
  }

  #[test]
  fn a_report_without_results_counts_nothing() {
    let report: SecurityReport = serde_json::from_str("{}").unwrap();
    let summary = SeveritySummary::from_report(&report);

    assert_eq!(summary.total_findings, 0);
    assert!(summary.counts_by_severity.is_empty());
  }

  #[test]
  fn the_rendered_table_lists_every_severity() {
    let report: SecurityReport = serde_json::from_str(SAMPLE_REPORT).unwrap();
    let table = SeveritySummary::from_report(&report).to_table();

    assert!(table.contains("HIGH"));
    assert!(table.contains("MEDIUM"));
    assert!(table.contains("LOW"));
  }

  #[test]
  fn a_missing_report_file_loads_as_none() {
    let loaded = load_report("./does_not_exist/security_report.json").unwrap();

    assert!(loaded.is_none());
  }
}
