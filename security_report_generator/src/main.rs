use app_config::{APP_CONFIG, CLAP_ARGS};
use security_report_generator::severity_summary::{load_report, SeveritySummary};

fn main() {
  security_report_generator::logging::setup_logging_config().unwrap();

  let report_path = CLAP_ARGS
    .security_report_path()
    .unwrap_or_else(|| APP_CONFIG.security_report_path().to_path_buf());

  // An absent report means the scanner has not run. Print nothing.
  let Some(report) = load_report(&report_path).unwrap() else {
    tracing::info!("No security report found at {:?}. Nothing to do.", report_path);

    return;
  };

  let summary = SeveritySummary::from_report(&report);

  println!("{} findings in {:?}", summary.total_findings, report_path);
  println!("{}", summary.to_table());
}
