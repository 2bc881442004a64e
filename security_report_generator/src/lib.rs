pub mod errors;
pub mod logging;
pub mod severity_summary;
