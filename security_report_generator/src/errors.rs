#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("{}", .0)]
  IoError(#[from] std::io::Error),

  #[error("{}", .0)]
  SerdeError(#[from] serde_json::Error),
}
