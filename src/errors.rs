#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("{}", .0)]
  SeaOrmDbError(#[from] sea_orm::error::DbErr),

  #[error("{}", .0)]
  UrlParseError(#[from] url::ParseError),

  #[error("{}", .0)]
  SerdeError(#[from] serde_json::Error),

  #[error("{}", .0)]
  WebsocketError(#[from] tokio_tungstenite::tungstenite::Error),

  #[error("Encountered a Tokio IO error: `{:?}`", .0)]
  TokioIOError(#[from] tokio::io::Error),

  #[error("The websocket server closed the connection before answering the subscription.")]
  WebsocketClosedEarly,

  #[error("Timed out after {} seconds waiting for a websocket response.", .0)]
  WebsocketResponseTimeout(u64),
}
