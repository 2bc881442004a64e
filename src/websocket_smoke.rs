use crate::errors::AppError;
use app_config::APP_CONFIG;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

/// How long to wait for the server's reply to the subscription message.
pub const RESPONSE_TIMEOUT_SECONDS: u64 = 10;

/// Wire shape of the subscription: `{"type": "subscribe_city", "city_id": N}`.
#[derive(Debug, Serialize, PartialEq)]
pub struct CitySubscription {
  #[serde(rename = "type")]
  pub message_type: &'static str,
  pub city_id: i32,
}

impl CitySubscription {
  pub fn new(city_id: i32) -> Self {
    Self {
      message_type: "subscribe_city",
      city_id,
    }
  }
}

/// Connects to the configured websocket endpoint, subscribes to a city's
/// event feed, and prints the first raw payload the server sends back. The
/// response shape is not pinned down anywhere, so nothing is parsed.
pub async fn run_smoke_test(city_id: i32) -> Result<(), AppError> {
  let url = Url::parse(APP_CONFIG.websocket_url())?;

  tracing::info!("Connecting to {}", url);

  let (mut socket_stream, _) = connect_async(url.to_string()).await?;
  let subscription = serde_json::to_string(&CitySubscription::new(city_id))?;

  socket_stream.send(Message::Text(subscription.into())).await?;

  let response = match timeout(
    Duration::from_secs(RESPONSE_TIMEOUT_SECONDS),
    socket_stream.next(),
  )
  .await
  {
    Ok(Some(message)) => message?,
    Ok(None) => return Err(AppError::WebsocketClosedEarly),
    Err(_) => return Err(AppError::WebsocketResponseTimeout(RESPONSE_TIMEOUT_SECONDS)),
  };

  println!("{}", response.into_text()?);

  socket_stream.close(None).await?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn subscription_message_matches_the_wire_format() {
    let message = serde_json::to_string(&CitySubscription::new(7)).unwrap();

    assert_eq!(message, r#"{"type":"subscribe_city","city_id":7}"#);
  }
}
