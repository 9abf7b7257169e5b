//! Startup and async helper functions

use std::time::Duration;

use anyhow::Context;
use futures_util::Stream;
use tokio::sync::mpsc;

use crate::api::{HealthStatus, StatsApi};
use crate::features::Settings;
use crate::features::player_search::SearchEvent;

/// Build the backend client from settings
///
/// A broken proxy configuration falls back to a direct connection rather
/// than leaving the app without a backend.
pub fn init_api(settings: &Settings) -> anyhow::Result<StatsApi> {
    match StatsApi::from_settings(&settings.backend, &settings.network) {
        Ok(api) => Ok(api),
        Err(e) => {
            tracing::warn!("Proxy settings rejected ({}), using direct connection", e);
            let timeout = Duration::from_secs(settings.backend.timeout_secs.max(1));
            StatsApi::with_timeout(settings.backend.base_url.clone(), timeout)
                .context("Failed to build backend HTTP client")
        }
    }
}

/// Probe the backend once; the error is flattened for the message bus
pub async fn check_health(api: StatsApi) -> Result<HealthStatus, String> {
    api.health_check().await.map_err(|e| e.to_string())
}

/// Forward controller completions until the controller is dropped
pub fn search_events(
    mut rx: mpsc::UnboundedReceiver<SearchEvent>,
) -> impl Stream<Item = SearchEvent> {
    async_stream::stream! {
        while let Some(event) = rx.recv().await {
            yield event;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn test_init_api_uses_backend_url() {
        let mut settings = Settings::default();
        settings.backend.base_url = "http://stats.example:9000/".to_string();
        let api = init_api(&settings).unwrap();
        assert_eq!(api.base_url(), "http://stats.example:9000");
    }

    #[tokio::test]
    async fn test_search_events_ends_with_sender() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(SearchEvent::DebounceElapsed(1)).unwrap();
        tx.send(SearchEvent::BlurGraceElapsed(2)).unwrap();
        drop(tx);

        let events: Vec<SearchEvent> = search_events(rx).collect().await;
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SearchEvent::DebounceElapsed(1)));
        assert!(matches!(events[1], SearchEvent::BlurGraceElapsed(2)));
    }
}
