// src/app/update/backend.rs
//! Backend health message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, BackendStatus};

impl App {
    /// Handle backend-related messages
    pub fn handle_backend(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HealthChecked(Ok(health)) => {
                if health.is_healthy() {
                    tracing::info!("Backend healthy: {:?}", health.extra);
                    self.core.backend = BackendStatus::Online;
                } else {
                    tracing::warn!("Backend reported status {:?}", health.status);
                    self.core.backend = BackendStatus::Offline;
                }
                Some(Task::none())
            }

            Message::HealthChecked(Err(e)) => {
                tracing::warn!("Backend health check failed: {}", e);
                self.core.backend = BackendStatus::Offline;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HealthStatus;
    use crate::app::update::test_support;

    fn health(status: &str) -> HealthStatus {
        serde_json::from_str(&format!(r#"{{"status":"{}","service":"stats-api"}}"#, status))
            .unwrap()
    }

    #[test]
    fn test_health_results() {
        let mut app = test_support::app();
        assert_eq!(app.core.backend, BackendStatus::Checking);

        let _ = app.update(Message::HealthChecked(Ok(health("healthy"))));
        assert_eq!(app.core.backend, BackendStatus::Online);

        let _ = app.update(Message::HealthChecked(Ok(health("degraded"))));
        assert_eq!(app.core.backend, BackendStatus::Offline);

        let _ = app.update(Message::HealthChecked(Ok(health("healthy"))));
        let _ = app.update(Message::HealthChecked(Err("timed out".to_string())));
        assert_eq!(app.core.backend, BackendStatus::Offline);
    }
}
