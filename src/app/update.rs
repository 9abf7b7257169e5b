//! Message update handlers - thin dispatcher delegating to submodules

mod backend;
mod navigation;
mod search;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_search(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_backend(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::api::StatsApi;
    use crate::app::App;
    use crate::features::Settings;

    /// App pointed at a port nothing listens on
    pub fn app() -> App {
        let api = StatsApi::new("http://127.0.0.1:9").unwrap();
        App::new(Settings::default(), api).0
    }
}
