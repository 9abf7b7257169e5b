//! Home page - "Home" view
//! Title, player search and backend status

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{BackendStatus, Message};
use crate::features::player_search::QueryState;
use crate::i18n::{Key, Locale};
use crate::ui::components;
use crate::ui::theme;

/// Build the home page view
pub fn view<'a>(
    search: Option<&'a QueryState>,
    backend: &BackendStatus,
    locale: Locale,
) -> Element<'a, Message> {
    let title = text(locale.get(Key::AppName)).size(40);
    let tagline = text(locale.get(Key::AppTagline))
        .size(16)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let search_bar: Element<'a, Message> = match search {
        Some(state) => components::search_bar::view(state, locale),
        None => Space::new().height(48).into(),
    };

    let content = column![
        Space::new().height(96),
        title,
        Space::new().height(8),
        tagline,
        Space::new().height(40),
        search_bar,
        Space::new().height(Fill),
        backend_status(backend, locale),
    ]
    .align_x(Alignment::Center)
    .padding(Padding::new(24.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

fn backend_status<'a>(backend: &BackendStatus, locale: Locale) -> Element<'a, Message> {
    let (label, online) = match backend {
        BackendStatus::Checking => (locale.get(Key::BackendChecking), None),
        BackendStatus::Online => (locale.get(Key::BackendOnline), Some(true)),
        BackendStatus::Offline => (locale.get(Key::BackendOffline), Some(false)),
    };

    let dot = text("●").size(10).style(move |theme: &iced::Theme| text::Style {
        color: Some(match online {
            Some(true) => theme::success(theme),
            Some(false) => theme::danger(theme),
            None => theme::text_muted(theme),
        }),
    });

    row![dot, Space::new().width(8), text(label).size(12)]
        .align_y(Alignment::Center)
        .into()
}
