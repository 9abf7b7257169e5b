//! Player page - navigation target of a search selection

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Route};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

/// Build the player page for `username`
pub fn view<'a>(username: &'a str, locale: Locale) -> Element<'a, Message> {
    let back = button(
        row![
            svg(svg::Handle::from_memory(icons::BACK.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_muted(theme)),
                }),
            Space::new().width(6),
            text(locale.get(Key::Back)).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(6.0).right(12.0))
    .style(theme::ghost_button)
    .on_press(Message::NavigateBack);

    let route = Route::Player(username.to_string()).path();

    let content = column![
        back,
        Space::new().height(32),
        text(locale.get(Key::PlayerTitle))
            .size(14)
            .style(|theme: &iced::Theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        text(username).size(36),
        Space::new().height(12),
        text(format!("{}: {}", locale.get(Key::PlayerRoute), route)).size(13),
        Space::new().height(24),
        text(locale.get(Key::PlayerStatsUnavailable))
            .size(13)
            .style(|theme: &iced::Theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .padding(Padding::new(32.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}
