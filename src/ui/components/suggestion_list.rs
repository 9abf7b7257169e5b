//! Suggestion dropdown
//! Player rows from the latest lookup, or a "no players found" notice

use iced::widget::{Space, button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::player_search::QueryState;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const MAX_DROPDOWN_HEIGHT: f32 = 240.0;

/// Build the dropdown, or `None` when nothing should show
pub fn view(state: &QueryState, locale: Locale) -> Option<Element<'_, Message>> {
    if state.shows_suggestions() {
        let rows = state
            .suggestions
            .iter()
            .fold(column![].spacing(2), |col, username| col.push(suggestion_row(username)));

        Some(
            container(scrollable(rows).height(iced::Length::Shrink))
                .padding(6)
                .width(Fill)
                .max_height(MAX_DROPDOWN_HEIGHT)
                .style(theme::dropdown)
                .into(),
        )
    } else if state.shows_no_results() {
        let notice = format!("{} \"{}\"", locale.get(Key::SearchNoResults), state.text);
        Some(
            container(
                text(notice)
                    .size(13)
                    .style(|theme: &iced::Theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
            )
            .padding(16)
            .center_x(Fill)
            .style(theme::dropdown)
            .into(),
        )
    } else {
        None
    }
}

fn suggestion_row(username: &str) -> Element<'_, Message> {
    let icon = svg(svg::Handle::from_memory(icons::USER.as_bytes()))
        .width(16)
        .height(16)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::ACCENT),
        });

    button(
        row![icon, Space::new().width(12), text(username).size(14)]
            .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::new(10.0).left(14.0))
    .style(theme::ghost_button)
    .on_press(Message::SuggestionPicked(username.to_string()))
    .into()
}
