//! Search bar component
//! Rounded player-search input with clear button, inline error and
//! the suggestion dropdown underneath

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Padding};

use crate::app::Message;
use crate::features::player_search::QueryState;
use crate::i18n::{Key, Locale};
use crate::ui::components::suggestion_list;
use crate::ui::{icons, theme};

pub const SEARCH_BAR_WIDTH: f32 = 480.0;

/// Build the search bar component
pub fn view(state: &QueryState, locale: Locale) -> Element<'_, Message> {
    let search_icon = svg(svg::Handle::from_memory(icons::SEARCH.as_bytes()))
        .width(18)
        .height(18)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::TEXT_MUTED),
        });

    let input = text_input(locale.get(Key::SearchPlaceholder), &state.text)
        .id(iced::widget::Id::new("player_search_input"))
        .on_input(Message::SearchInput)
        .on_submit(Message::SearchSubmit)
        .padding(Padding::new(12.0).left(0.0))
        .size(14)
        .style(theme::bare_text_input);

    // Spinner text while loading, clear button once something is typed
    let trailing: Element<'_, Message> = if state.is_loading {
        text(locale.get(Key::SearchLoading))
            .size(12)
            .style(|theme: &iced::Theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    } else if !state.text.is_empty() {
        button(
            svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .padding(6)
        .style(theme::ghost_button)
        .on_press(Message::SearchClear)
        .into()
    } else {
        Space::new().width(0).into()
    };

    let submit = button(text(locale.get(Key::SearchButton)).size(13))
        .padding(Padding::new(8.0).left(16.0).right(16.0))
        .style(theme::primary_button)
        .on_press(Message::SearchSubmit);

    let field = container(
        row![
            Space::new().width(16),
            search_icon,
            Space::new().width(12),
            input,
            trailing,
            Space::new().width(8),
            submit,
            Space::new().width(6),
        ]
        .align_y(Alignment::Center),
    )
    .width(SEARCH_BAR_WIDTH)
    .style(theme::search_field);

    let mut content = column![field].spacing(8).width(SEARCH_BAR_WIDTH);

    if state.has_error() {
        content = content.push(
            container(
                text(state.error_message.as_str())
                    .size(13)
                    .style(|theme: &iced::Theme| text::Style {
                        color: Some(theme::danger(theme)),
                    }),
            )
            .padding(Padding::new(0.0).left(16.0)),
        );
    }

    if let Some(dropdown) = suggestion_list::view(state, locale) {
        content = content.push(dropdown);
    }

    content.into()
}
