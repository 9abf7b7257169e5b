//! Theme system for the stats client
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0b0f1a);
    pub const SURFACE: Color = color!(0x151b2b);
    pub const SURFACE_HOVER: Color = color!(0x1f2740);
    pub const BORDER: Color = color!(0x2a3350);
    pub const TEXT_MUTED: Color = color!(0x8a93ad);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf7f8fc);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_HOVER: Color = color!(0xeef0f7);
    pub const BORDER: Color = color!(0xd9dce8);
    pub const TEXT_MUTED: Color = color!(0x6b7288);
    pub const TEXT_PRIMARY: Color = color!(0x141826);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn surface_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_HOVER
    } else {
        light::SURFACE_HOVER
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Muted text, dark mode default
pub const TEXT_MUTED: Color = dark::TEXT_MUTED;

/// Gaming accent (same for both modes)
pub const ACCENT: Color = color!(0x7c5cff);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0x9a80ff);

/// Danger color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.95, 0.35, 0.4)
    } else {
        Color::from_rgb(0.8, 0.2, 0.25)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

// ============================================================================
// Widget styles
// ============================================================================

/// Main content area
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded surface holding the search input
pub fn search_field(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Dropdown panel below the search field
pub fn dropdown(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: iced::Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
        ..Default::default()
    }
}

/// Borderless input that lives inside [`search_field`]
pub fn bare_text_input(theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT,
    }
}

/// Filled accent button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Transparent button that highlights on hover (icons, dropdown rows)
pub fn ghost_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface_hover(theme))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(border_color(theme))),
            ..base
        },
        _ => base,
    }
}
