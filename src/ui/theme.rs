use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colours for one theme. Every widget styles itself through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) header_bg: Color,
    pub(crate) header_fg: Color,
    pub(crate) accent: Color,
    pub(crate) good: Color,
    pub(crate) bad: Color,
    pub(crate) warn: Color,
    pub(crate) surface: Color,
    pub(crate) text: Color,
    pub(crate) text_dim: Color,
    pub(crate) overlay: Color,
    pub(crate) command_bg: Color,
}

const STANDARD: Palette = Palette {
    header_bg: Color::Rgb(30, 30, 46),
    header_fg: Color::Rgb(205, 214, 244),
    accent: Color::Rgb(137, 180, 250),
    good: Color::Rgb(166, 227, 161),
    bad: Color::Rgb(243, 139, 168),
    warn: Color::Rgb(249, 226, 175),
    surface: Color::Rgb(49, 50, 68),
    text: Color::Rgb(205, 214, 244),
    text_dim: Color::Rgb(127, 132, 156),
    overlay: Color::Rgb(69, 71, 90),
    command_bg: Color::Rgb(24, 24, 37),
};

const DARK: Palette = Palette {
    header_bg: Color::Rgb(13, 17, 23),
    header_fg: Color::Rgb(230, 237, 243),
    accent: Color::Rgb(88, 166, 255),
    good: Color::Rgb(63, 185, 80),
    bad: Color::Rgb(248, 81, 73),
    warn: Color::Rgb(210, 153, 34),
    surface: Color::Rgb(22, 27, 34),
    text: Color::Rgb(201, 209, 217),
    text_dim: Color::Rgb(110, 118, 129),
    overlay: Color::Rgb(48, 54, 61),
    command_bg: Color::Rgb(1, 4, 9),
};

const LIGHT: Palette = Palette {
    header_bg: Color::Rgb(239, 241, 245),
    header_fg: Color::Rgb(76, 79, 105),
    accent: Color::Rgb(30, 102, 245),
    good: Color::Rgb(64, 160, 43),
    bad: Color::Rgb(210, 15, 57),
    warn: Color::Rgb(223, 142, 29),
    surface: Color::Rgb(230, 233, 239),
    text: Color::Rgb(76, 79, 105),
    text_dim: Color::Rgb(140, 143, 161),
    overlay: Color::Rgb(188, 192, 204),
    command_bg: Color::Rgb(220, 224, 232),
};

const CONTRAST: Palette = Palette {
    header_bg: Color::Black,
    header_fg: Color::White,
    accent: Color::Yellow,
    good: Color::LightGreen,
    bad: Color::LightRed,
    warn: Color::Yellow,
    surface: Color::Black,
    text: Color::White,
    text_dim: Color::Gray,
    overlay: Color::White,
    command_bg: Color::Black,
};

impl Palette {
    pub(crate) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Standard => STANDARD,
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
            Theme::Contrast => CONTRAST,
        }
    }

    pub(crate) fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selected_style(&self) -> Style {
        Style::default().fg(self.header_bg).bg(self.accent)
    }

    pub(crate) fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub(crate) fn alt_row_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub(crate) fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn section_style(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn command_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.command_bg)
    }

    pub(crate) fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.surface)
    }

    pub(crate) fn border_style(&self) -> Style {
        Style::default().fg(self.overlay)
    }

    /// Mode badge on the status bar.
    pub(crate) fn badge_style(&self, color: Color) -> Style {
        Style::default()
            .fg(self.header_bg)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }
}
