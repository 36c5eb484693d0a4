//! Light/dark display themes.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Colors consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub label: Color,
    pub accent: Color,
    pub dim: Color,
    pub error: Color,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        };
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::White,
                text: Color::Black,
                label: Color::DarkGray,
                accent: Color::Blue,
                dim: Color::Gray,
                error: Color::Red,
            },
            Self::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                label: Color::Gray,
                accent: Color::Cyan,
                dim: Color::DarkGray,
                error: Color::LightRed,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
