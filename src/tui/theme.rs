//! Style tokens

use crate::settings::ColorScheme;
use ratatui::style::Color;

/// Header and tab bar tint
pub const TINT: Color = Color::Rgb(0x0C, 0x61, 0x57);

/// Colours used by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header background
    pub header_bg: Color,
    /// Header title and actions
    pub header_fg: Color,
    /// Tab bar background
    pub tab_bar_bg: Color,
    /// Active tab label and indicator
    pub tab_active: Color,
    /// Inactive tab labels
    pub tab_inactive: Color,
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (previews, dates)
    pub muted: Color,
    /// Avatar badge background
    pub avatar_bg: Color,
    /// Avatar badge initial
    pub avatar_fg: Color,
    /// Selected row background
    pub selection_bg: Color,
}

impl Theme {
    /// Light palette
    pub fn light() -> Self {
        Self {
            header_bg: TINT,
            header_fg: Color::White,
            tab_bar_bg: TINT,
            tab_active: Color::White,
            tab_inactive: Color::Rgb(0xB0, 0xD0, 0xCC),
            background: Color::White,
            text: Color::Black,
            muted: Color::Gray,
            avatar_bg: Color::Rgb(0x25, 0xD3, 0x66),
            avatar_fg: Color::White,
            selection_bg: Color::Rgb(0xE6, 0xF2, 0xF0),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            header_bg: TINT,
            header_fg: Color::White,
            tab_bar_bg: TINT,
            tab_active: Color::Black,
            tab_inactive: Color::Rgb(0x80, 0xA8, 0xA3),
            background: Color::Black,
            text: Color::White,
            muted: Color::DarkGray,
            avatar_bg: Color::Rgb(0x12, 0x8C, 0x7E),
            avatar_fg: Color::White,
            selection_bg: Color::Rgb(0x1F, 0x2C, 0x34),
        }
    }

    /// Palette for `scheme`
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
