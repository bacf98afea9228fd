//! Colors and container styles

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
pub const ERROR: Color = Color::from_rgb(0.9, 0.3, 0.3);

/// Window background
pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        ..Default::default()
    }
}

/// Raised panel used for the answer and each source
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
