//! Answer panel

use iced::widget::{container, row, text};
use iced::{font, Element, Font, Length};

use super::theme;

/// `None` when there is nothing to show yet
pub fn view<'a, Message: 'a>(answer: &'a str, loading: bool) -> Option<Element<'a, Message>> {
    if loading {
        return Some(text("Loading...").color(theme::TEXT_MUTED).into());
    }
    if answer.is_empty() {
        return None;
    }

    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::default()
    };

    Some(
        container(
            row![
                text("Answer:").font(bold).color(theme::TEXT),
                text(answer).color(theme::TEXT).width(Length::Fill),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(theme::panel)
        .into(),
    )
}
