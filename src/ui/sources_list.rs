//! Supporting sources under the answer
//!
//! Every field other than `type` comes straight from the service and may be
//! missing, so each line is only added when it has something to show.

use iced::widget::{button, column, container, text, Column};
use iced::{font, Element, Font, Length};

use super::theme;
use crate::backend::SourceRecord;

/// `on_open` turns a source url into the message that opens it
pub fn view<'a, Message: Clone + 'a>(
    sources: &'a [SourceRecord],
    on_open: fn(String) -> Message,
) -> Option<Element<'a, Message>> {
    if sources.is_empty() {
        return None;
    }

    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::default()
    };

    let items = sources.iter().map(|source| {
        let entry = Column::new()
            .push(text(source.heading()).font(bold).color(theme::TEXT))
            .push_maybe(source.snippet().map(|s| text(s).size(13).color(theme::TEXT_MUTED)))
            .push_maybe(source.url().map(|url| {
                button(text("View Source").size(13).color(theme::PRIMARY))
                    .padding(0)
                    .style(button::text)
                    .on_press(on_open(url.to_string()))
            }))
            .spacing(4);

        container(entry)
            .padding(12)
            .width(Length::Fill)
            .style(theme::panel)
            .into()
    });

    Some(
        column![
            text("Sources:").font(bold).color(theme::TEXT),
            Column::with_children(items).spacing(8),
        ]
        .spacing(8)
        .into(),
    )
}
