//! Question input with one checkbox per retriever

use std::collections::BTreeSet;

use iced::widget::{button, checkbox, column, row, text, text_input};
use iced::Element;

use crate::app::Message;
use crate::backend::Retriever;

pub fn view<'a>(question: &str, selected: &BTreeSet<Retriever>, loading: bool) -> Element<'a, Message> {
    let label = if loading { "Asking..." } else { "Ask" };

    let retrievers = row(Retriever::ALL.into_iter().map(|retriever| {
        checkbox(retriever.as_str(), selected.contains(&retriever))
            .on_toggle(move |checked| Message::SourceToggled(retriever, checked))
            .into()
    }))
    .spacing(16);

    column![
        text_input("Enter your question...", question)
            .on_input(Message::QuestionChanged)
            .on_submit(Message::AskSubmit)
            .padding(10),
        retrievers,
        button(text(label))
            .padding([8, 16])
            .style(button::primary)
            .on_press_maybe((!loading).then_some(Message::AskSubmit)),
    ]
    .spacing(8)
    .into()
}
