//! Username/password form shown while logged out

use iced::widget::{button, column, text, text_input};
use iced::{Element, Length};

use crate::app::Message;

pub const DEFAULT_USERNAME: &str = "demo";
pub const DEFAULT_PASSWORD: &str = "test123";

pub fn view<'a>(username: &str, password: &str, loading: bool) -> Element<'a, Message> {
    let label = if loading { "Logging in..." } else { "Login" };

    column![
        text_input("Username", username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::LoginSubmit)
            .padding(10),
        text_input("Password", password)
            .secure(true)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginSubmit)
            .padding(10),
        button(text(label))
            .padding([8, 16])
            .style(button::success)
            .on_press_maybe((!loading).then_some(Message::LoginSubmit)),
    ]
    .spacing(8)
    .max_width(320)
    .width(Length::Fill)
    .into()
}
