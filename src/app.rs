//! Core application state and Iced Application implementation
//!
//! Logged out, the window shows the login form. Once a token is held it shows
//! the ask form, the answer and its sources.

use std::collections::BTreeSet;

use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{font, Element, Font, Length, Size, Task, Theme};

use crate::backend::{AnswerResult, AuthError, BackendClient, Credentials, QueryError, Retriever, Token};
use crate::config::Config;
use crate::native;
use crate::session::Session;
use crate::ui::{answer_display, ask_form, login_form, sources_list, theme};

pub const TITLE: &str = "Vectorworx AI Frontend";

// ============================================================================
// Application State
// ============================================================================

pub struct Vectorworx {
    backend: BackendClient,
    session: Session,
    username: String,
    password: String,
    question: String,
    selected: BTreeSet<Retriever>,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    LoginSubmit,
    LoginFinished(Result<Token, AuthError>),
    QuestionChanged(String),
    SourceToggled(Retriever, bool),
    AskSubmit,
    /// Carries the session generation the question was asked in
    AskFinished(u64, Result<AnswerResult, QueryError>),
    OpenSource(String),
    Logout,
}

impl Vectorworx {
    pub fn new(config: &Config) -> Self {
        Self {
            backend: BackendClient::new(&config.api_url),
            session: Session::new(),
            username: login_form::DEFAULT_USERNAME.to_string(),
            password: login_form::DEFAULT_PASSWORD.to_string(),
            question: String::new(),
            selected: BTreeSet::new(),
        }
    }

    pub fn title(&self) -> String {
        String::from(TITLE)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UsernameChanged(username) => {
                self.username = username;
                Task::none()
            }

            Message::PasswordChanged(password) => {
                self.password = password;
                Task::none()
            }

            Message::LoginSubmit => {
                if !self.session.begin_login() {
                    return Task::none();
                }
                let backend = self.backend.clone();
                let credentials = Credentials::new(self.username.clone(), self.password.clone());
                Task::perform(
                    async move { backend.login(&credentials).await },
                    Message::LoginFinished,
                )
            }

            Message::LoginFinished(result) => {
                self.session.finish_login(result);
                Task::none()
            }

            Message::QuestionChanged(question) => {
                self.question = question;
                Task::none()
            }

            Message::SourceToggled(retriever, checked) => {
                if checked {
                    self.selected.insert(retriever);
                } else {
                    self.selected.remove(&retriever);
                }
                Task::none()
            }

            Message::AskSubmit => {
                let Some(query) = self.session.begin_ask(&self.question, &self.selected) else {
                    return Task::none();
                };
                let backend = self.backend.clone();
                let token = self.session.token().clone();
                let generation = self.session.generation();
                Task::perform(
                    async move { backend.ask(&query, &token).await },
                    move |result| Message::AskFinished(generation, result),
                )
            }

            Message::AskFinished(generation, result) => {
                self.session.finish_ask_for(generation, result);
                Task::none()
            }

            Message::OpenSource(url) => {
                if let Err(e) = native::open_link(&url) {
                    tracing::warn!("Could not open source: {}", e);
                }
                Task::none()
            }

            Message::Logout => {
                self.session.logout();
                self.question.clear();
                self.selected.clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let bold = Font {
            weight: font::Weight::Bold,
            ..Font::default()
        };

        let header = text(TITLE).size(28).font(bold).color(theme::TEXT);

        let body = if self.session.is_authenticated() {
            Column::new()
                .push(ask_form::view(&self.question, &self.selected, self.session.is_asking()))
                .push_maybe(answer_display::view(self.session.answer(), self.session.is_asking()))
                .push_maybe(sources_list::view(self.session.sources(), Message::OpenSource))
                .push(
                    button(text("Log out"))
                        .padding([6, 12])
                        .style(button::secondary)
                        .on_press(Message::Logout),
                )
        } else {
            Column::new()
                .push(login_form::view(&self.username, &self.password, self.session.is_logging_in()))
                .push_maybe(
                    self.session
                        .login_error()
                        .map(|e| text(e).color(theme::ERROR)),
                )
        };

        container(scrollable(
            column![header, body.spacing(16)]
                .spacing(16)
                .padding(32)
                .max_width(640),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(theme::window)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Open the desktop window and block until it is closed
pub fn run(config: Config) -> iced::Result {
    tracing::info!("Starting Vectorworx against {}", config.api_url);

    iced::application(Vectorworx::title, Vectorworx::update, Vectorworx::view)
        .theme(Vectorworx::theme)
        .window_size(Size::new(640.0, 720.0))
        .centered()
        .antialiasing(true)
        .run_with(move || (Vectorworx::new(&config), Task::none()))
}
