use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Element, Length, Task};

use kurage_api::jellyfin;

use crate::app;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};

/// Login screen state.
pub struct Login {
    server: String,
    username: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ServerChanged(String),
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    LoginResult(Result<Box<kurage_core::session::Session>, String>),
}

impl Login {
    pub fn new(server: String) -> Self {
        Self {
            server,
            username: String::new(),
            password: String::new(),
            error: None,
            busy: false,
        }
    }

    /// Re-seed the server field, e.g. after logout.
    pub fn seed_server(&mut self, server: String) {
        if !server.is_empty() {
            self.server = server;
        }
        self.password.clear();
        self.busy = false;
        self.error = None;
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::ServerChanged(value) => {
                self.server = value;
                Action::None
            }
            Message::UsernameChanged(value) => {
                self.username = value;
                Action::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Action::None
            }
            Message::Submit => {
                if self.busy {
                    return Action::None;
                }
                let server = match normalize_server_url(&self.server) {
                    Some(url) => url,
                    None => {
                        self.error = Some("Server URL is required.".into());
                        return Action::None;
                    }
                };
                self.error = None;
                self.busy = true;
                let username = self.username.clone();
                let password = self.password.clone();
                Action::RunTask(Task::perform(
                    async move {
                        jellyfin::authenticate(&server, &username, &password)
                            .await
                            .map(Box::new)
                            .map_err(|e| e.to_string())
                    },
                    |result| app::Message::Login(Message::LoginResult(result)),
                ))
            }
            Message::LoginResult(result) => match result {
                Ok(session) => {
                    self.busy = false;
                    self.password.clear();
                    Action::LoggedIn(session)
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    self.busy = false;
                    self.error = Some("Sign-in failed. Check the server URL and credentials.".into());
                    Action::None
                }
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let heading = column![
            text("Kurage")
                .size(style::TEXT_2XL)
                .color(cs.primary)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text("Sign in to your media server")
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_x(Alignment::Center);

        let mut form = column![heading].spacing(style::SPACE_LG).width(Length::Fixed(360.0));

        if let Some(error) = &self.error {
            form = form.push(
                text(error.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }

        let submit_label = if self.busy { "Connecting..." } else { "Connect" };
        let mut submit = button(
            container(text(submit_label).size(style::TEXT_BASE))
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding([style::SPACE_SM, style::SPACE_LG])
        .style(theme::primary_button(cs));
        if !self.busy {
            submit = submit.on_press(Message::Submit);
        }

        form = form
            .push(
                text_input("Server URL", &self.server)
                    .on_input(Message::ServerChanged)
                    .size(style::TEXT_BASE)
                    .padding([style::SPACE_SM, style::SPACE_MD])
                    .style(theme::text_input_style(cs)),
            )
            .push(
                text_input("Username", &self.username)
                    .on_input(Message::UsernameChanged)
                    .size(style::TEXT_BASE)
                    .padding([style::SPACE_SM, style::SPACE_MD])
                    .style(theme::text_input_style(cs)),
            )
            .push(
                text_input("Password", &self.password)
                    .secure(true)
                    .on_input(Message::PasswordChanged)
                    .on_submit(Message::Submit)
                    .size(style::TEXT_BASE)
                    .padding([style::SPACE_SM, style::SPACE_MD])
                    .style(theme::text_input_style(cs)),
            )
            .push(submit);

        let card = container(form)
            .style(theme::dialog_container(cs))
            .padding(style::SPACE_2XL);

        container(card)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Trim a trailing slash and default to http:// when no scheme is given.
/// Empty input is rejected.
fn normalize_server_url(input: &str) -> Option<String> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("http://{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_server_url;

    #[test]
    fn server_url_normalization() {
        assert_eq!(normalize_server_url("  "), None);
        assert_eq!(
            normalize_server_url("jf.local:8096"),
            Some("http://jf.local:8096".into())
        );
        assert_eq!(
            normalize_server_url("https://media.example/"),
            Some("https://media.example".into())
        );
    }
}
