use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{window, Subscription};

use crate::app::Message;

/// All app-level subscriptions: window geometry events and the Escape
/// key (closes the detail overlay).
pub fn subscriptions() -> Subscription<Message> {
    let windows = window::events().map(|(_id, event)| Message::WindowEvent(event));
    let escape = iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => match key {
            Key::Named(Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        },
        _ => None,
    });
    Subscription::batch([windows, escape])
}
