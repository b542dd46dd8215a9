pub mod browse;
pub mod libraries;
pub mod login;

use iced::Task;

use kurage_core::session::Session;

use crate::app;
use crate::toast::ToastKind;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Libraries,
    Browse,
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state — the app interprets them in one place.
#[allow(dead_code)]
pub enum Action {
    /// No side-effect.
    None,
    /// Navigate to a different page.
    NavigateTo(Page),
    /// Update the status bar message.
    SetStatus(String),
    /// Show a toast notification.
    ShowToast(String, ToastKind),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
    /// A login completed; the app owns session persistence and clients.
    LoggedIn(Box<Session>),
    /// Open the browse page for a library, or for all libraries when
    /// `scope` is `None`.
    OpenLibrary {
        scope: Option<String>,
        title: String,
    },
}
