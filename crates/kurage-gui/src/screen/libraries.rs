use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Task};

use kurage_api::jellyfin::JellyfinClient;
use kurage_core::models::LibraryView;

use crate::app;
use crate::cover_cache::{poster_key, CoverCache};
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Libraries screen state: the user's views on the server.
pub struct Libraries {
    views: Vec<LibraryView>,
    loaded: bool,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ViewsLoaded(Result<Vec<LibraryView>, String>),
    Open(usize),
    SearchAll,
    Retry,
}

impl Libraries {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            loaded: false,
            error: None,
        }
    }

    /// Fire an async task to load the user's library views.
    pub fn load(&self, client: Option<&JellyfinClient>) -> Action {
        let Some(client) = client else {
            return Action::None;
        };
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move { client.list_views().await.map_err(|e| e.to_string()) },
            |result| app::Message::Libraries(Message::ViewsLoaded(result)),
        ))
    }

    pub fn update(&mut self, msg: Message, client: Option<&JellyfinClient>) -> Action {
        match msg {
            Message::ViewsLoaded(result) => {
                self.loaded = true;
                match result {
                    Ok(views) => {
                        self.views = views;
                        self.error = None;
                    }
                    Err(e) => {
                        tracing::warn!("Library listing failed: {e}");
                        self.error = Some(e);
                    }
                }
                Action::None
            }
            Message::Open(idx) => match self.visible_views().get(idx) {
                Some(view) => Action::OpenLibrary {
                    scope: Some(view.id.clone()),
                    title: view.name.clone(),
                },
                None => Action::None,
            },
            Message::SearchAll => Action::OpenLibrary {
                scope: None,
                title: "All libraries".into(),
            },
            Message::Retry => {
                self.loaded = false;
                self.error = None;
                self.load(client)
            }
        }
    }

    /// Views shown to the user. The reserved collection-folder kind is a
    /// server-side grouping, not a browsable library.
    pub fn visible_views(&self) -> Vec<&LibraryView> {
        self.views
            .iter()
            .filter(|v| !v.is_boxset_collection())
            .collect()
    }

    /// Artwork to prefetch for the visible cards.
    pub fn cover_requests(&self, client: &JellyfinClient) -> Vec<(String, Option<String>)> {
        self.visible_views()
            .iter()
            .map(|view| {
                let url = view.image_tags.primary.as_deref().map(|tag| {
                    kurage_api::jellyfin::images::image_url(
                        &client.session().server_url,
                        &view.id,
                        Some(tag),
                        kurage_api::jellyfin::images::ImageKind::Primary,
                        Some(400),
                    )
                });
                (poster_key(&view.id), url)
            })
            .collect()
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        let header = row![
            text("My libraries")
                .size(style::TEXT_XL)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT)
                .width(Length::Fill),
            button(
                row![
                    lucide_icons::iced::icon_search().size(style::TEXT_SM),
                    text("Search everything")
                        .size(style::TEXT_SM)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                ]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center)
            )
            .padding([style::SPACE_SM, style::SPACE_LG])
            .on_press(Message::SearchAll)
            .style(theme::ghost_button(cs)),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_MD, style::SPACE_LG]);

        let visible = self.visible_views();

        let body: Element<'a, Message> = if !self.loaded {
            container(
                text("Loading...")
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
        } else if self.error.is_some() {
            let icon = lucide_icons::iced::icon_server_off()
                .size(48.0)
                .color(cs.outline)
                .into();
            column![
                widgets::empty_state(
                    cs,
                    icon,
                    "Couldn't reach the server",
                    "Check your connection and try again.",
                ),
                container(
                    button(text("Retry").size(style::TEXT_SM))
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::Retry)
                        .style(theme::ghost_button(cs))
                )
                .center_x(Length::Fill)
                .padding(style::SPACE_LG),
            ]
            .into()
        } else if visible.is_empty() {
            let icon = lucide_icons::iced::icon_film()
                .size(48.0)
                .color(cs.outline)
                .into();
            widgets::empty_state(cs, icon, "No libraries", "This user has no media libraries.")
        } else {
            let cards: Vec<Element<'a, Message>> = visible
                .iter()
                .enumerate()
                .map(|(idx, view)| widgets::library_card(cs, covers, view, Message::Open(idx)))
                .collect();

            let wrap = iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_MD)
                .line_spacing(style::SPACE_MD);

            widgets::styled_scrollable(
                container(wrap).padding([style::SPACE_SM, style::SPACE_LG]),
                cs,
            )
            .height(Length::Fill)
            .into()
        };

        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
