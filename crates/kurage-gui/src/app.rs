use iced::widget::{button, column, container, row, stack, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};

use kurage_api::jellyfin::JellyfinClient;
use kurage_api::tmdb::TmdbClient;
use kurage_core::config::{AppConfig, ThemeMode};
use kurage_core::session::{Session, SessionStore};

use crate::cover_cache::{self, CoverCache, CoverState};
use crate::screen::{browse, libraries, login, Action, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, KurageTheme};
use crate::toast::{self, Toast, ToastKind};
use crate::widgets;
use crate::window_state::WindowState;

/// Application state — slim router that delegates to screens.
pub struct Kurage {
    page: Page,
    config: AppConfig,
    store: SessionStore,
    client: Option<JellyfinClient>,
    tmdb: Option<TmdbClient>,
    // Screens
    login: login::Login,
    libraries: libraries::Libraries,
    browse: browse::Browse,
    // Artwork
    cover_cache: CoverCache,
    // App-level chrome
    toasts: Vec<Toast>,
    next_toast_id: u64,
    status_message: String,
    // Theme
    current_theme: KurageTheme,
    active_mode: ThemeMode,
    // Window persistence
    window_state: WindowState,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    WindowEvent(window::Event),
    EscapePressed,
    CoverLoaded {
        key: String,
        result: Result<std::path::PathBuf, String>,
    },
    DismissToast(u64),
    Logout,
    Login(login::Message),
    Libraries(libraries::Message),
    Browse(browse::Message),
}

impl Kurage {
    pub fn new(server_override: Option<String>) -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            AppConfig::default()
        });
        let store = SessionStore::open();

        // Login form seed: CLI flag > last-used URL > configured default.
        let seed_url = server_override
            .or_else(|| store.last_server_url())
            .unwrap_or_else(|| config.server.default_url.clone());

        let session = store.load();
        let client = session.clone().map(JellyfinClient::new);
        let tmdb = session.as_ref().map(|s| {
            TmdbClient::new(config.metadata_base(&s.server_url), config.ui.language.clone())
        });

        let current_theme = theme::find_theme(&config.appearance.theme)
            .unwrap_or_else(KurageTheme::default_theme);
        let active_mode = theme::resolve_mode(config.appearance.mode);

        let region = config.ui.language.to_uppercase();
        let mut app = Self {
            page: if session.is_some() {
                Page::Libraries
            } else {
                Page::Login
            },
            config,
            store,
            client,
            tmdb,
            login: login::Login::new(seed_url),
            libraries: libraries::Libraries::new(),
            browse: browse::Browse::new(region),
            cover_cache: CoverCache::default(),
            toasts: Vec::new(),
            next_toast_id: 0,
            status_message: "Ready".into(),
            current_theme,
            active_mode,
            window_state: WindowState::load(),
        };

        let task = if app.client.is_some() {
            let action = app.libraries.load(app.client.as_ref());
            let load = app.handle_action(action);
            let avatar = app.request_avatar();
            Task::batch([load, avatar])
        } else {
            Task::none()
        };
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Kurage")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                if page == Page::Libraries {
                    let action = self.libraries.load(self.client.as_ref());
                    return self.handle_action(action);
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::EscapePressed => {
                if self.page == Page::Browse && self.browse.detail.is_some() {
                    let action = self.browse.update(
                        browse::Message::CloseDetail,
                        self.client.as_ref(),
                        self.tmdb.as_ref(),
                    );
                    return self.handle_action(action);
                }
                Task::none()
            }
            Message::CoverLoaded { key, result } => {
                match result {
                    Ok(path) => {
                        self.cover_cache.states.insert(key, CoverState::Loaded(path));
                    }
                    Err(_) => {
                        self.cover_cache.states.insert(key, CoverState::Failed);
                    }
                }
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.retain(|t| t.id != id);
                Task::none()
            }
            Message::Logout => {
                if let Err(e) = self.store.clear() {
                    tracing::warn!("Failed to clear session: {e}");
                }
                self.client = None;
                self.tmdb = None;
                self.login
                    .seed_server(self.store.last_server_url().unwrap_or_default());
                self.page = Page::Login;
                self.status_message = "Signed out".into();
                Task::none()
            }
            Message::Login(msg) => {
                let action = self.login.update(msg);
                self.handle_action(action)
            }
            Message::Libraries(msg) => {
                let action = self.libraries.update(msg, self.client.as_ref());
                let action_task = self.handle_action(action);
                let requests = match &self.client {
                    Some(client) => self.libraries.cover_requests(client),
                    None => Vec::new(),
                };
                let covers = self.batch_request_covers(requests);
                Task::batch([action_task, covers])
            }
            Message::Browse(msg) => {
                let action = self
                    .browse
                    .update(msg, self.client.as_ref(), self.tmdb.as_ref());
                let action_task = self.handle_action(action);
                let requests = match &self.client {
                    Some(client) => self.browse.cover_requests(client),
                    None => Vec::new(),
                };
                let covers = self.batch_request_covers(requests);
                Task::batch([action_task, covers])
            }
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::NavigateTo(page) => {
                self.page = page;
                Task::none()
            }
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
            Action::ShowToast(message, kind) => self.push_toast(message, kind),
            Action::RunTask(task) => task,
            Action::LoggedIn(session) => self.complete_login(*session),
            Action::OpenLibrary { scope, title } => {
                self.page = Page::Browse;
                let action = self.browse.enter(scope, title, self.client.as_ref());
                self.handle_action(action)
            }
        }
    }

    /// Persist the session, build clients and land on the libraries page.
    fn complete_login(&mut self, session: Session) -> Task<Message> {
        if let Err(e) = self.store.save(&session) {
            tracing::warn!("Failed to persist session: {e}");
        }
        self.status_message = format!("Signed in as {}", session.user_name);
        self.tmdb = Some(TmdbClient::new(
            self.config.metadata_base(&session.server_url),
            self.config.ui.language.clone(),
        ));
        self.client = Some(JellyfinClient::new(session));
        self.page = Page::Libraries;
        let action = self.libraries.load(self.client.as_ref());
        let load = self.handle_action(action);
        let avatar = self.request_avatar();
        Task::batch([load, avatar])
    }

    /// Prefetch the signed-in user's avatar for the nav rail.
    fn request_avatar(&mut self) -> Task<Message> {
        let Some(client) = &self.client else {
            return Task::none();
        };
        let key = cover_cache::avatar_key(&client.session().user_id);
        let url = client.user_avatar_url(100);
        self.request_cover(key, url)
    }

    fn push_toast(&mut self, message: String, kind: ToastKind) -> Task<Message> {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, message, kind });
        Task::perform(
            tokio::time::sleep(std::time::Duration::from_secs(toast::AUTO_DISMISS_SECS)),
            move |_| Message::DismissToast(id),
        )
    }

    /// Batch-request artwork downloads for a set of (key, url) pairs.
    fn batch_request_covers(&mut self, items: Vec<(String, Option<String>)>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = items
            .into_iter()
            .map(|(key, url)| self.request_cover(key, url))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request one artwork download if not already requested.
    fn request_cover(&mut self, key: String, url: Option<String>) -> Task<Message> {
        let Some(url) = url else {
            // No art available — mark failed so the placeholder renders.
            self.cover_cache
                .states
                .entry(key)
                .or_insert(CoverState::Failed);
            return Task::none();
        };
        if self.cover_cache.states.contains_key(&key) {
            return Task::none();
        }
        // Check disk cache first.
        let path = cover_cache::cover_path(&key);
        if path.exists() {
            self.cover_cache
                .states
                .insert(key, CoverState::Loaded(path));
            return Task::none();
        }
        self.cover_cache
            .states
            .insert(key.clone(), CoverState::Loading);
        let result_key = key.clone();
        Task::perform(
            async move { cover_cache::fetch_cover(key, url).await },
            move |result| Message::CoverLoaded {
                key: result_key.clone(),
                result,
            },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);

        if self.page == Page::Login {
            let page = self.login.view(cs).map(Message::Login);
            return self.with_toasts(cs, page);
        }

        let nav = self.nav_rail(cs);

        let page_content: Element<'_, Message> = match self.page {
            Page::Login => unreachable!("login handled above"),
            Page::Libraries => self
                .libraries
                .view(cs, &self.cover_cache)
                .map(Message::Libraries),
            Page::Browse => self
                .browse
                .view(cs, &self.cover_cache)
                .map(Message::Browse),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        let main: Element<'_, Message> =
            column![row![nav, page_content].height(Length::Fill), status_bar].into();

        // Wrap in the detail overlay when one is open.
        let main = if self.page == Page::Browse {
            if let Some(detail) = &self.browse.detail {
                let overlay =
                    widgets::detail_overlay(cs, &self.cover_cache, detail, self.browse.region())
                        .map(Message::Browse);
                widgets::modal(
                    main,
                    overlay,
                    Message::Browse(browse::Message::CloseDetail),
                    cs.modal_backdrop,
                )
            } else {
                main
            }
        } else {
            main
        };

        self.with_toasts(cs, main)
    }

    fn with_toasts<'a>(
        &'a self,
        cs: &'a ColorScheme,
        base: Element<'a, Message>,
    ) -> Element<'a, Message> {
        if self.toasts.is_empty() {
            return base;
        }
        let overlay = toast::toast_overlay(cs, &self.toasts, Message::DismissToast);
        stack![base, overlay].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions()
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>,
                        label: &'static str,
                        message: Message,
                        active: bool| {
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(message)
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            column![
                nav_item(
                    icons::icon_library(),
                    "Libraries",
                    Message::NavigateTo(Page::Libraries),
                    self.page == Page::Libraries,
                ),
                nav_item(
                    icons::icon_search(),
                    "Search",
                    Message::Libraries(libraries::Message::SearchAll),
                    self.page == Page::Browse,
                ),
            ]
            .spacing(style::SPACE_XS)
            .align_x(Alignment::Center),
            iced::widget::Space::new().height(Length::Fill),
            container(self.avatar(cs))
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .padding(iced::Padding::new(0.0).bottom(style::SPACE_XS)),
            container(nav_item(
                icons::icon_log_out(),
                "Sign out",
                Message::Logout,
                false,
            ))
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .padding(iced::Padding::new(0.0).bottom(style::SPACE_SM)),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }

    /// Signed-in user's avatar, or their initial when the server has no
    /// image for them.
    fn avatar<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let Some(client) = &self.client else {
            return iced::widget::Space::new().width(0).height(0).into();
        };
        let session = client.session();
        let key = cover_cache::avatar_key(&session.user_id);
        if let Some(CoverState::Loaded(_)) = self.cover_cache.get(&key) {
            return widgets::rounded_cover(
                cs,
                &self.cover_cache,
                &key,
                32.0,
                32.0,
                style::RADIUS_FULL,
            );
        }
        let initial = session
            .user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        container(
            text(initial)
                .size(style::TEXT_SM)
                .color(cs.on_primary_container)
                .center(),
        )
        .width(Length::Fixed(32.0))
        .height(Length::Fixed(32.0))
        .center_x(Length::Fixed(32.0))
        .center_y(Length::Fixed(32.0))
        .style(theme::avatar_badge(cs))
        .into()
    }
}
