use std::time::Duration;

use iced::widget::{button, column, container, pick_list, row, rule, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task};

use chrono::Datelike;

use kurage_api::jellyfin::JellyfinClient;
use kurage_api::tmdb::{TitleKind, TmdbClient, TmdbDetails};
use kurage_core::browse::{
    BrowseController, BrowsePhase, Command, ItemPage, PlayedFilter, SEARCH_DEBOUNCE_MS,
};
use kurage_core::models::{FilterOption, MediaItem, MediaKind, PersonKind};

use crate::app;
use crate::cover_cache::{backdrop_key, person_key, poster_request, CoverCache};
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Relative scroll offset past which the end-of-list visibility signal
/// fires.
const LOAD_MORE_THRESHOLD: f32 = 0.92;

/// Cast entries shown in the overlay.
pub const MAX_CAST: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Detail overlay state for the selected item.
///
/// The summary record renders immediately; the full detail, seasons and
/// enrichment merge in as they arrive — but only while this is still the
/// active selection.
pub struct DetailState {
    pub item: MediaItem,
    pub loading: bool,
    pub seasons: Vec<MediaItem>,
    pub enrichment: Option<TmdbDetails>,
}

/// Browse screen: paginated, filterable item list for one library scope.
pub struct Browse {
    controller: BrowseController,
    title: String,
    genres: Vec<FilterOption>,
    years: Vec<u32>,
    show_filters: bool,
    view_mode: ViewMode,
    random_exclude_played: bool,
    random_loading: bool,
    region: String,
    pub detail: Option<DetailState>,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SearchDebounced(u64),
    ClearSearch,
    GenreChanged(Option<String>),
    YearChanged(u32),
    ClearYear,
    PlayedChanged(PlayedFilter),
    ToggleFilterPanel,
    ViewModeChanged(ViewMode),
    Scrolled(f32),
    PageLoaded {
        epoch: u64,
        result: Result<ItemPage, String>,
    },
    GenresLoaded(Vec<FilterOption>),
    Retry,
    RandomPick,
    ToggleRandomUnplayed,
    RandomLoaded(Box<Option<MediaItem>>),
    ItemSelected(String),
    CloseDetail,
    DetailLoaded {
        item_id: String,
        result: Result<Box<MediaItem>, String>,
    },
    SeasonsLoaded {
        item_id: String,
        seasons: Vec<MediaItem>,
    },
    EnrichmentLoaded {
        item_id: String,
        details: Box<Option<TmdbDetails>>,
    },
    PlayPressed,
    OpenUrl(String),
}

impl Browse {
    pub fn new(region: String) -> Self {
        let current_year = chrono::Utc::now().year().max(1900) as u32;
        Self {
            controller: BrowseController::new(),
            title: String::new(),
            genres: Vec::new(),
            years: (1900..=current_year).rev().collect(),
            show_filters: false,
            view_mode: ViewMode::default(),
            random_exclude_played: false,
            random_loading: false,
            region,
            detail: None,
        }
    }

    /// Enter a library scope (or the all-libraries view) and kick off the
    /// first page plus the genre options for the filter panel.
    pub fn enter(
        &mut self,
        scope: Option<String>,
        title: String,
        client: Option<&JellyfinClient>,
    ) -> Action {
        self.title = title;
        self.detail = None;
        self.show_filters = false;
        self.genres.clear();

        let cmd = self.controller.set_scope(scope.clone());
        let fetch = self.command_task(cmd, client);

        let genres = match (scope, client) {
            (Some(library_id), Some(client)) => {
                let client = client.clone();
                Task::perform(
                    async move { client.list_genres(Some(&library_id)).await },
                    |genres| app::Message::Browse(Message::GenresLoaded(genres)),
                )
            }
            _ => Task::none(),
        };

        Action::RunTask(Task::batch([fetch, genres]))
    }

    pub fn update(
        &mut self,
        msg: Message,
        client: Option<&JellyfinClient>,
        tmdb: Option<&TmdbClient>,
    ) -> Action {
        match msg {
            Message::SearchChanged(value) => {
                let cmd = self.controller.set_search(value);
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::SearchDebounced(generation) => {
                let cmd = self.controller.debounce_elapsed(generation);
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::ClearSearch => {
                let cmd = self.controller.set_search(String::new());
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::GenreChanged(genre_id) => {
                let cmd = self.controller.set_genre(genre_id);
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::YearChanged(year) => {
                let cmd = self.controller.set_year(Some(year));
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::ClearYear => {
                let cmd = self.controller.set_year(None);
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::PlayedChanged(played) => {
                let cmd = self.controller.set_played(played);
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::ToggleFilterPanel => {
                self.show_filters = !self.show_filters;
                Action::None
            }
            Message::ViewModeChanged(mode) => {
                self.view_mode = mode;
                Action::None
            }
            Message::Scrolled(offset) => {
                if offset >= LOAD_MORE_THRESHOLD {
                    let cmd = self.controller.load_more();
                    return Action::RunTask(self.command_task(cmd, client));
                }
                Action::None
            }
            Message::PageLoaded { epoch, result } => match result {
                Ok(page) => {
                    self.controller.apply_page(epoch, page);
                    Action::None
                }
                Err(e) => {
                    if self.controller.fail_page(epoch, e.clone()) {
                        Action::SetStatus(format!("Failed to load items: {e}"))
                    } else {
                        Action::None
                    }
                }
            },
            Message::GenresLoaded(genres) => {
                self.genres = genres;
                Action::None
            }
            Message::Retry => {
                let cmd = self.controller.refresh();
                Action::RunTask(self.command_task(cmd, client))
            }
            Message::RandomPick => {
                let Some(client) = client else {
                    return Action::None;
                };
                if self.random_loading {
                    return Action::None;
                }
                self.random_loading = true;
                // A global search picks from everything, like the search
                // results it replaces.
                let scope = if self.controller.filters().search_term().is_some() {
                    None
                } else {
                    self.controller.scope().map(String::from)
                };
                let exclude_played = self.random_exclude_played;
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move { client.random_item(scope.as_deref(), exclude_played).await },
                    |item| app::Message::Browse(Message::RandomLoaded(Box::new(item))),
                ))
            }
            Message::ToggleRandomUnplayed => {
                self.random_exclude_played = !self.random_exclude_played;
                Action::None
            }
            Message::RandomLoaded(item) => {
                self.random_loading = false;
                match *item {
                    Some(item) => self.open_detail(item, client, tmdb),
                    None => Action::ShowToast("Nothing to pick right now.".into(), ToastKind::Info),
                }
            }
            Message::ItemSelected(item_id) => {
                let Some(item) = self
                    .controller
                    .items()
                    .iter()
                    .find(|i| i.id == item_id)
                    .cloned()
                else {
                    return Action::None;
                };
                self.open_detail(item, client, tmdb)
            }
            Message::CloseDetail => {
                self.detail = None;
                Action::None
            }
            Message::DetailLoaded { item_id, result } => {
                // Ignore results for anything but the active selection.
                let Some(detail) = self.detail.as_mut().filter(|d| d.item.id == item_id) else {
                    return Action::None;
                };
                detail.loading = false;
                match result {
                    Ok(full) => {
                        detail.item = *full;
                        self.spawn_detail_followups(client, tmdb)
                    }
                    Err(e) => {
                        tracing::warn!("Detail fetch failed: {e}");
                        Action::SetStatus(format!("Failed to load details: {e}"))
                    }
                }
            }
            Message::SeasonsLoaded { item_id, seasons } => {
                if let Some(detail) = self.detail.as_mut().filter(|d| d.item.id == item_id) {
                    detail.seasons = seasons;
                }
                Action::None
            }
            Message::EnrichmentLoaded { item_id, details } => {
                if let Some(detail) = self.detail.as_mut().filter(|d| d.item.id == item_id) {
                    detail.enrichment = *details;
                }
                Action::None
            }
            Message::PlayPressed => {
                if let (Some(detail), Some(client)) = (&self.detail, client) {
                    let url = client.web_player_url(&detail.item.id);
                    if let Err(e) = open::that(url) {
                        tracing::warn!("Failed to open web player: {e}");
                    }
                }
                Action::None
            }
            Message::OpenUrl(url) => {
                if let Err(e) = open::that(url) {
                    tracing::warn!("Failed to open link: {e}");
                }
                Action::None
            }
        }
    }

    /// Interpret a controller command as an iced task.
    fn command_task(
        &mut self,
        cmd: Command,
        client: Option<&JellyfinClient>,
    ) -> Task<app::Message> {
        match cmd {
            Command::None => Task::none(),
            Command::Debounce { generation } => Task::perform(
                tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
                move |_| app::Message::Browse(Message::SearchDebounced(generation)),
            ),
            Command::Fetch(req) => {
                let Some(client) = client else {
                    return Task::none();
                };
                let client = client.clone();
                let epoch = req.epoch;
                Task::perform(
                    async move { client.list_items(&req).await.map_err(|e| e.to_string()) },
                    move |result| app::Message::Browse(Message::PageLoaded { epoch, result }),
                )
            }
        }
    }

    /// Show the summary immediately and fetch the full record.
    fn open_detail(
        &mut self,
        item: MediaItem,
        client: Option<&JellyfinClient>,
        _tmdb: Option<&TmdbClient>,
    ) -> Action {
        let item_id = item.id.clone();
        self.detail = Some(DetailState {
            item,
            loading: true,
            seasons: Vec::new(),
            enrichment: None,
        });
        let Some(client) = client else {
            return Action::None;
        };
        let client = client.clone();
        let fetch_id = item_id.clone();
        Action::RunTask(Task::perform(
            async move {
                client
                    .item_detail(&fetch_id)
                    .await
                    .map(Box::new)
                    .map_err(|e| e.to_string())
            },
            move |result| {
                app::Message::Browse(Message::DetailLoaded {
                    item_id: item_id.clone(),
                    result,
                })
            },
        ))
    }

    /// After the full detail arrives: seasons for a series, enrichment
    /// when the server has paired a catalog id. Both are best-effort.
    fn spawn_detail_followups(
        &self,
        client: Option<&JellyfinClient>,
        tmdb: Option<&TmdbClient>,
    ) -> Action {
        let Some(detail) = &self.detail else {
            return Action::None;
        };
        let item = &detail.item;
        let mut tasks = Vec::new();

        if item.kind == MediaKind::Series {
            if let Some(client) = client {
                let client = client.clone();
                let series_id = item.id.clone();
                let item_id = item.id.clone();
                tasks.push(Task::perform(
                    async move {
                        client.list_seasons(&series_id).await.unwrap_or_else(|e| {
                            tracing::warn!("Season listing failed: {e}");
                            Vec::new()
                        })
                    },
                    move |seasons| {
                        app::Message::Browse(Message::SeasonsLoaded {
                            item_id: item_id.clone(),
                            seasons,
                        })
                    },
                ));
            }
        }

        if let (Some(tmdb_id), Some(tmdb)) = (item.provider_ids.tmdb.clone(), tmdb) {
            let tmdb = tmdb.clone();
            let kind = TitleKind::for_item(item.kind);
            let item_id = item.id.clone();
            tasks.push(Task::perform(
                async move { tmdb.fetch_details(kind, &tmdb_id).await },
                move |details| {
                    app::Message::Browse(Message::EnrichmentLoaded {
                        item_id: item_id.clone(),
                        details: Box::new(details),
                    })
                },
            ));
        }

        if tasks.is_empty() {
            Action::None
        } else {
            Action::RunTask(Task::batch(tasks))
        }
    }

    /// The watch-provider region for the detail overlay.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Artwork to prefetch: posters for the visible list, plus backdrop,
    /// poster and cast photos for the open overlay.
    pub fn cover_requests(&self, client: &JellyfinClient) -> Vec<(String, Option<String>)> {
        let mut requests: Vec<(String, Option<String>)> = self
            .controller
            .items()
            .iter()
            .map(|item| poster_request(client, item, 300))
            .collect();

        if let Some(detail) = &self.detail {
            let item = &detail.item;
            requests.push(poster_request(client, item, 400));
            requests.push((backdrop_key(&item.id), client.backdrop_image_url(item, 1280)));
            for person in item
                .people
                .iter()
                .filter(|p| p.kind == PersonKind::Actor)
                .take(MAX_CAST)
            {
                requests.push((person_key(&person.id), client.person_image_url(person, 150)));
            }
        }

        requests
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        let filters = self.controller.filters();
        let searching = filters.search_term().is_some();

        let heading = if searching {
            format!("Search: \"{}\"", filters.search.trim())
        } else {
            self.title.clone()
        };

        let header = row![
            text(heading)
                .size(style::TEXT_XL)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT)
                .wrapping(iced::widget::text::Wrapping::None),
            container(
                text(self.controller.total_count().to_string())
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE)
            )
            .style(theme::metadata_badge(cs))
            .padding([style::SPACE_XXS, style::SPACE_SM]),
            iced::widget::Space::new().width(Length::Fill),
            self.search_bar(cs),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center)
        .padding([style::SPACE_MD, style::SPACE_LG]);

        let controls = self.controls_row(cs, searching);

        let mut content = column![header, controls]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.show_filters && !searching {
            content = content.push(self.filter_panel(cs));
        }

        content = content.push(rule::horizontal(1)).push(self.item_list(cs, covers));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn search_bar<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let input = text_input("Search movies and shows...", &self.controller.filters().search)
            .on_input(Message::SearchChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fixed(260.0))
            .style(theme::text_input_borderless(cs));

        let mut bar = row![search_icon, input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.controller.filters().search.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            bar = bar.push(
                button(
                    container(
                        lucide_icons::iced::icon_x()
                            .size(style::TEXT_SM)
                            .color(cs.on_surface_variant),
                    )
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
                )
                .on_press(Message::ClearSearch)
                .padding(0)
                .width(Length::Fixed(clear_size))
                .height(Length::Fixed(clear_size))
                .style(theme::icon_button(cs)),
            );
        }

        container(bar)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_SM, style::SPACE_MD])
            .into()
    }

    fn controls_row<'a>(&'a self, cs: &'a ColorScheme, searching: bool) -> Element<'a, Message> {
        let filters = self.controller.filters();

        // Random pick group: dice button + exclude-played toggle.
        let random_label = if self.random_loading { "Picking..." } else { "Random" };
        let mut random_btn = button(
            row![
                lucide_icons::iced::icon_dices().size(style::TEXT_SM),
                text(random_label)
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XS, style::SPACE_MD])
        .style(theme::primary_button(cs));
        if !self.random_loading {
            random_btn = random_btn.on_press(Message::RandomPick);
        }

        let eye = if self.random_exclude_played {
            lucide_icons::iced::icon_eye_off()
                .size(style::TEXT_SM)
                .color(cs.tertiary)
        } else {
            lucide_icons::iced::icon_eye()
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
        };
        let random_toggle = button(container(eye).center(Length::Fill))
            .width(Length::Fixed(28.0))
            .height(Length::Fixed(28.0))
            .padding(0)
            .on_press(Message::ToggleRandomUnplayed)
            .style(theme::icon_button(cs));

        let mut controls = row![random_btn, random_toggle]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center);

        if !searching {
            let filters_active = filters.is_restricted();
            let filter_icon = lucide_icons::iced::icon_funnel().size(style::TEXT_SM).color(
                if filters_active || self.show_filters {
                    cs.primary
                } else {
                    cs.on_surface_variant
                },
            );
            controls = controls.push(
                button(
                    row![
                        filter_icon,
                        text("Filters")
                            .size(style::TEXT_SM)
                            .line_height(style::LINE_HEIGHT_LOOSE),
                    ]
                    .spacing(style::SPACE_XS)
                    .align_y(Alignment::Center),
                )
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::ToggleFilterPanel)
                .style(theme::ghost_button(cs)),
            );
        }

        // View mode toggle buttons.
        let grid_icon = lucide_icons::iced::icon_layout_grid()
            .size(style::TEXT_SM)
            .color(if self.view_mode == ViewMode::Grid {
                cs.primary
            } else {
                cs.on_surface_variant
            });
        let list_icon = lucide_icons::iced::icon_list().size(style::TEXT_SM).color(
            if self.view_mode == ViewMode::List {
                cs.primary
            } else {
                cs.on_surface_variant
            },
        );
        let view_toggle = row![
            button(container(grid_icon).center(Length::Fill))
                .width(Length::Fixed(28.0))
                .height(Length::Fixed(28.0))
                .padding(0)
                .on_press(Message::ViewModeChanged(ViewMode::Grid))
                .style(theme::icon_button(cs)),
            button(container(list_icon).center(Length::Fill))
                .width(Length::Fixed(28.0))
                .height(Length::Fixed(28.0))
                .padding(0)
                .on_press(Message::ViewModeChanged(ViewMode::List))
                .style(theme::icon_button(cs)),
        ]
        .spacing(style::SPACE_XXS);

        row![
            controls,
            iced::widget::Space::new().width(Length::Fill),
            view_toggle,
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_XS, style::SPACE_LG])
        .into()
    }

    fn filter_panel<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let filters = self.controller.filters();

        // Play-state chips.
        let state_chip = |label: &'static str, value: PlayedFilter| {
            let selected = filters.played == value;
            button(
                text(label)
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .height(Length::Fixed(style::CHIP_HEIGHT))
            .padding([style::SPACE_XS, style::SPACE_MD])
            .on_press(Message::PlayedChanged(value))
            .style(theme::filter_chip(selected, cs))
        };
        let state_row = row![
            text("State")
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fixed(56.0)),
            state_chip("All", PlayedFilter::Any),
            state_chip("Unwatched", PlayedFilter::Unplayed),
            state_chip("Watched", PlayedFilter::Played),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);

        // Year pick list with a clear button.
        let mut year_row = row![
            text("Year")
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fixed(56.0)),
            pick_list(self.years.as_slice(), filters.year, Message::YearChanged)
                .placeholder("Any year")
                .text_size(style::TEXT_SM)
                .padding([style::SPACE_XS, style::SPACE_MD])
                .style(theme::pick_list_style(cs))
                .menu_style(theme::pick_list_menu_style(cs)),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);
        if filters.year.is_some() {
            year_row = year_row.push(
                button(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .padding(style::SPACE_XXS)
                .on_press(Message::ClearYear)
                .style(theme::icon_button(cs)),
            );
        }

        // Genre chips, wrapping.
        let mut genre_chips: Vec<Element<'a, Message>> = Vec::new();
        genre_chips.push(
            button(
                text("All")
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .height(Length::Fixed(style::CHIP_HEIGHT))
            .padding([style::SPACE_XS, style::SPACE_MD])
            .on_press(Message::GenreChanged(None))
            .style(theme::filter_chip(filters.genre_id.is_none(), cs))
            .into(),
        );
        for genre in &self.genres {
            let selected = filters.genre_id.as_deref() == Some(genre.id.as_str());
            genre_chips.push(
                button(
                    text(genre.name.as_str())
                        .size(style::TEXT_XS)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                )
                .height(Length::Fixed(style::CHIP_HEIGHT))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::GenreChanged(Some(genre.id.clone())))
                .style(theme::filter_chip(selected, cs))
                .into(),
            );
        }
        let genre_wrap = iced_aw::Wrap::with_elements(genre_chips)
            .spacing(style::SPACE_XS)
            .line_spacing(style::SPACE_XS);
        let genre_row = row![
            text("Genres")
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fixed(56.0)),
            genre_wrap,
        ]
        .spacing(style::SPACE_XS);

        container(
            column![state_row, year_row, genre_row].spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_MD)
        .width(Length::Fill)
        .into()
    }

    fn item_list<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        let items = self.controller.items();
        let phase = self.controller.phase();

        if phase == BrowsePhase::Loading {
            return container(
                text("Loading...")
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into();
        }

        if items.is_empty() {
            if self.controller.last_error().is_some() {
                let icon = lucide_icons::iced::icon_server_off()
                    .size(48.0)
                    .color(cs.outline)
                    .into();
                return column![
                    widgets::empty_state(
                        cs,
                        icon,
                        "Couldn't load this view",
                        "The server didn't answer. Try again.",
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
                .into();
            }
            let icon = lucide_icons::iced::icon_film()
                .size(48.0)
                .color(cs.outline)
                .into();
            return widgets::empty_state(cs, icon, "Nothing here", "No items match these filters.");
        }

        let body: Element<'a, Message> = match self.view_mode {
            ViewMode::Grid => {
                let cards: Vec<Element<'a, Message>> = items
                    .iter()
                    .map(|item| {
                        widgets::poster_card(
                            cs,
                            covers,
                            item,
                            Message::ItemSelected(item.id.clone()),
                        )
                    })
                    .collect();
                let wrap = iced_aw::Wrap::with_elements(cards)
                    .spacing(style::SPACE_SM)
                    .line_spacing(style::SPACE_SM);
                container(wrap)
                    .padding([style::SPACE_SM, style::SPACE_LG])
                    .width(Length::Fill)
                    .into()
            }
            ViewMode::List => {
                let rows: Vec<Element<'a, Message>> = items
                    .iter()
                    .map(|item| {
                        widgets::list_row(cs, covers, item, Message::ItemSelected(item.id.clone()))
                    })
                    .collect();
                column(rows)
                    .spacing(style::SPACE_XXS)
                    .padding([style::SPACE_XS, style::SPACE_LG])
                    .width(Length::Fill)
                    .into()
            }
        };

        let mut page = column![body].width(Length::Fill);
        if phase == BrowsePhase::LoadingMore {
            page = page.push(
                container(
                    text("Loading more...")
                        .size(style::TEXT_XS)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                )
                .center_x(Length::Fill)
                .padding(style::SPACE_MD),
            );
        }

        widgets::styled_scrollable(page, cs)
            .on_scroll(|viewport: scrollable::Viewport| {
                Message::Scrolled(viewport.relative_offset().y)
            })
            .height(Length::Fill)
            .into()
    }
}
