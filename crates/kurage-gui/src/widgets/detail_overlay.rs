//! The item detail overlay: summary first, then the full record, seasons
//! and enrichment as they arrive.

use iced::widget::{button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

use kurage_api::tmdb;
use kurage_core::models::{MediaItem, MediaKind, Person, PersonKind};

use crate::cover_cache::{backdrop_key, person_key, poster_key, CoverCache};
use crate::format;
use crate::screen::browse::{DetailState, Message, MAX_CAST};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Build the modal content for the selected item.
pub fn detail_overlay<'a>(
    cs: &'a ColorScheme,
    covers: &'a CoverCache,
    detail: &'a DetailState,
    region: &str,
) -> Element<'a, Message> {
    let item = &detail.item;

    let close_btn = button(
        lucide_icons::iced::icon_x()
            .size(style::TEXT_LG)
            .color(cs.on_surface_variant),
    )
    .padding(style::SPACE_XS)
    .on_press(Message::CloseDetail)
    .style(theme::icon_button(cs));

    let title_block = column![
        row![
            text(item.name.as_str())
                .size(style::TEXT_2XL)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT)
                .width(Length::Fill),
            close_btn,
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Start),
    ]
    .spacing(style::SPACE_XS);

    let title_block = match item.tagline() {
        Some(tagline) => title_block.push(
            text(format!("\u{201C}{tagline}\u{201D}"))
                .size(style::TEXT_BASE)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ),
        None => title_block,
    };
    let title_block = match &item.original_title {
        Some(original) if original != &item.name => title_block.push(
            text(original.as_str())
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ),
        _ => title_block,
    };

    let backdrop = widgets::rounded_cover(
        cs,
        covers,
        &backdrop_key(&item.id),
        style::DETAIL_WIDTH - 2.0 * style::SPACE_XL,
        style::DETAIL_BACKDROP_HEIGHT,
        style::RADIUS_LG,
    );

    let body = row![
        side_column(cs, covers, detail, region),
        main_column(cs, covers, detail),
    ]
    .spacing(style::SPACE_XL);

    let content = column![backdrop, title_block, body]
        .spacing(style::SPACE_LG)
        .padding(style::SPACE_XL)
        .width(Length::Fixed(style::DETAIL_WIDTH));

    container(
        widgets::styled_scrollable(content, cs).height(Length::Fixed(620.0)),
    )
    .style(theme::dialog_container(cs))
    .width(Length::Fixed(style::DETAIL_WIDTH))
    .into()
}

/// Poster, play/trailer actions, external links and provider badges.
fn side_column<'a>(
    cs: &'a ColorScheme,
    covers: &'a CoverCache,
    detail: &'a DetailState,
    region: &str,
) -> Element<'a, Message> {
    let item = &detail.item;

    let poster = widgets::rounded_cover(
        cs,
        covers,
        &poster_key(&item.id),
        style::DETAIL_POSTER_WIDTH,
        style::DETAIL_POSTER_HEIGHT,
        style::RADIUS_LG,
    );

    let play = button(
        row![
            lucide_icons::iced::icon_play().size(style::TEXT_BASE),
            text("Play")
                .size(style::TEXT_BASE)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .width(Length::Fixed(style::DETAIL_POSTER_WIDTH))
    .padding([style::SPACE_SM, style::SPACE_LG])
    .on_press(Message::PlayPressed)
    .style(theme::primary_button(cs));

    let mut side = column![poster, play].spacing(style::SPACE_MD);

    if let Some(trailer) = detail.enrichment.as_ref().and_then(|e| e.trailer()) {
        side = side.push(
            button(
                row![
                    lucide_icons::iced::icon_youtube().size(style::TEXT_SM),
                    text("Trailer")
                        .size(style::TEXT_SM)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                ]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
            )
            .width(Length::Fixed(style::DETAIL_POSTER_WIDTH))
            .padding([style::SPACE_SM, style::SPACE_LG])
            .on_press(Message::OpenUrl(trailer.youtube_url()))
            .style(theme::ghost_button(cs)),
        );
    }

    // External links: homepage, TMDB, IMDb.
    let mut links = row![].spacing(style::SPACE_SM).align_y(Alignment::Center);
    let mut any_link = false;
    if let Some(homepage) = detail
        .enrichment
        .as_ref()
        .and_then(|e| e.homepage.clone())
        .filter(|h| !h.is_empty())
    {
        links = links.push(link_button(cs, "Website", Message::OpenUrl(homepage)));
        any_link = true;
    }
    let kind = tmdb::TitleKind::for_item(item.kind);
    if let Some(tmdb_id) = &item.provider_ids.tmdb {
        links = links.push(link_button(
            cs,
            "TMDB",
            Message::OpenUrl(tmdb::types::title_url(kind, tmdb_id)),
        ));
        any_link = true;
    }
    let imdb_id = detail
        .enrichment
        .as_ref()
        .and_then(|e| e.external_ids.as_ref())
        .and_then(|ids| ids.imdb_id.clone())
        .or_else(|| item.provider_ids.imdb.clone());
    if let Some(imdb_id) = imdb_id {
        links = links.push(link_button(
            cs,
            "IMDb",
            Message::OpenUrl(tmdb::types::imdb_url(&imdb_id)),
        ));
        any_link = true;
    }
    if any_link {
        side = side.push(links);
    }

    // Streaming availability badges.
    if let (Some(enrichment), Some(tmdb_id)) = (&detail.enrichment, &item.provider_ids.tmdb) {
        let providers = enrichment.flatrate_providers(region);
        if !providers.is_empty() {
            let watch_url = format!("{}/watch", tmdb::types::title_url(kind, tmdb_id));
            let mut badges: Vec<Element<'a, Message>> = Vec::new();
            for provider in providers {
                badges.push(
                    button(
                        text(provider.provider_name.as_str())
                            .size(style::TEXT_XS)
                            .line_height(style::LINE_HEIGHT_LOOSE),
                    )
                    .padding([style::SPACE_XXS, style::SPACE_SM])
                    .on_press(Message::OpenUrl(watch_url.clone()))
                    .style(theme::filter_chip(false, cs))
                    .into(),
                );
            }
            let wrap = iced_aw::Wrap::with_elements(badges)
                .spacing(style::SPACE_XS)
                .line_spacing(style::SPACE_XS);
            side = side.push(rule::horizontal(1)).push(
                column![
                    text("Streaming")
                        .size(style::TEXT_XS)
                        .color(cs.outline)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                    wrap,
                ]
                .spacing(style::SPACE_SM)
                .width(Length::Fixed(style::DETAIL_POSTER_WIDTH)),
            );
        }
    }

    container(side)
        .width(Length::Fixed(style::DETAIL_POSTER_WIDTH))
        .into()
}

/// Badges, credits, synopsis, seasons, cast and tags.
fn main_column<'a>(
    cs: &'a ColorScheme,
    covers: &'a CoverCache,
    detail: &'a DetailState,
) -> Element<'a, Message> {
    let item = &detail.item;
    let mut main = column![].spacing(style::SPACE_LG).width(Length::Fill);

    // Metadata badges: year, duration, rating, original language.
    let mut badges: Vec<Element<'a, Message>> = Vec::new();
    let badge = |label: String| -> Element<'a, Message> {
        container(
            text(label)
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::metadata_badge(cs))
        .padding([style::SPACE_XXS, style::SPACE_SM])
        .into()
    };
    if let Some(year) = item.production_year {
        badges.push(badge(year.to_string()));
    }
    let duration = format::duration_display(item);
    if !duration.is_empty() {
        badges.push(badge(duration));
    }
    if let Some(rating) = item.community_rating {
        badges.push(badge(format!("\u{2605} {}", format::rating(rating))));
    }
    if let Some(lang) = detail
        .enrichment
        .as_ref()
        .and_then(|e| e.original_language.as_deref())
    {
        badges.push(badge(format::language_name(lang)));
    }
    if !badges.is_empty() {
        main = main.push(
            iced_aw::Wrap::with_elements(badges)
                .spacing(style::SPACE_XS)
                .line_spacing(style::SPACE_XS),
        );
    }

    // Directors (or creator-type crew for series).
    let directors = credited_directors(item);
    if !directors.is_empty() {
        let label = if item.kind == MediaKind::Series {
            "Created by"
        } else {
            "Directed by"
        };
        let person_index = detail
            .enrichment
            .as_ref()
            .map(|e| e.person_index())
            .unwrap_or_default();
        let mut line = row![text(label)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL)]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);
        for person in directors {
            line = line.push(
                button(
                    text(person.name.as_str())
                        .size(style::TEXT_SM)
                        .color(cs.primary)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                )
                .padding(0)
                .on_press(Message::OpenUrl(tmdb::types::person_url(
                    &person_index,
                    &person.name,
                )))
                .style(theme::icon_button(cs)),
            );
        }
        main = main.push(line);
    }

    // Synopsis, falling back to the enrichment overview.
    let synopsis = item
        .overview
        .as_deref()
        .or_else(|| {
            detail
                .enrichment
                .as_ref()
                .and_then(|e| e.overview.as_deref())
        })
        .unwrap_or(if detail.loading { "Loading..." } else { "..." });
    main = main.push(
        column![
            text("Synopsis")
                .size(style::TEXT_LG)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(synopsis)
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_SM),
    );

    // Seasons for a series.
    if item.kind == MediaKind::Series && !detail.seasons.is_empty() {
        let mut season_rows = column![].spacing(style::SPACE_XXS);
        for season in &detail.seasons {
            let episodes = season
                .child_count
                .map(|n| format!("{n} episodes"))
                .unwrap_or_default();
            season_rows = season_rows.push(
                row![
                    text(season.name.as_str())
                        .size(style::TEXT_SM)
                        .color(cs.on_surface)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    text(episodes)
                        .size(style::TEXT_XS)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                ]
                .spacing(style::SPACE_SM),
            );
        }
        main = main.push(
            container(
                column![
                    row![
                        lucide_icons::iced::icon_tv()
                            .size(style::TEXT_SM)
                            .color(cs.primary),
                        text(format!("Seasons ({})", detail.seasons.len()))
                            .size(style::TEXT_BASE)
                            .color(cs.on_surface)
                            .line_height(style::LINE_HEIGHT_NORMAL),
                    ]
                    .spacing(style::SPACE_SM)
                    .align_y(Alignment::Center),
                    season_rows,
                ]
                .spacing(style::SPACE_SM),
            )
            .style(theme::card(cs))
            .padding(style::SPACE_MD)
            .width(Length::Fill),
        );
    }

    // Cast strip.
    let actors: Vec<&Person> = item
        .people
        .iter()
        .filter(|p| p.kind == PersonKind::Actor)
        .take(MAX_CAST)
        .collect();
    if !actors.is_empty() {
        let person_index = detail
            .enrichment
            .as_ref()
            .map(|e| e.person_index())
            .unwrap_or_default();
        let mut strip = row![].spacing(style::SPACE_MD);
        for person in actors {
            let photo = widgets::rounded_cover(
                cs,
                covers,
                &person_key(&person.id),
                style::CAST_PHOTO_SIZE,
                style::CAST_PHOTO_SIZE,
                style::RADIUS_FULL,
            );
            let card = column![
                photo,
                text(person.name.as_str())
                    .size(style::TEXT_XS)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_LOOSE)
                    .center(),
                text(person.role.as_deref().unwrap_or_default())
                    .size(style::TEXT_XS)
                    .color(cs.outline)
                    .line_height(style::LINE_HEIGHT_LOOSE)
                    .center(),
            ]
            .spacing(style::SPACE_XXS)
            .align_x(Alignment::Center)
            .width(Length::Fixed(style::CAST_PHOTO_SIZE + 2.0 * style::SPACE_SM));
            strip = strip.push(
                button(card)
                    .padding(0)
                    .on_press(Message::OpenUrl(tmdb::types::person_url(
                        &person_index,
                        &person.name,
                    )))
                    .style(theme::icon_button(cs)),
            );
        }
        main = main.push(
            column![
                row![
                    lucide_icons::iced::icon_users()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface),
                    text("Cast")
                        .size(style::TEXT_LG)
                        .color(cs.on_surface)
                        .line_height(style::LINE_HEIGHT_TIGHT),
                ]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
                scrollable(strip)
                    .direction(scrollable::Direction::Horizontal(
                        scrollable::Scrollbar::new().width(4).scroller_width(4),
                    ))
                    .style(theme::overlay_scrollbar(cs)),
            ]
            .spacing(style::SPACE_SM),
        );
    }

    // Tags.
    if !item.tags.is_empty() {
        let mut tag_pills: Vec<Element<'a, Message>> = Vec::new();
        for tag in &item.tags {
            tag_pills.push(
                container(
                    text(tag.as_str())
                        .size(style::TEXT_XS)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                )
                .style(theme::metadata_badge(cs))
                .padding([style::SPACE_XXS, style::SPACE_SM])
                .into(),
            );
        }
        main = main.push(
            column![
                row![
                    lucide_icons::iced::icon_tag()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                    text("Tags")
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                ]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
                iced_aw::Wrap::with_elements(tag_pills)
                    .spacing(style::SPACE_XS)
                    .line_spacing(style::SPACE_XS),
            ]
            .spacing(style::SPACE_SM),
        );
    }

    main.into()
}

/// Directors, falling back to producer/writer/creator credits when the
/// server lists none (common for series).
fn credited_directors(item: &MediaItem) -> Vec<&Person> {
    let directors: Vec<&Person> = item
        .people
        .iter()
        .filter(|p| p.kind == PersonKind::Director)
        .collect();
    if !directors.is_empty() {
        return directors;
    }
    item.people
        .iter()
        .filter(|p| {
            matches!(
                p.kind,
                PersonKind::Producer | PersonKind::Writer | PersonKind::Creator
            )
        })
        .take(3)
        .collect()
}

fn link_button<'a>(
    cs: &'a ColorScheme,
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        row![
            lucide_icons::iced::icon_external_link()
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant),
            text(label)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    )
    .padding([style::SPACE_XXS, style::SPACE_SM])
    .on_press(on_press)
    .style(theme::ghost_button(cs))
    .into()
}
