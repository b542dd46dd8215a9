use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use kurage_core::models::{LibraryView, MediaItem};

use crate::cover_cache::{poster_key, CoverCache};
use crate::format;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: poster + horizontal padding inside the card.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// Grid poster card: cover, clipped title, year/rating line and a
/// watched marker.
pub fn poster_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    item: &'a MediaItem,
    on_select: Message,
) -> Element<'a, Message> {
    let cover = widgets::rounded_cover(
        cs,
        covers,
        &poster_key(&item.id),
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    // Title (clipped to 2 lines via container height)
    let title_el = container(
        text(item.name.as_str())
            .size(style::TEXT_SM)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let mut meta = row![]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);
    if let Some(year) = item.production_year {
        meta = meta.push(
            text(year.to_string())
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }
    if let Some(rating) = item.community_rating {
        meta = meta.push(
            text(format!("\u{2605} {}", format::rating(rating)))
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }
    if item.is_played() {
        meta = meta.push(
            lucide_icons::iced::icon_eye()
                .size(style::TEXT_XS)
                .color(cs.tertiary),
        );
    }

    let card_content = column![cover, title_el, meta]
        .spacing(style::SPACE_XS)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    let inner = container(card_content).style(theme::media_card_style(cs));

    button(inner)
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .on_press(on_select)
        .style(theme::media_card_button(cs))
        .into()
}

/// Compact list row: thumbnail, name, year, rating, watched marker.
pub fn list_row<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    item: &'a MediaItem,
    on_select: Message,
) -> Element<'a, Message> {
    let thumb = widgets::rounded_cover(
        cs,
        covers,
        &poster_key(&item.id),
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let year = item
        .production_year
        .map(|y| y.to_string())
        .unwrap_or_default();
    let rating = item
        .community_rating
        .map(|r| format!("\u{2605} {}", format::rating(r)))
        .unwrap_or_default();

    let mut line = row![
        thumb,
        text(item.name.as_str())
            .size(style::TEXT_SM)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None)
            .width(Length::Fill),
        text(year)
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(rating)
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_MD)
    .align_y(Alignment::Center);

    if item.is_played() {
        line = line.push(
            lucide_icons::iced::icon_eye()
                .size(style::TEXT_SM)
                .color(cs.tertiary),
        );
    }

    button(container(line).padding([style::SPACE_XS, style::SPACE_SM]))
        .width(Length::Fill)
        .padding(0)
        .on_press(on_select)
        .style(theme::list_item(cs))
        .into()
}

/// Landscape tile for a library on the libraries screen.
pub fn library_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    view: &'a LibraryView,
    on_open: Message,
) -> Element<'a, Message> {
    let cover = widgets::rounded_cover(
        cs,
        covers,
        &poster_key(&view.id),
        style::LIBRARY_CARD_WIDTH - 2.0 * style::SPACE_SM,
        style::LIBRARY_CARD_HEIGHT - 44.0,
        style::RADIUS_MD,
    );

    let name_line = row![
        lucide_icons::iced::icon_server()
            .size(style::TEXT_SM)
            .color(cs.primary),
        text(view.name.as_str())
            .size(style::TEXT_BASE)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    let card_content = column![cover, name_line]
        .spacing(style::SPACE_SM)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(style::LIBRARY_CARD_WIDTH));

    button(container(card_content).style(theme::media_card_style(cs)))
        .padding(0)
        .width(Length::Fixed(style::LIBRARY_CARD_WIDTH))
        .on_press(on_open)
        .style(theme::media_card_button(cs))
        .into()
}
