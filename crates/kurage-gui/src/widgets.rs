pub mod detail_overlay;
pub mod empty_state;
pub mod media_card;
pub mod rounded_cover;

pub use detail_overlay::detail_overlay;
pub use empty_state::empty_state;
pub use media_card::{library_card, list_row, poster_card};
pub use rounded_cover::rounded_cover;

use iced::widget::{center, container, mouse_area, opaque, scrollable, stack};
use iced::{Color, Element};

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}

/// Layer `content` over `base` with a dimmed backdrop. Clicking the
/// backdrop publishes `on_blur`; Escape is handled by the app-level
/// keyboard subscription.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
    backdrop: Color,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(move |_theme| container::Style {
                background: Some(backdrop.into()),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
