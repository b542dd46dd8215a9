pub mod item;
pub mod library;

pub use item::{ImageTags, MediaItem, MediaKind, Person, PersonKind, ProviderIds, UserData};
pub use library::{FilterOption, LibraryView};
