//! Display formatting helpers for media metadata values.

use kurage_core::models::{MediaItem, MediaKind};

/// Server runtimes are 100ns ticks.
const TICKS_PER_MINUTE: i64 = 10_000_000 * 60;

/// Format a tick count as "2h 16m" / "45m". Empty below one minute.
pub fn runtime(ticks: i64) -> String {
    let total_minutes = (ticks as f64 / TICKS_PER_MINUTE as f64).round() as i64;
    if total_minutes <= 0 {
        return String::new();
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Duration line for the detail overlay: movies show their runtime,
/// series show average episode runtime times the recursive episode count.
pub fn duration_display(item: &MediaItem) -> String {
    let ticks = item.run_time_ticks.unwrap_or(0);
    if item.kind == MediaKind::Series {
        let episodes = item.recursive_item_count.unwrap_or(0) as i64;
        runtime(ticks * episodes)
    } else {
        runtime(ticks)
    }
}

/// Community rating with one decimal, e.g. "8.2".
pub fn rating(value: f32) -> String {
    format!("{value:.1}")
}

/// Human name for a language code the metadata provider reports.
/// Unknown codes fall back to the uppercased code itself.
pub fn language_name(code: &str) -> String {
    match code {
        "en" => "English".into(),
        "fr" => "French".into(),
        "es" => "Spanish".into(),
        "de" => "German".into(),
        "it" => "Italian".into(),
        "pt" => "Portuguese".into(),
        "ja" => "Japanese".into(),
        "ko" => "Korean".into(),
        "zh" => "Chinese".into(),
        "ru" => "Russian".into(),
        "hi" => "Hindi".into(),
        "nl" => "Dutch".into(),
        "sv" => "Swedish".into(),
        "da" => "Danish".into(),
        "no" => "Norwegian".into(),
        "fi" => "Finnish".into(),
        "pl" => "Polish".into(),
        "tr" => "Turkish".into(),
        "ar" => "Arabic".into(),
        "th" => "Thai".into(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_formats_hours_and_minutes() {
        assert_eq!(runtime(81_760_000_000), "2h 16m");
        assert_eq!(runtime(27_000_000_000), "45m");
        assert_eq!(runtime(0), "");
        assert_eq!(runtime(-5), "");
    }

    #[test]
    fn series_duration_multiplies_by_episode_count() {
        let series = MediaItem {
            kind: MediaKind::Series,
            run_time_ticks: Some(24 * TICKS_PER_MINUTE),
            recursive_item_count: Some(10),
            ..Default::default()
        };
        assert_eq!(duration_display(&series), "4h 0m");

        let movie = MediaItem {
            kind: MediaKind::Movie,
            run_time_ticks: Some(90 * TICKS_PER_MINUTE),
            ..Default::default()
        };
        assert_eq!(duration_display(&movie), "1h 30m");
    }

    #[test]
    fn unknown_language_uppercases() {
        assert_eq!(language_name("fr"), "French");
        assert_eq!(language_name("xx"), "XX");
    }
}
