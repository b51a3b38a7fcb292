//! Weather condition glyphs
//!
//! The API describes conditions as free Chinese text ("晴時多雲", "多雲短暫陣雨").
//! Keywords overlap, so they are checked in a fixed priority order and the
//! first hit decides the glyph.

/// Glyph used when no keyword matches or the condition is missing
pub const DEFAULT_ICON: &str = "🌤️";

/// Keyword categories in priority order: clear, cloudy, overcast, rain, thunder
const KEYWORD_ICONS: [(&str, &str); 5] = [
    ("晴", "☀️"),
    ("多雲", "⛅"),
    ("陰", "☁️"),
    ("雨", "🌧️"),
    ("雷", "⛈️"),
];

/// Maps a condition description to a weather glyph
///
/// Never fails: missing, empty and unrecognized descriptions all map to
/// [`DEFAULT_ICON`].
pub fn map_weather_icon(condition: Option<&str>) -> &'static str {
    let Some(condition) = condition.filter(|c| !c.is_empty()) else {
        return DEFAULT_ICON;
    };

    KEYWORD_ICONS
        .iter()
        .find(|(keyword, _)| condition.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
