//! Supported forecast locations
//!
//! The forecast API serves a fixed set of Taiwanese cities. Each location has
//! a URL path identifier and a short display name used by the selector pills.

/// A city the forecast API knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Kaohsiung,
    Taipei,
    NewTaipei,
    Taichung,
}

/// All locations in selector order
pub static LOCATIONS: [Location; 4] = [
    Location::Kaohsiung,
    Location::Taipei,
    Location::NewTaipei,
    Location::Taichung,
];

impl Location {
    /// Identifier used as the last path segment of the API URL
    pub fn id(&self) -> &'static str {
        match self {
            Location::Kaohsiung => "kaohsiung",
            Location::Taipei => "taipei",
            Location::NewTaipei => "new-taipei",
            Location::Taichung => "taichung",
        }
    }

    /// Name shown on the selector pill
    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Kaohsiung => "高雄",
            Location::Taipei => "台北",
            Location::NewTaipei => "新北",
            Location::Taichung => "台中",
        }
    }

    /// Position of this location in the selector row
    pub fn index(&self) -> usize {
        LOCATIONS
            .iter()
            .position(|location| location == self)
            .unwrap_or(0)
    }

    /// Location to the right in the selector row, wrapping at the end
    pub fn next(&self) -> Location {
        LOCATIONS[(self.index() + 1) % LOCATIONS.len()]
    }

    /// Location to the left in the selector row, wrapping at the start
    pub fn previous(&self) -> Location {
        let count = LOCATIONS.len();
        LOCATIONS[(self.index() + count - 1) % count]
    }
}

/// Returns all supported locations in selector order
pub fn all_locations() -> &'static [Location] {
    &LOCATIONS
}

/// Get a location by its identifier
///
/// # Arguments
///
/// * `id` - The API identifier for the city (e.g., "taipei", "new-taipei")
///
/// # Returns
///
/// Returns `Some(Location)` if found, `None` otherwise
pub fn get_location_by_id(id: &str) -> Option<Location> {
    LOCATIONS
        .iter()
        .copied()
        .find(|location| location.id().eq_ignore_ascii_case(id.trim()))
}
