//! Dashboard view state
//!
//! Holds what the screen shows: the active location, whether a fetch is in
//! progress, the last rendered forecast and a pending error notice. Every
//! fetch gets a fresh [`RequestId`]; a completion is applied only when its id
//! is still the latest one issued, so a slow response for a location the user
//! already left never overwrites the current one.

use crate::data::{ForecastError, Location};
use crate::render::ForecastView;

/// The only message users see when a fetch fails
pub const FETCH_FAILED_MESSAGE: &str = "天氣資料讀取失敗，狸克把網路線咬斷了！";

/// Monotonically increasing fetch identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

/// Blocking notification shown over the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Result of feeding a completion into the view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// New forecast is on screen
    Rendered,
    /// Fetch failed; previous content kept and a notice raised
    Failed,
    /// A newer request was issued meanwhile; nothing changed
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Location whose selector is highlighted
    pub active: Location,
    /// Whether the loading indicator replaces the content region
    pub loading: bool,
    /// Location of the forecast currently on screen
    pub shown_location: Option<Location>,
    /// Forecast currently on screen
    pub content: Option<ForecastView>,
    /// Error notice waiting to be dismissed
    pub notice: Option<Notice>,
    /// Number of notices raised since start
    pub notices_raised: u32,
    latest_request: RequestId,
}

impl ViewState {
    pub fn new(active: Location) -> Self {
        Self {
            active,
            ..Default::default()
        }
    }

    /// Id of the most recently started fetch
    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    /// Starts a fetch for `location`
    ///
    /// Highlights the location, enters the loading state and returns the id
    /// the completion must carry.
    pub fn begin_fetch(&mut self, location: Location) -> RequestId {
        self.latest_request = RequestId(self.latest_request.0 + 1);
        self.active = location;
        self.loading = true;
        self.latest_request
    }

    /// Applies the outcome of a fetch
    ///
    /// Completions for anything but the latest request are dropped. For the
    /// latest one the loading state is always released; success replaces the
    /// content, failure keeps it and raises the notice.
    pub fn complete_fetch(
        &mut self,
        request: RequestId,
        location: Location,
        result: Result<ForecastView, ForecastError>,
    ) -> Completion {
        if request != self.latest_request {
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(view) => {
                self.content = Some(view);
                self.shown_location = Some(location);
                Completion::Rendered
            }
            Err(_) => {
                self.notice = Some(Notice {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                });
                self.notices_raised += 1;
                Completion::Failed
            }
        }
    }

    /// Closes the error notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
