//! Forecast view construction
//!
//! Derives everything the dashboard shows from a forecast payload: the hero
//! panel for the current window and one card per upcoming window. Drawing the
//! view lives in `ui::dashboard`; this module stays free of terminal types so
//! it can be tested directly.

use chrono::NaiveDate;

use crate::advice::Advice;
use crate::data::{ForecastData, ForecastError, ForecastPeriod};
use crate::icon::map_weather_icon;
use crate::period::{classify_period, period_label};

/// Current conditions panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPanel {
    pub period: String,
    pub icon: &'static str,
    /// Rounded mean of the high and the low, in Celsius
    pub average_temp: i64,
    /// Condition text as received
    pub description: String,
    pub advice: Advice,
    /// Rain chance as received
    pub rain: String,
    /// Highest temperature as received
    pub max_temp: String,
}

impl HeroPanel {
    pub fn temperature_text(&self) -> String {
        format!("{}°", self.average_temp)
    }

    pub fn rain_percent_text(&self) -> String {
        format!("降雨率 {}", self.rain)
    }

    pub fn max_temp_text(&self) -> String {
        format!("最高溫 {}°", self.max_temp)
    }
}

/// One entry of the upcoming list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingCard {
    pub label: String,
    pub icon: &'static str,
    pub min_temp: String,
    pub max_temp: String,
    pub rain: String,
}

impl UpcomingCard {
    pub fn temperature_range(&self) -> String {
        format!("{}° - {}°", self.min_temp, self.max_temp)
    }

    pub fn rain_text(&self) -> String {
        format!("💧{}", self.rain)
    }
}

/// Everything shown for one fetched forecast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastView {
    pub hero: HeroPanel,
    pub upcoming: Vec<UpcomingCard>,
}

/// Rounded mean of two temperatures, halves rounding up
///
/// The sum is taken in `i128`; the mean of two `i64` values always fits back.
pub fn average_temperature(max_temp: i64, min_temp: i64) -> i64 {
    (i128::from(max_temp) + i128::from(min_temp) + 1).div_euclid(2) as i64
}

/// Builds the view for a forecast payload
///
/// # Arguments
/// * `data` - The payload of a successful response
/// * `today` - Local date used to decide the tomorrow prefix
///
/// # Returns
/// * `Ok(ForecastView)` - The hero panel and upcoming cards in input order
/// * `Err(ForecastError::EmptyForecast)` - If there are no forecast windows
/// * `Err(ForecastError::InvalidNumber)` - If a reading of the current window is not numeric
pub fn build_view(data: &ForecastData, today: NaiveDate) -> Result<ForecastView, ForecastError> {
    let (current, upcoming) = data
        .forecasts
        .split_first()
        .ok_or(ForecastError::EmptyForecast)?;

    let hero = build_hero(current)?;
    let upcoming = upcoming
        .iter()
        .map(|period| build_card(period, today))
        .collect();

    Ok(ForecastView { hero, upcoming })
}

fn build_hero(current: &ForecastPeriod) -> Result<HeroPanel, ForecastError> {
    let advice = Advice::from_readings(&current.rain, &current.max_temp)?;
    let max_temp = current.max_temp.value("maxTemp")?;
    let min_temp = current.min_temp.value("minTemp")?;

    Ok(HeroPanel {
        period: classify_period(&current.start_time).label().to_string(),
        icon: map_weather_icon(current.weather.as_deref()),
        average_temp: average_temperature(max_temp, min_temp),
        description: current.weather.clone().unwrap_or_default(),
        advice,
        rain: current.rain.to_string(),
        max_temp: current.max_temp.to_string(),
    })
}

fn build_card(period: &ForecastPeriod, today: NaiveDate) -> UpcomingCard {
    UpcomingCard {
        label: period_label(&period.start_time, today),
        icon: map_weather_icon(period.weather.as_deref()),
        min_temp: period.min_temp.to_string(),
        max_temp: period.max_temp.to_string(),
        rain: period.rain.to_string(),
    }
}
