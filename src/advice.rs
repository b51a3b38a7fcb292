//! Umbrella and clothing advice
//!
//! Turns the rain chance and the day's high into two short recommendations
//! shown on the hero panel.

use crate::data::{ForecastError, Measure};

/// Rain chance (percent) above which an umbrella is recommended
pub const UMBRELLA_THRESHOLD: i64 = 30;
/// Highest temperature at or above which short sleeves are recommended
pub const SHORT_SLEEVE_THRESHOLD: i64 = 28;
/// Highest temperature at or below which a jacket is recommended
pub const JACKET_THRESHOLD: i64 = 20;

/// Whether to take an umbrella
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UmbrellaAdvice {
    BringUmbrella,
    NoUmbrella,
}

impl UmbrellaAdvice {
    pub fn icon(&self) -> &'static str {
        match self {
            UmbrellaAdvice::BringUmbrella => "☂️",
            UmbrellaAdvice::NoUmbrella => "🌂",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            UmbrellaAdvice::BringUmbrella => "記得帶傘！",
            UmbrellaAdvice::NoUmbrella => "不用帶傘",
        }
    }
}

/// What to wear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClothingAdvice {
    ShortSleeves,
    Comfortable,
    Jacket,
}

impl ClothingAdvice {
    pub fn icon(&self) -> &'static str {
        match self {
            ClothingAdvice::ShortSleeves => "🎽",
            ClothingAdvice::Comfortable => "👕",
            ClothingAdvice::Jacket => "🧥",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ClothingAdvice::ShortSleeves => "短袖出發",
            ClothingAdvice::Comfortable => "舒適穿搭",
            ClothingAdvice::Jacket => "加件外套",
        }
    }
}

/// Combined advice for one forecast period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub umbrella: UmbrellaAdvice,
    pub clothing: ClothingAdvice,
}

impl Advice {
    /// Derives advice from raw API readings
    ///
    /// # Returns
    /// * `Ok(Advice)` - When both readings start with an integer
    /// * `Err(ForecastError::InvalidNumber)` - When either reading is not numeric
    pub fn from_readings(rain: &Measure, max_temp: &Measure) -> Result<Self, ForecastError> {
        Ok(derive_advice(rain.value("rain")?, max_temp.value("maxTemp")?))
    }

    pub fn rain_icon(&self) -> &'static str {
        self.umbrella.icon()
    }

    pub fn rain_text(&self) -> &'static str {
        self.umbrella.text()
    }

    pub fn cloth_icon(&self) -> &'static str {
        self.clothing.icon()
    }

    pub fn cloth_text(&self) -> &'static str {
        self.clothing.text()
    }
}

/// Derives umbrella and clothing advice
///
/// Umbrella: strictly more than 30% rain. Clothing: 28°C and up is short
/// sleeves, 20°C and below is a jacket, anything between is comfortable.
pub fn derive_advice(rain_probability: i64, max_temperature: i64) -> Advice {
    let umbrella = if rain_probability > UMBRELLA_THRESHOLD {
        UmbrellaAdvice::BringUmbrella
    } else {
        UmbrellaAdvice::NoUmbrella
    };

    let clothing = if max_temperature >= SHORT_SLEEVE_THRESHOLD {
        ClothingAdvice::ShortSleeves
    } else if max_temperature <= JACKET_THRESHOLD {
        ClothingAdvice::Jacket
    } else {
        ClothingAdvice::Comfortable
    };

    Advice { umbrella, clothing }
}

/// Parses the leading integer of a string
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so "45%" is 45 and "28.7" is 28. Returns `None` when no
/// digit follows, and for values that overflow `i64`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
