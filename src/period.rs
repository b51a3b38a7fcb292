//! Time-of-day labels
//!
//! Forecast windows are labelled with a coarse period of the day, prefixed
//! with "明天" when the window falls on another calendar day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Prefix for windows that are not on today's date
pub const TOMORROW_PREFIX: &str = "明天";

const WEEKDAYS: [&str; 7] = ["週日", "週一", "週二", "週三", "週四", "週五", "週六"];

/// Coarse part of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// 05:00 - 10:59
    Morning,
    /// 11:00 - 13:59
    Midday,
    /// 14:00 - 17:59
    Afternoon,
    /// 18:00 - 22:59
    Evening,
    /// 23:00 - 04:59
    LateNight,
}

impl DayPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Morning => "早晨",
            DayPeriod::Midday => "中午",
            DayPeriod::Afternoon => "下午",
            DayPeriod::Evening => "晚上",
            DayPeriod::LateNight => "深夜",
        }
    }
}

/// Classifies an hour of the day (0-23)
///
/// Hours outside 0-23 fall into [`DayPeriod::LateNight`].
pub fn classify_hour(hour: u32) -> DayPeriod {
    match hour {
        5..=10 => DayPeriod::Morning,
        11..=13 => DayPeriod::Midday,
        14..=17 => DayPeriod::Afternoon,
        18..=22 => DayPeriod::Evening,
        _ => DayPeriod::LateNight,
    }
}

/// Classifies a local timestamp by its hour
pub fn classify_period(start_time: &NaiveDateTime) -> DayPeriod {
    classify_hour(start_time.hour())
}

/// Label for an upcoming window, relative to `today`
///
/// Windows on any other calendar date than `today` get the tomorrow prefix.
/// The comparison uses the full date, so month and year boundaries behave.
pub fn period_label(start_time: &NaiveDateTime, today: NaiveDate) -> String {
    let label = classify_period(start_time).label();
    if start_time.date() != today {
        format!("{}{}", TOMORROW_PREFIX, label)
    } else {
        label.to_string()
    }
}

/// Header text for a date, e.g. "7月15日 週一"
pub fn format_date_header(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{}月{}日 {}", date.month(), date.day(), weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_classify_hour_covers_every_hour() {
        let expected = [
            (0..5, DayPeriod::LateNight),
            (5..11, DayPeriod::Morning),
            (11..14, DayPeriod::Midday),
            (14..18, DayPeriod::Afternoon),
            (18..23, DayPeriod::Evening),
            (23..24, DayPeriod::LateNight),
        ];
        let mut covered = 0;
        for (hours, period) in expected {
            for hour in hours {
                assert_eq!(classify_hour(hour), period, "hour {}", hour);
                covered += 1;
            }
        }
        assert_eq!(covered, 24);
    }

    #[test]
    fn test_classify_hour_boundaries() {
        assert_eq!(classify_hour(4), DayPeriod::LateNight);
        assert_eq!(classify_hour(5), DayPeriod::Morning);
        assert_eq!(classify_hour(10), DayPeriod::Morning);
        assert_eq!(classify_hour(11), DayPeriod::Midday);
        assert_eq!(classify_hour(14), DayPeriod::Afternoon);
        assert_eq!(classify_hour(18), DayPeriod::Evening);
        assert_eq!(classify_hour(22), DayPeriod::Evening);
        assert_eq!(classify_hour(23), DayPeriod::LateNight);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DayPeriod::Morning.label(), "早晨");
        assert_eq!(DayPeriod::Midday.label(), "中午");
        assert_eq!(DayPeriod::Afternoon.label(), "下午");
        assert_eq!(DayPeriod::Evening.label(), "晚上");
        assert_eq!(DayPeriod::LateNight.label(), "深夜");
    }

    #[test]
    fn test_period_label_today_has_no_prefix() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        assert_eq!(period_label(&at(today, 9), today), "早晨");
        assert_eq!(period_label(&at(today, 19), today), "晚上");
    }

    #[test]
    fn test_period_label_next_day_has_prefix() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 7, 16).unwrap();
        assert_eq!(period_label(&at(tomorrow, 0), today), "明天深夜");
        assert_eq!(period_label(&at(tomorrow, 6), today), "明天早晨");
    }

    #[test]
    fn test_period_label_same_day_of_month_in_other_month() {
        // Same day number, different month: still not today
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let next_month = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        assert_eq!(period_label(&at(next_month, 12), today), "明天中午");
    }

    #[test]
    fn test_period_label_across_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(period_label(&at(tomorrow, 15), today), "明天下午");
    }

    #[test]
    fn test_format_date_header() {
        // 2024-07-15 was a Monday
        let date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        assert_eq!(format_date_header(date), "7月15日 週一");

        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date_header(date), "12月1日 週日");
    }
}
