use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How often departure slots occur within a pattern
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    /// Mondays only
    Weekly,
    /// 1st of the month
    Monthly,
    /// Any day in January, April, July or October
    Quarterly,
    /// January 1st
    Yearly,
}

impl Frequency {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Frequency::Daily => true,
            Frequency::Weekly => date.weekday() == Weekday::Mon,
            Frequency::Monthly => date.day() == 1,
            Frequency::Quarterly => matches!(date.month(), 1 | 4 | 7 | 10),
            Frequency::Yearly => date.month() == 1 && date.day() == 1,
        }
    }
}

/// A month/day window that recurs every year. Windows may wrap the year
/// boundary (e.g. a winter season from November to February).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl SeasonWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let month = date.month();
        let day = date.day();

        let after_start = month > self.start_month
            || (month == self.start_month && day >= self.start_day);
        let before_end =
            month < self.end_month || (month == self.end_month && day <= self.end_day);

        if self.start_month <= self.end_month {
            after_start && before_end
        } else {
            // Season spans the year boundary
            after_start || before_end
        }
    }
}

/// Availability shape of a package's launch schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum PatternKind {
    /// Most dates open
    Regular,
    /// Scarce capacity year-round
    Limited,
    /// Only offered inside the seasonal window
    Seasonal { window: SeasonWindow },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityPattern {
    pub kind: PatternKind,
    pub frequency: Frequency,
}

impl AvailabilityPattern {
    /// Whether the pattern offers any departure on the given date,
    /// before capacity is considered.
    pub fn offers(&self, date: NaiveDate) -> bool {
        let in_season = match self.kind {
            PatternKind::Seasonal { window } => window.contains(date),
            _ => true,
        };
        in_season && self.frequency.matches(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_frequency_is_mondays() {
        assert!(Frequency::Weekly.matches(date(2026, 1, 5)));
        assert!(!Frequency::Weekly.matches(date(2026, 1, 6)));
    }

    #[test]
    fn test_quarterly_frequency() {
        assert!(Frequency::Quarterly.matches(date(2026, 4, 17)));
        assert!(!Frequency::Quarterly.matches(date(2026, 5, 1)));
    }

    #[test]
    fn test_season_window_same_year() {
        let summer = SeasonWindow {
            start_month: 6,
            start_day: 1,
            end_month: 8,
            end_day: 31,
        };
        assert!(summer.contains(date(2026, 7, 15)));
        assert!(!summer.contains(date(2026, 9, 1)));
    }

    #[test]
    fn test_season_window_wraps_year() {
        let winter = SeasonWindow {
            start_month: 11,
            start_day: 15,
            end_month: 2,
            end_day: 10,
        };
        assert!(winter.contains(date(2026, 12, 25)));
        assert!(winter.contains(date(2026, 1, 31)));
        assert!(!winter.contains(date(2026, 6, 1)));
    }

    #[test]
    fn test_pattern_kind_deserialization() {
        let json = r#"
            {
                "kind": "SEASONAL",
                "window": { "start_month": 6, "start_day": 1, "end_month": 8, "end_day": 31 }
            }
        "#;
        let kind: PatternKind = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(matches!(kind, PatternKind::Seasonal { window } if window.start_month == 6));
    }

    #[test]
    fn test_seasonal_pattern_filters_out_of_season() {
        let pattern = AvailabilityPattern {
            kind: PatternKind::Seasonal {
                window: SeasonWindow {
                    start_month: 6,
                    start_day: 1,
                    end_month: 8,
                    end_day: 31,
                },
            },
            frequency: Frequency::Daily,
        };
        assert!(pattern.offers(date(2026, 6, 10)));
        assert!(!pattern.offers(date(2026, 3, 10)));
    }
}
