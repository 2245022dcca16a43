//! Reference-timezone date helpers.
//!
//! Every today/past/future determination uses a fixed UTC+5:30 offset rather
//! than the execution environment's local zone, so a streak computed on a
//! laptop in one country matches the one computed on a phone in another.
//! Callers thread an explicit `now` instant through; nothing in this module
//! reads the wall clock.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};

/// Fixed reference offset, UTC+5:30, in seconds.
pub const REF_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The reference timezone offset.
pub fn ref_offset() -> FixedOffset {
    FixedOffset::east_opt(REF_OFFSET_SECS).unwrap()
}

/// The calendar day of `now` in the reference timezone.
pub fn ref_day(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&ref_offset()).date_naive()
}

/// Canonical `YYYY-MM-DD` form of a date.
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a canonical `YYYY-MM-DD` string; `None` for malformed input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Whether a stored date string is today in the reference timezone.
///
/// Canonical strings compare as dates compare, so this stays a plain string
/// comparison; malformed input never matches.
pub fn is_today(date: &str, now: DateTime<Utc>) -> bool {
    !date.is_empty() && date == date_string(ref_day(now))
}

/// Whether a stored date string is strictly after today.
pub fn is_future(date: &str, now: DateTime<Utc>) -> bool {
    !date.is_empty() && date > date_string(ref_day(now)).as_str()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Every day from `start` through `end` inclusive; empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

// ============================================
// Month cursor
// ============================================

/// A calendar month used as the navigation cursor for consistency and
/// momentum views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRef {
    /// Calendar year
    pub year: i32,
    /// Month 1-12
    pub month: u32,
}

impl MonthRef {
    /// Month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month containing `now` in the reference timezone.
    pub fn current(now: DateTime<Utc>) -> Self {
        Self::from_date(ref_day(now))
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap()
    }

    /// The following month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        days_inclusive(self.first_day(), self.last_day())
    }

    /// Whether this month lies strictly after the month containing `now`.
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        let current = Self::current(now);
        (self.year, self.month) > (current.year, current.month)
    }

    /// Display name, e.g. "March 2024".
    pub fn display_name(&self) -> String {
        format!("{} {}", crate::format::month_name(self.month), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ref_day_crosses_midnight_before_utc() {
        // 19:00 UTC is already 00:30 the next day at +05:30
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 19, 0, 0).unwrap();
        assert_eq!(ref_day(now), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());

        let earlier = Utc.with_ymd_and_hms(2024, 1, 2, 18, 0, 0).unwrap();
        assert_eq!(ref_day(earlier), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_is_today_and_future() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        assert!(is_today("2024-01-02", now));
        assert!(!is_today("2024-01-01", now));
        assert!(is_future("2024-01-03", now));
        assert!(!is_future("2024-01-02", now));
        assert!(!is_today("", now));
        assert!(!is_future("not-a-date", now));
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-05-15 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(week_start(wed), NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
        // Monday maps to itself
        let mon = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        assert_eq!(week_start(mon), mon);
        // Sunday belongs to the preceding Monday's week
        let sun = NaiveDate::from_ymd_opt(2024, 5, 19).unwrap();
        assert_eq!(week_start(sun), mon);
    }

    #[test]
    fn test_days_inclusive_empty_when_reversed() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert!(days_inclusive(a, b).is_empty());
        assert_eq!(days_inclusive(b, a).len(), 3);
    }

    #[test]
    fn test_month_ref_boundaries() {
        let feb = MonthRef {
            year: 2024,
            month: 2,
        };
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(feb.days().len(), 29);

        let dec = MonthRef {
            year: 2024,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            MonthRef {
                year: 2025,
                month: 1
            }
        );
        let jan = MonthRef {
            year: 2024,
            month: 1,
        };
        assert_eq!(
            jan.previous(),
            MonthRef {
                year: 2023,
                month: 12
            }
        );
    }

    #[test]
    fn test_month_ref_is_future() {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap();
        let month = |year, month| MonthRef { year, month };
        assert!(month(2024, 6).is_future(now));
        assert!(!month(2024, 5).is_future(now));
        assert!(!month(2023, 12).is_future(now));
    }
}
