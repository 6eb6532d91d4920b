// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar arithmetic shared by every ring model.
//!
//! All three rings ultimately reduce a date to a fraction of its cycle,
//! and the annual ring needs exact day-of-year / days-in-year counts to do
//! so.  The functions here are pure, deterministic, and leap-year aware.
//!
//! Input validation is the caller's responsibility: `month` is expected in
//! [1, 12].  [`check_month_day`] and [`month_day_date`] are the
//! calendar-validity checks used by the event and zodiac layers.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Cumulative day counts at the start of each month for a non-leap year.
const MONTH_OFFSETS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap-year rule: divisible by 4 and (not by 100 or by 400).
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year`: 365, or 366 for leap years.
#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` of `year`.  February is leap-year aware.
///
/// `month` must be in [1, 12].
#[inline]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) { 29 } else { 28 }
        }
    }
}

/// 1-based ordinal day of the year (Jan 1 → 1, Dec 31 → 365/366).
pub fn day_of_year(date: NaiveDate) -> u32 {
    ordinal_of(date.year(), date.month(), date.day())
}

/// 1-based ordinal for a raw (year, month, day) triple.
///
/// `month` must be in [1, 12]; `day` is not range-checked.
pub fn ordinal_of(year: i32, month: u32, day: u32) -> u32 {
    let leap_shift = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    MONTH_OFFSETS[(month - 1) as usize] + leap_shift + day
}

/// Construct the calendar date `year`-`month`-`day`, or `None` if the
/// triple does not name a real day (Feb 30, Apr 31, ...).
pub fn month_day_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validate a yearless month/day pair against the calendar.
///
/// Checked against a leap year, so Feb 29 is accepted.
pub fn check_month_day(month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::MonthOutOfRange(month));
    }
    if day == 0 || day > days_in_month(2000, month) {
        return Err(Error::DayOutOfMonth { month, day });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_rule_centuries() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn february_is_leap_aware() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn jan_1_is_day_one() {
        for year in [1999, 2000, 2024, 2025] {
            let d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            assert_eq!(day_of_year(d), 1);
        }
    }

    #[test]
    fn dec_31_is_days_in_year() {
        for year in [1999, 2000, 2024, 2025] {
            let d = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
            assert_eq!(day_of_year(d), days_in_year(year));
        }
    }

    #[test]
    fn ordinal_matches_chrono_over_leap_and_common_years() {
        for year in [2023, 2024] {
            let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            while date.year() == year {
                assert_eq!(day_of_year(date), date.ordinal(), "{date}");
                date = date.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn june_21_2024_is_day_173() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(day_of_year(d), 173);
    }

    #[test]
    fn month_day_date_rejects_phantom_days() {
        assert!(month_day_date(2023, 2, 29).is_none());
        assert!(month_day_date(2024, 2, 29).is_some());
        assert!(month_day_date(2024, 4, 31).is_none());
        assert!(month_day_date(2024, 13, 1).is_none());
    }

    #[test]
    fn yearless_check_accepts_leap_day() {
        assert!(check_month_day(2, 29).is_ok());
        assert_eq!(
            check_month_day(2, 30).unwrap_err(),
            Error::DayOutOfMonth { month: 2, day: 30 }
        );
        assert_eq!(check_month_day(0, 1).unwrap_err(), Error::MonthOutOfRange(0));
        assert_eq!(
            check_month_day(4, 0).unwrap_err(),
            Error::DayOutOfMonth { month: 4, day: 0 }
        );
    }
}
