// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Annual ring: the 365/366-day calendar disc.
//!
//! The disc rotates once per calendar year under the [`RotationConvention::Now`]
//! convention, while zodiac boundaries and calendar events are fixed onto
//! it under [`RotationConvention::FixedEvent`] — angles that *decrease*
//! with forward time, so future dates approach the top marker from one
//! fixed side as the disc turns.
//!
//! Zodiac data is static reference material: twelve signs, one of which
//! (Capricorn, Dec 22 – Jan 19) crosses the year boundary.  All wedge and
//! midpoint math handles that crossing explicitly.

use crate::angle::{cyclic_to_angle, RotationConvention};
use crate::date_math::{check_month_day, day_of_year, days_in_year, ordinal_of};
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use qtty::Degrees;

/// Classical element of a zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Display name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// One zodiac sign with its tropical date range and display attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacSign {
    /// Western sign name.
    pub name: &'static str,
    /// First month of the sign's range.
    pub start_month: u32,
    /// First day of the sign's range.
    pub start_day: u32,
    /// Last month of the sign's range (smaller than `start_month` for the
    /// year-crossing sign).
    pub end_month: u32,
    /// Last day of the sign's range, inclusive.
    pub end_day: u32,
    /// Classical element.
    pub element: Element,
    /// Symbolic display color.
    pub color: &'static str,
}

/// The twelve signs in ecliptic order, Aries first.
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { name: "Aries", start_month: 3, start_day: 21, end_month: 4, end_day: 19, element: Element::Fire, color: "#ef4444" },
    ZodiacSign { name: "Taurus", start_month: 4, start_day: 20, end_month: 5, end_day: 20, element: Element::Earth, color: "#4ade80" },
    ZodiacSign { name: "Gemini", start_month: 5, start_day: 21, end_month: 6, end_day: 20, element: Element::Air, color: "#fbbf24" },
    ZodiacSign { name: "Cancer", start_month: 6, start_day: 21, end_month: 7, end_day: 22, element: Element::Water, color: "#e0e7ff" },
    ZodiacSign { name: "Leo", start_month: 7, start_day: 23, end_month: 8, end_day: 22, element: Element::Fire, color: "#fb923c" },
    ZodiacSign { name: "Virgo", start_month: 8, start_day: 23, end_month: 9, end_day: 22, element: Element::Earth, color: "#a78bfa" },
    ZodiacSign { name: "Libra", start_month: 9, start_day: 23, end_month: 10, end_day: 22, element: Element::Air, color: "#f472b6" },
    ZodiacSign { name: "Scorpio", start_month: 10, start_day: 23, end_month: 11, end_day: 21, element: Element::Water, color: "#dc2626" },
    ZodiacSign { name: "Sagittarius", start_month: 11, start_day: 22, end_month: 12, end_day: 21, element: Element::Fire, color: "#a855f7" },
    ZodiacSign { name: "Capricorn", start_month: 12, start_day: 22, end_month: 1, end_day: 19, element: Element::Earth, color: "#94a3b8" },
    ZodiacSign { name: "Aquarius", start_month: 1, start_day: 20, end_month: 2, end_day: 18, element: Element::Air, color: "#22d3ee" },
    ZodiacSign { name: "Pisces", start_month: 2, start_day: 19, end_month: 3, end_day: 20, element: Element::Water, color: "#2dd4bf" },
];

impl ZodiacSign {
    /// Does this sign's range wrap across the year boundary?
    #[inline]
    pub const fn crosses_year_boundary(&self) -> bool {
        self.start_month > self.end_month
    }

    /// Is the given month/day inside this sign's range?
    pub fn contains(&self, month: u32, day: u32) -> bool {
        if self.start_month == self.end_month {
            month == self.start_month && day >= self.start_day && day <= self.end_day
        } else {
            // Two-month ranges, including the year-crossing sign: inside
            // the start month from start_day, or inside the end month up
            // to end_day.
            (month == self.start_month && day >= self.start_day)
                || (month == self.end_month && day <= self.end_day)
        }
    }
}

/// The zodiac sign containing the given month/day.
///
/// Linear scan over the twelve fixed signs; the year-crossing sign matches
/// on either side of the boundary.
///
/// # Errors
/// `Error::MonthOutOfRange` / `Error::DayOutOfMonth` for values that
/// name no real calendar day (Feb 29 is accepted).
pub fn zodiac_sign_for(month: u32, day: u32) -> Result<&'static ZodiacSign> {
    check_month_day(month, day)?;
    Ok(ZODIAC_SIGNS
        .iter()
        .find(|sign| sign.contains(month, day))
        .expect("the twelve signs cover every calendar day"))
}

/// Rotation of the annual disc so that today sits at the fixed top marker.
///
/// `(day_of_year / days_in_year) × 360°`, clockwise.
pub fn ring_rotation_angle(date: NaiveDate) -> Degrees {
    let fraction = f64::from(day_of_year(date)) / f64::from(days_in_year(date.year()));
    cyclic_to_angle(fraction, RotationConvention::Now)
}

/// Fixed disc position of a calendar date, counter-clockwise
/// ([`RotationConvention::FixedEvent`]), normalized to [0°, 360°).
///
/// In common years Feb 29 projects onto the Mar 1 position.
///
/// # Errors
/// `Error::MonthOutOfRange` / `Error::DayOutOfMonth` for values that
/// name no real calendar day.
pub fn event_angle(month: u32, day: u32, year: i32) -> Result<Degrees> {
    check_month_day(month, day)?;
    let fraction = f64::from(ordinal_of(year, month, day)) / f64::from(days_in_year(year));
    Ok(cyclic_to_angle(fraction, RotationConvention::FixedEvent))
}

/// Angular wedge of a zodiac sign on the annual disc.
///
/// The wedge starts at the sign's first day and extends `arc_degrees`
/// counter-clockwise (the direction of forward time under the fixed-event
/// convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    /// Disc angle of the sign's first day.
    pub start_angle: Degrees,
    /// Angular extent of the sign's date range.
    pub arc_degrees: Degrees,
}

/// Day count of the sign's range in `year`, inclusive of both endpoints.
///
/// The year-crossing sign counts days to the year's end plus days from the
/// year's start.
fn span_days(sign: &ZodiacSign, year: i32) -> u32 {
    let start = ordinal_of(year, sign.start_month, sign.start_day);
    let end = ordinal_of(year, sign.end_month, sign.end_day);
    if sign.crosses_year_boundary() {
        (days_in_year(year) - start + 1) + end
    } else {
        end - start + 1
    }
}

/// The hoverable wedge for one sign in one year.
pub fn sign_wedge(sign: &ZodiacSign, year: i32) -> Wedge {
    let start_angle = event_angle(sign.start_month, sign.start_day, year)
        .expect("static zodiac dates are valid");
    let arc = f64::from(span_days(sign, year)) / f64::from(days_in_year(year)) * 360.0;
    Wedge {
        start_angle,
        arc_degrees: Degrees::new(arc),
    }
}

/// Disc angle at the temporal midpoint of the sign's range, for glyph
/// placement.  The year-crossing sign wraps through the boundary so the
/// midpoint stays inside its wedge.
pub fn sign_midpoint_angle(sign: &ZodiacSign, year: i32) -> Degrees {
    let total = f64::from(days_in_year(year));
    let start = f64::from(ordinal_of(year, sign.start_month, sign.start_day));
    let mut mid = start + f64::from(span_days(sign, year)) / 2.0;
    if mid > total {
        mid -= total;
    }
    cyclic_to_angle(mid / total, RotationConvention::FixedEvent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_math::days_in_month;
    use crate::error::Error;

    fn sign(name: &str) -> &'static ZodiacSign {
        ZODIAC_SIGNS.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn twelve_signs_one_crossing() {
        assert_eq!(ZODIAC_SIGNS.len(), 12);
        let crossing: Vec<_> = ZODIAC_SIGNS
            .iter()
            .filter(|s| s.crosses_year_boundary())
            .collect();
        assert_eq!(crossing.len(), 1);
        assert_eq!(crossing[0].name, "Capricorn");
    }

    #[test]
    fn jan_1_is_capricorn() {
        assert_eq!(zodiac_sign_for(1, 1).unwrap().name, "Capricorn");
    }

    #[test]
    fn boundary_start_dates() {
        assert_eq!(zodiac_sign_for(3, 21).unwrap().name, "Aries");
        assert_eq!(zodiac_sign_for(12, 22).unwrap().name, "Capricorn");
        assert_eq!(zodiac_sign_for(1, 19).unwrap().name, "Capricorn");
        assert_eq!(zodiac_sign_for(1, 20).unwrap().name, "Aquarius");
        assert_eq!(zodiac_sign_for(12, 21).unwrap().name, "Sagittarius");
    }

    #[test]
    fn june_21_is_cancer() {
        assert_eq!(zodiac_sign_for(6, 21).unwrap().name, "Cancer");
    }

    #[test]
    fn every_calendar_day_has_a_sign() {
        for month in 1..=12 {
            for day in 1..=days_in_month(2024, month) {
                assert!(zodiac_sign_for(month, day).is_ok(), "{month}-{day}");
            }
        }
    }

    #[test]
    fn rejects_phantom_dates() {
        assert_eq!(
            zodiac_sign_for(13, 1).unwrap_err(),
            Error::MonthOutOfRange(13)
        );
        assert_eq!(
            zodiac_sign_for(2, 30).unwrap_err(),
            Error::DayOutOfMonth { month: 2, day: 30 }
        );
        assert!(zodiac_sign_for(2, 29).is_ok());
    }

    #[test]
    fn elements_partition_the_signs() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = ZODIAC_SIGNS.iter().filter(|s| s.element == element).count();
            assert_eq!(count, 3, "{}", element.name());
        }
    }

    #[test]
    fn rotation_for_midsummer_leap_year() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let expected = 173.0 / 366.0 * 360.0;
        assert!((ring_rotation_angle(date).value() - expected).abs() < 1e-9);
    }

    #[test]
    fn event_angle_is_counter_clockwise() {
        // Day 173 of 366 maps to minus the clockwise angle, normalized.
        let angle = event_angle(6, 21, 2024).unwrap();
        let expected = 360.0 - 173.0 / 366.0 * 360.0;
        assert!((angle.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn feb_29_projects_to_mar_1_in_common_years() {
        let leap = event_angle(2, 29, 2024).unwrap();
        let common = event_angle(2, 29, 2023).unwrap();
        let mar_1_common = event_angle(3, 1, 2023).unwrap();
        assert_eq!(common, mar_1_common);
        assert_ne!(leap, common);
    }

    #[test]
    fn wedges_tile_the_full_circle() {
        for year in [2023, 2024] {
            let total: f64 = ZODIAC_SIGNS
                .iter()
                .map(|s| sign_wedge(s, year).arc_degrees.value())
                .sum();
            assert!((total - 360.0).abs() < 1e-9, "year {year}: {total}");
        }
    }

    #[test]
    fn capricorn_wedge_spans_the_boundary() {
        let wedge = sign_wedge(sign("Capricorn"), 2024);
        // Dec 22 – Jan 19 is 10 + 19 = 29 days.
        let expected = 29.0 / 366.0 * 360.0;
        assert!((wedge.arc_degrees.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn midpoint_sits_halfway_into_the_wedge() {
        for name in ["Aries", "Leo", "Capricorn"] {
            let s = sign(name);
            let wedge = sign_wedge(s, 2024);
            let mid = sign_midpoint_angle(s, 2024);
            // Forward time decreases the angle, so the midpoint is half an
            // arc below the start, modulo the circle.
            let expected =
                (wedge.start_angle.value() - wedge.arc_degrees.value() / 2.0).rem_euclid(360.0);
            assert!(
                (mid.value() - expected).abs() < 1e-9,
                "{name}: mid={} expected={expected}",
                mid.value()
            );
        }
    }
}
