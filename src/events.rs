// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar events and their projection onto the annual ring.
//!
//! Events are user-owned records consumed read-only: a single calendar day
//! or an inclusive day range, which may wrap across the year boundary
//! (Dec 20 – Jan 5 is a range, not an error).  The span is a tagged
//! variant, so multi-day handling is exhaustive rather than a null check
//! on optional end fields.
//!
//! Projection uses the counter-clockwise fixed-event convention of the
//! annual ring: angles decrease with forward time, and a range's arc is
//! `start − end` normalized positive.

use crate::angle::normalize_degrees;
use crate::annual;
use crate::date_math::check_month_day;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EventKind {
    /// User-defined date (birthday, anniversary, ...).
    #[default]
    Personal,
    /// Solstice, equinox, or other fixed celestial date.
    Celestial,
    /// Meteor-shower peak.
    MeteorShower,
    /// Solar eclipse.
    SolarEclipse,
    /// Lunar eclipse.
    LunarEclipse,
}

/// The date coverage of an event: one day, or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EventSpan {
    /// A range of days; `end_*` chronologically before `month`/`day`
    /// signals a year-wrapping range.
    MultiDay {
        month: u32,
        day: u32,
        end_month: u32,
        end_day: u32,
    },
    /// A single calendar day.
    SingleDay { month: u32, day: u32 },
}

/// A user or reference calendar event, projected yearly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnualEvent {
    /// Unique identifier (owned by the external event store).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Date coverage.
    pub span: EventSpan,
    /// Marker color.
    pub color: String,
    /// Category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: EventKind,
}

impl AnnualEvent {
    /// Create a single-day event.
    ///
    /// # Errors
    /// `Error::MonthOutOfRange` / `Error::DayOutOfMonth` for a pair
    /// that names no real calendar day.
    pub fn single_day(
        id: impl Into<String>,
        name: impl Into<String>,
        month: u32,
        day: u32,
        color: impl Into<String>,
        kind: EventKind,
    ) -> Result<Self> {
        check_month_day(month, day)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            span: EventSpan::SingleDay { month, day },
            color: color.into(),
            kind,
        })
    }

    /// Create a multi-day event.  An end date chronologically before the
    /// start date signals a year-wrapping range, not an error.
    ///
    /// # Errors
    /// `Error::MonthOutOfRange` / `Error::DayOutOfMonth` when either
    /// endpoint names no real calendar day.
    #[allow(clippy::too_many_arguments)]
    pub fn multi_day(
        id: impl Into<String>,
        name: impl Into<String>,
        month: u32,
        day: u32,
        end_month: u32,
        end_day: u32,
        color: impl Into<String>,
        kind: EventKind,
    ) -> Result<Self> {
        check_month_day(month, day)?;
        check_month_day(end_month, end_day)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            span: EventSpan::MultiDay {
                month,
                day,
                end_month,
                end_day,
            },
            color: color.into(),
            kind,
        })
    }

    /// Does this event cover more than one day?
    #[inline]
    pub const fn is_multi_day(&self) -> bool {
        matches!(self.span, EventSpan::MultiDay { .. })
    }

    /// Is the event active on `today`?
    ///
    /// Single-day events match on exact month/day.  Multi-day events are
    /// inclusive ranges; a year-wrapping range (end before start) is
    /// active when `today` is on or after the start **or** on or before
    /// the end.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        let today_md = (today.month(), today.day());
        match self.span {
            EventSpan::SingleDay { month, day } => today_md == (month, day),
            EventSpan::MultiDay {
                month,
                day,
                end_month,
                end_day,
            } => {
                let start = (month, day);
                let end = (end_month, end_day);
                if end < start {
                    today_md >= start || today_md <= end
                } else {
                    today_md >= start && today_md <= end
                }
            }
        }
    }
}

/// Angular extent of one event on the annual disc of a given year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventArc {
    /// Disc angle of the event's first day.
    pub start_angle: Degrees,
    /// Disc angle of the event's last day (equal to `start_angle` for
    /// single-day events).
    pub end_angle: Degrees,
    /// Arc from start to end in the direction of forward time, ≥ 0.
    pub arc_degrees: Degrees,
    /// Whether the range wraps across the year boundary.
    pub crosses_year_boundary: bool,
}

/// Project an event onto the annual disc of `year`.
///
/// Angles decrease with forward time under the fixed-event convention, so
/// the arc is `start − end`, normalized positive by adding 360° when the
/// range wraps.
pub fn arc_span(event: &AnnualEvent, year: i32) -> EventArc {
    let angle_of = |month, day| {
        annual::event_angle(month, day, year).expect("event dates are validated at construction")
    };
    match event.span {
        EventSpan::SingleDay { month, day } => {
            let angle = angle_of(month, day);
            EventArc {
                start_angle: angle,
                end_angle: angle,
                arc_degrees: Degrees::new(0.0),
                crosses_year_boundary: false,
            }
        }
        EventSpan::MultiDay {
            month,
            day,
            end_month,
            end_day,
        } => {
            let start_angle = angle_of(month, day);
            let end_angle = angle_of(end_month, end_day);
            let mut arc = start_angle.value() - end_angle.value();
            if arc < 0.0 {
                arc += 360.0;
            }
            EventArc {
                start_angle,
                end_angle,
                arc_degrees: Degrees::new(arc),
                crosses_year_boundary: (end_month, end_day) < (month, day),
            }
        }
    }
}

/// How to rotate a radial label so it stays readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOrientation {
    /// Rotation to apply to the label, in (−90°, 90°].
    pub rotation: Degrees,
    /// When set, the label would have rendered upside-down: it has been
    /// rotated by −180° and the caller must anchor it on the opposite
    /// side of its marker.
    pub needs_flip: bool,
}

/// Orientation for a radially attached label at `angle`.
///
/// Angles in (90°, 270°) would render the text upside-down, so the label
/// is flipped by subtracting 180° and anchored on the far side.
pub fn radial_label_rotation(angle: Degrees) -> LabelOrientation {
    let normalized = normalize_degrees(angle).value();
    let needs_flip = normalized > 90.0 && normalized < 270.0;
    let rotation = if needs_flip {
        normalized - 180.0
    } else {
        normalized
    };
    LabelOrientation {
        rotation: Degrees::new(rotation),
        needs_flip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn yule_festival() -> AnnualEvent {
        AnnualEvent::multi_day("yule", "Yule Festival", 12, 20, 1, 5, "#60a5fa", EventKind::Personal)
            .unwrap()
    }

    #[test]
    fn constructors_validate_dates() {
        assert!(AnnualEvent::single_day("a", "A", 2, 29, "#fff", EventKind::Personal).is_ok());
        assert_eq!(
            AnnualEvent::single_day("a", "A", 2, 30, "#fff", EventKind::Personal).unwrap_err(),
            Error::DayOutOfMonth { month: 2, day: 30 }
        );
        assert_eq!(
            AnnualEvent::multi_day("a", "A", 1, 1, 13, 1, "#fff", EventKind::Personal).unwrap_err(),
            Error::MonthOutOfRange(13)
        );
    }

    #[test]
    fn wrapping_range_is_not_an_error() {
        let event = yule_festival();
        assert!(event.is_multi_day());
    }

    #[test]
    fn single_day_matches_exactly() {
        let event =
            AnnualEvent::single_day("bday", "Birthday", 6, 15, "#f472b6", EventKind::Personal)
                .unwrap();
        assert!(!event.is_multi_day());
        assert!(event.is_active_on(date(2024, 6, 15)));
        assert!(!event.is_active_on(date(2024, 6, 14)));
        assert!(!event.is_active_on(date(2024, 7, 15)));
    }

    #[test]
    fn wrapping_range_activity() {
        let event = yule_festival();
        assert!(event.is_active_on(date(2024, 12, 25)));
        assert!(event.is_active_on(date(2025, 1, 2)));
        assert!(event.is_active_on(date(2024, 12, 20)));
        assert!(event.is_active_on(date(2025, 1, 5)));
        assert!(!event.is_active_on(date(2024, 6, 15)));
        assert!(!event.is_active_on(date(2025, 1, 6)));
        assert!(!event.is_active_on(date(2024, 12, 19)));
    }

    #[test]
    fn plain_range_activity_is_inclusive() {
        let event =
            AnnualEvent::multi_day("p", "Perseids", 7, 17, 8, 24, "#a855f7", EventKind::MeteorShower)
                .unwrap();
        assert!(event.is_active_on(date(2024, 7, 17)));
        assert!(event.is_active_on(date(2024, 8, 1)));
        assert!(event.is_active_on(date(2024, 8, 24)));
        assert!(!event.is_active_on(date(2024, 8, 25)));
        assert!(!event.is_active_on(date(2024, 7, 16)));
    }

    #[test]
    fn single_day_arc_is_a_point() {
        let event =
            AnnualEvent::single_day("s", "Solstice", 6, 20, "#fbbf24", EventKind::Celestial)
                .unwrap();
        let arc = arc_span(&event, 2024);
        assert_eq!(arc.start_angle, arc.end_angle);
        assert_eq!(arc.arc_degrees.value(), 0.0);
        assert!(!arc.crosses_year_boundary);
    }

    #[test]
    fn plain_range_arc_matches_day_count() {
        let event =
            AnnualEvent::multi_day("p", "Perseids", 7, 17, 8, 24, "#a855f7", EventKind::MeteorShower)
                .unwrap();
        let arc = arc_span(&event, 2024);
        // Jul 17 is day 199, Aug 24 is day 237: 38 days of 366.
        let expected = 38.0 / 366.0 * 360.0;
        assert!((arc.arc_degrees.value() - expected).abs() < 1e-9);
        assert!(!arc.crosses_year_boundary);
    }

    #[test]
    fn wrapping_arc_is_normalized_positive() {
        let arc = arc_span(&yule_festival(), 2024);
        // Dec 20 is day 355 of 366; Jan 5 is day 5: 16 days across the wrap.
        let expected = 16.0 / 366.0 * 360.0;
        assert!((arc.arc_degrees.value() - expected).abs() < 1e-9);
        assert!(arc.crosses_year_boundary);
    }

    #[test]
    fn labels_flip_only_on_the_lower_half() {
        let upright = radial_label_rotation(Degrees::new(45.0));
        assert!(!upright.needs_flip);
        assert_eq!(upright.rotation.value(), 45.0);

        let flipped = radial_label_rotation(Degrees::new(180.0));
        assert!(flipped.needs_flip);
        assert_eq!(flipped.rotation.value(), 0.0);

        let flipped = radial_label_rotation(Degrees::new(200.0));
        assert!(flipped.needs_flip);
        assert_eq!(flipped.rotation.value(), 20.0);
    }

    #[test]
    fn label_flip_bounds_are_exclusive() {
        assert!(!radial_label_rotation(Degrees::new(90.0)).needs_flip);
        assert!(!radial_label_rotation(Degrees::new(270.0)).needs_flip);
        assert!(radial_label_rotation(Degrees::new(90.1)).needs_flip);
        assert!(radial_label_rotation(Degrees::new(269.9)).needs_flip);
    }

    #[test]
    fn label_rotation_normalizes_input() {
        let wrapped = radial_label_rotation(Degrees::new(405.0));
        assert!(!wrapped.needs_flip);
        assert_eq!(wrapped.rotation.value(), 45.0);

        let negative = radial_label_rotation(Degrees::new(-160.0));
        assert!(negative.needs_flip);
        assert_eq!(negative.rotation.value(), 20.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_and_kind_default() {
        let event = yule_festival();
        let json = serde_json::to_string(&event).unwrap();
        let back: AnnualEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);

        // Kind defaults to Personal when omitted, matching stored
        // records that predate the field.
        let legacy = r##"{"id":"x","name":"X","span":{"month":6,"day":15},"color":"#fff"}"##;
        let parsed: AnnualEvent = serde_json::from_str(legacy).unwrap();
        assert_eq!(parsed.kind, EventKind::Personal);

        // Eclipse kinds use the kebab-case wire names.
        assert_eq!(
            serde_json::to_string(&EventKind::SolarEclipse).unwrap(),
            "\"solar-eclipse\""
        );
    }
}
