// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar ring: the 24-hour day/night disc.
//!
//! The disc rotates once per local apparent day.  Sun events (dawn,
//! sunrise, noon, sunset, dusk, ...) are supplied by an external
//! astronomical library as UTC instants; this module projects them to
//! **fixed positions on the rotating disc** — they are anchored by their
//! own local time, not re-derived from "now", and rotate together with the
//! disc.
//!
//! Every event instant is optional: at extreme latitudes the astronomical
//! source legitimately omits events (continuous polar day or night), and
//! the gradient degrades by skipping the absent anchors rather than
//! failing.

use crate::angle::{cyclic_to_angle, local_solar_hours, RotationConvention};
use crate::location::GeoLocation;
use chrono::{DateTime, Duration, Utc};
use qtty::Degrees;

/// Named sun-event instants for one date and location, as obtained from
/// the external astronomical service.  All fields are UTC; all are
/// optional because high-latitude dates can lack any of them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SunEventSet {
    /// Morning civil twilight starts.
    pub dawn: Option<DateTime<Utc>>,
    /// Top of the sun touches the horizon.
    pub sunrise: Option<DateTime<Utc>>,
    /// Sun crosses the meridian.
    pub solar_noon: Option<DateTime<Utc>>,
    /// Sun disappears below the horizon.
    pub sunset: Option<DateTime<Utc>>,
    /// Evening civil twilight ends.
    pub dusk: Option<DateTime<Utc>>,
    /// Astronomical night starts.
    pub night: Option<DateTime<Utc>>,
    /// Astronomical night ends.
    pub night_end: Option<DateTime<Utc>>,
    /// Morning nautical twilight starts.
    pub nautical_dawn: Option<DateTime<Utc>>,
    /// Evening nautical twilight ends.
    pub nautical_dusk: Option<DateTime<Utc>>,
}

impl SunEventSet {
    /// Length of the day (sunrise to sunset), when both events occur.
    pub fn day_length(&self) -> Option<Duration> {
        match (self.sunrise, self.sunset) {
            (Some(rise), Some(set)) => Some(set - rise),
            _ => None,
        }
    }
}

/// Rotation of the solar disc so that "now" sits at the fixed top marker.
///
/// Local-apparent hour fraction × 360°, clockwise ([`RotationConvention::Now`]).
pub fn ring_rotation_angle(instant: DateTime<Utc>, location: &GeoLocation) -> Degrees {
    let fraction = local_solar_hours(instant, location.longitude()) / 24.0;
    cyclic_to_angle(fraction, RotationConvention::Now)
}

/// Fixed disc position of one sun event: the same hour-fraction mapping
/// applied to the event's own local time.
pub fn event_angle(event: DateTime<Utc>, location: &GeoLocation) -> Degrees {
    ring_rotation_angle(event, location)
}

/// One stop of the day/night conic gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position of the stop on the disc, in [0°, 360°].
    pub angle: Degrees,
    /// CSS hex color at this stop.
    pub color: &'static str,
}

/// Phase of the civil day, classified against the sun-event boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Night,
    Dawn,
    Morning,
    Afternoon,
    Dusk,
}

impl DayPeriod {
    /// Human-readable label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::Dawn => "Dawn",
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Dusk => "Dusk",
        }
    }
}

/// Classify `instant` against the day's sun events.
///
/// Returns `None` when any of the five boundary events is missing
/// (continuous polar day or night) — there is no meaningful boundary to
/// classify against.
pub fn period_of_day(instant: DateTime<Utc>, events: &SunEventSet) -> Option<DayPeriod> {
    let dawn = events.dawn?;
    let sunrise = events.sunrise?;
    let noon = events.solar_noon?;
    let sunset = events.sunset?;
    let dusk = events.dusk?;

    Some(if instant < dawn {
        DayPeriod::Night
    } else if instant < sunrise {
        DayPeriod::Dawn
    } else if instant < noon {
        DayPeriod::Morning
    } else if instant < sunset {
        DayPeriod::Afternoon
    } else if instant < dusk {
        DayPeriod::Dusk
    } else {
        DayPeriod::Night
    })
}

// Anchor palette of the day/night ramp.
const MIDNIGHT: &str = "#0a0e27";
const LATE_NIGHT: &str = "#1a1f3a";
const DAWN: &str = "#4a4a7d";
const PRE_SUNRISE: &str = "#e85d75";
const SUNRISE: &str = "#ff9966";
const MID_DAY: &str = "#ffd966";
const NOON: &str = "#fffacd";
const SUNSET: &str = "#ff7f50";
const DUSK: &str = "#6b5b95";
const EARLY_NIGHT: &str = "#2a2f4a";
// Interpolated fill between the last night anchor and midnight.
const NIGHT_FILL: [&str; 4] = ["#141d2e", "#111825", "#0e141f", "#0b1019"];

/// Build the closed day/night color ramp for one date and location.
///
/// The ramp runs through the anchor colors at each present sun event, with
/// interpolated midpoints between consecutive anchors for smoothing, plus
/// fixed midnight endpoints.  Stops are returned sorted by angle, starting
/// at 0° and ending at 360° with matching colors, so the loop always
/// closes even when events are absent or out of their usual order (polar
/// edge cases).
pub fn color_gradient_stops(events: &SunEventSet, location: &GeoLocation) -> Vec<ColorStop> {
    let angle_of = |e: Option<DateTime<Utc>>| e.map(|t| event_angle(t, location).value());

    let night_end = angle_of(events.night_end);
    let dawn = angle_of(events.dawn);
    let sunrise = angle_of(events.sunrise);
    let noon = angle_of(events.solar_noon);
    let sunset = angle_of(events.sunset);
    let dusk = angle_of(events.dusk);
    let night = angle_of(events.night);

    let mut stops: Vec<(f64, &'static str)> = vec![(0.0, MIDNIGHT)];

    let mut push = |angle: Option<f64>, color: &'static str| {
        if let Some(a) = angle {
            stops.push((a, color));
        }
    };
    let midpoint = |a: Option<f64>, b: Option<f64>| match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * 0.5),
        _ => None,
    };

    push(night_end, LATE_NIGHT);
    push(dawn, DAWN);
    push(midpoint(dawn, sunrise), PRE_SUNRISE);
    push(sunrise, SUNRISE);
    push(midpoint(sunrise, noon), MID_DAY);
    push(noon, NOON);
    push(midpoint(noon, sunset), MID_DAY);
    push(sunset, SUNSET);
    push(dusk, DUSK);
    push(midpoint(dusk, night), EARLY_NIGHT);
    push(night, LATE_NIGHT);

    if let Some(n) = night {
        for (i, color) in NIGHT_FILL.iter().enumerate() {
            let f = 0.2 * (i + 1) as f64;
            stops.push((n + (360.0 - n) * f, color));
        }
    }
    stops.push((360.0, MIDNIGHT));

    stops.sort_by(|a, b| a.0.total_cmp(&b.0));
    stops
        .into_iter()
        .map(|(angle, color)| ColorStop {
            angle: Degrees::new(angle),
            color,
        })
        .collect()
}
