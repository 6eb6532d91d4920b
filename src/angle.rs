// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Cyclic-position ↔ ring-angle mapping.
//!
//! Every disc of the clock reduces to the same projection: a position in
//! [0, 1) along some temporal cycle (hour of day, lunar phase, day of year)
//! becomes an angle in [0, 360°).  Two rotation conventions coexist on the
//! same disc and must never be conflated:
//!
//! | Convention | Sign | Used for |
//! |------------|------|----------|
//! | [`RotationConvention::Now`] | +1 (clockwise) | disc rotation, solar/lunar anchors |
//! | [`RotationConvention::FixedEvent`] | −1 (counter-clockwise) | annual event and zodiac placement |
//!
//! Fixed annual placements run counter-clockwise so that, as the disc
//! rotates clockwise under them, future events approach the top marker from
//! one fixed side.  The convention is an explicit parameter of every
//! mapping function rather than a sign baked into call sites, and the
//! inverse mapping preserves the same sign asymmetry.
//!
//! # Local apparent time
//!
//! Location-local time is derived from longitude alone:
//! `offset_hours = longitude / 15` applied to the UTC instant.  This is a
//! deliberate longitude-proportional simplification, not time-zone-database
//! time.  [`local_solar_hours`] is the single source of that derivation —
//! ring rotation, sun-event anchoring, and displayed clock times all route
//! through it, so they can never disagree.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use qtty::Degrees;

/// Degrees of longitude per hour of apparent solar time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Which way an angle grows with forward time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationConvention {
    /// Clockwise-increasing: the rotation applied to a whole disc so that
    /// "now" sits at the fixed top marker.
    Now,
    /// Counter-clockwise-increasing: fixed placements (calendar events,
    /// zodiac boundaries) that the rotating disc carries past the marker.
    FixedEvent,
}

impl RotationConvention {
    /// The sign applied to a cyclic position before normalization.
    #[inline]
    pub const fn direction_sign(self) -> f64 {
        match self {
            Self::Now => 1.0,
            Self::FixedEvent => -1.0,
        }
    }
}

/// Normalize an angle in degrees into [0, 360).
#[inline]
pub fn normalize_degrees(angle: Degrees) -> Degrees {
    Degrees::new(angle.value().rem_euclid(360.0))
}

/// Normalize an hour count into [0, 24) by modulo wraparound.
#[inline]
pub fn normalize_hours(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}

/// Project a cyclic position in [0, 1) onto a ring angle in [0, 360°)
/// under the given rotation convention.
pub fn cyclic_to_angle(position: f64, convention: RotationConvention) -> Degrees {
    normalize_degrees(Degrees::new(position * 360.0 * convention.direction_sign()))
}

/// Recover the cyclic position in [0, 1) from a ring angle.
///
/// Exact inverse of [`cyclic_to_angle`]: round-trips any position in
/// [0, 1) to within 1e-9 for both conventions.
pub fn angle_to_cyclic(angle: Degrees, convention: RotationConvention) -> f64 {
    (angle.value() * convention.direction_sign()).rem_euclid(360.0) / 360.0
}

/// Fraction of the day in [0, 1) for a wall-clock reading.
///
/// Out-of-range hour values (negative, ≥ 24) wrap around.
pub fn hour_of_day_fraction(hours: f64, minutes: f64, seconds: f64) -> f64 {
    normalize_hours(hours + minutes / 60.0 + seconds / 3600.0) / 24.0
}

/// Local apparent time of `instant` at `longitude`, as decimal hours in
/// [0, 24).
pub fn local_solar_hours(instant: DateTime<Utc>, longitude: Degrees) -> f64 {
    let utc_hours = f64::from(instant.hour())
        + f64::from(instant.minute()) / 60.0
        + f64::from(instant.second()) / 3600.0;
    normalize_hours(utc_hours + longitude.value() / DEGREES_PER_HOUR)
}

/// Local apparent time of `instant` at `longitude` as a wall-clock time,
/// for display next to the rings.
///
/// Same derivation as [`local_solar_hours`], so a displayed time always
/// matches the angle the ring puts it at.
pub fn local_clock_time(instant: DateTime<Utc>, longitude: Degrees) -> NaiveTime {
    let seconds = (local_solar_hours(instant, longitude) * 3600.0).floor();
    // Guard the open upper bound: 23:59:59.999… floors to 86_399.
    let seconds = (seconds as u32).min(86_399);
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .expect("seconds < 86 400 by construction")
}
