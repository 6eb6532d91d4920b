// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar ring: the ~29.53-day phase disc.
//!
//! Mathematically identical to the solar ring but driven by the synodic
//! phase fraction instead of the hour of day: the disc rotates clockwise
//! by `phase × 360°`, carrying four fixed quarter anchors.
//!
//! # Quarter-anchor convention
//!
//! Two mirrored anchor layouts are possible; this crate uses
//!
//! | Anchor | Angle |
//! |--------|-------|
//! | New Moon | 0° |
//! | First Quarter | 90° |
//! | Full Moon | 180° |
//! | Last Quarter | 270° |
//!
//! i.e. anchors laid out under [`RotationConvention::Now`].  First and
//! Last Quarter are angular mirror images, 90° from New/Full on opposite
//! sides.  [`phase_at_click`] inverts the same convention, so the two can
//! never drift apart.

use crate::angle::{angle_to_cyclic, cyclic_to_angle, RotationConvention};
use crate::date_math::days_in_month;
use crate::error::{Error, Result};
use crate::location::GeoLocation;
use crate::solar::ColorStop;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use qtty::Degrees;

/// Fixed disc angle of the New Moon anchor.
pub const NEW_MOON_ANGLE: Degrees = Degrees::new(0.0);
/// Fixed disc angle of the First Quarter anchor.
pub const FIRST_QUARTER_ANGLE: Degrees = Degrees::new(90.0);
/// Fixed disc angle of the Full Moon anchor.
pub const FULL_MOON_ANGLE: Degrees = Degrees::new(180.0);
/// Fixed disc angle of the Last Quarter anchor.
pub const LAST_QUARTER_ANGLE: Degrees = Degrees::new(270.0);

/// Phase fraction band treated as "at full moon" by the blue-moon scan.
const FULL_MOON_BAND: std::ops::RangeInclusive<f64> = 0.47..=0.53;

/// Lunar state for one instant, as supplied by the external astronomical
/// service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    phase: f64,
    illuminated_fraction: f64,
    rise: Option<DateTime<Utc>>,
    set: Option<DateTime<Utc>>,
    altitude: Option<Degrees>,
    azimuth: Option<Degrees>,
}

impl MoonState {
    /// Create a moon state, rejecting out-of-range fractions.
    ///
    /// `phase` is the synodic-cycle fraction (0 = new, 0.5 = full);
    /// `illuminated_fraction` is the lit share of the visible disc.
    ///
    /// # Errors
    /// [`Error::PhaseOutOfRange`] unless `phase ∈ [0, 1)`;
    /// [`Error::IlluminationOutOfRange`] unless
    /// `illuminated_fraction ∈ [0, 1]`.
    pub fn new(phase: f64, illuminated_fraction: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&phase) {
            return Err(Error::PhaseOutOfRange(phase));
        }
        if !(0.0..=1.0).contains(&illuminated_fraction) {
            return Err(Error::IlluminationOutOfRange(illuminated_fraction));
        }
        Ok(Self {
            phase,
            illuminated_fraction,
            rise: None,
            set: None,
            altitude: None,
            azimuth: None,
        })
    }

    /// Attach rise/set instants, when the source provides them.
    #[must_use]
    pub fn with_rise_set(mut self, rise: Option<DateTime<Utc>>, set: Option<DateTime<Utc>>) -> Self {
        self.rise = rise;
        self.set = set;
        self
    }

    /// Attach the topocentric direction, when the source provides it.
    #[must_use]
    pub fn with_horizontal_position(mut self, altitude: Degrees, azimuth: Degrees) -> Self {
        self.altitude = Some(altitude);
        self.azimuth = Some(azimuth);
        self
    }

    /// Synodic phase fraction in [0, 1).
    #[inline]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// Illuminated fraction of the visible disc in [0, 1].
    #[inline]
    pub const fn illuminated_fraction(&self) -> f64 {
        self.illuminated_fraction
    }

    /// Moonrise instant, if available.
    pub const fn rise(&self) -> Option<DateTime<Utc>> {
        self.rise
    }

    /// Moonset instant, if available.
    pub const fn set(&self) -> Option<DateTime<Utc>> {
        self.set
    }

    /// Altitude above the horizon, if available.
    pub const fn altitude(&self) -> Option<Degrees> {
        self.altitude
    }

    /// Azimuth, if available.
    pub const fn azimuth(&self) -> Option<Degrees> {
        self.azimuth
    }
}

/// The eight named phases of the lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Display name of the phase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Fixed disc anchor for the four principal phases; transitional
    /// phases have no anchor.
    pub const fn anchor_angle(self) -> Option<Degrees> {
        match self {
            Self::New => Some(NEW_MOON_ANGLE),
            Self::FirstQuarter => Some(FIRST_QUARTER_ANGLE),
            Self::Full => Some(FULL_MOON_ANGLE),
            Self::LastQuarter => Some(LAST_QUARTER_ANGLE),
            _ => None,
        }
    }
}

/// Rotation of the lunar disc so the current phase sits at the top marker.
///
/// `phase × 360°`, clockwise ([`RotationConvention::Now`]).
pub fn ring_rotation_angle(phase: f64) -> Degrees {
    cyclic_to_angle(phase, RotationConvention::Now)
}

/// Classify a continuous phase fraction into one of the eight named
/// phases.
///
/// The thresholds are deliberately asymmetric around the exact quarter
/// points (0, 0.25, 0.5, 0.75): each principal phase gets a narrow "exact"
/// band, each transitional phase a wide one.
pub fn classify_phase(phase: f64) -> MoonPhase {
    if phase < 0.03 || phase > 0.97 {
        MoonPhase::New
    } else if phase < 0.22 {
        MoonPhase::WaxingCrescent
    } else if phase < 0.28 {
        MoonPhase::FirstQuarter
    } else if phase < 0.47 {
        MoonPhase::WaxingGibbous
    } else if phase < 0.53 {
        MoonPhase::Full
    } else if phase < 0.72 {
        MoonPhase::WaningGibbous
    } else if phase < 0.78 {
        MoonPhase::LastQuarter
    } else {
        MoonPhase::WaningCrescent
    }
}

/// Recover the phase fraction at a tapped ring position.
///
/// `click_angle` is the raw screen angle of the tap; `disc_rotation` is
/// the current [`ring_rotation_angle`].  Subtracting the rotation yields
/// the fixed disc angle, which inverts under the same clockwise anchor
/// convention — so tapping the rendered Full Moon marker always yields a
/// phase of 0.5, whatever the disc rotation.
pub fn phase_at_click(click_angle: Degrees, disc_rotation: Degrees) -> f64 {
    let disc_angle = Degrees::new(click_angle.value() - disc_rotation.value());
    angle_to_cyclic(disc_angle, RotationConvention::Now)
}

/// Does the given calendar month contain two full moons?
///
/// Samples the external phase source once per day at **local apparent
/// noon**, collects days whose phase lies in the full-moon band
/// [0.47, 0.53], merges detections within one day of each other (the same
/// full moon straddling a sample boundary), and reports `true` iff at
/// least two distinct full-moon dates remain.
///
/// This is a month-level flag: once true, every day of that month reports
/// blue-moon status.  The once-per-day cadence is an inherited
/// approximation — a full moon within roughly half a day of a month
/// boundary can be attributed to the neighbouring month.
///
/// # Errors
/// [`Error::MonthOutOfRange`] unless `month ∈ [1, 12]`.
pub fn is_blue_moon_month<F>(
    year: i32,
    month: u32,
    location: &GeoLocation,
    phase_at: F,
) -> Result<bool>
where
    F: Fn(DateTime<Utc>) -> f64,
{
    if !(1..=12).contains(&month) {
        return Err(Error::MonthOutOfRange(month));
    }

    let offset_seconds = (location.local_offset_hours() * 3600.0).round() as i64;

    let mut full_moon_days: Vec<u32> = Vec::new();
    for day in 1..=days_in_month(year, month) {
        let local_noon = NaiveDate::from_ymd_opt(year, month, day)
            .expect("day ranges over the real month length")
            .and_hms_opt(12, 0, 0)
            .expect("12:00:00 is a valid time");
        let instant = (local_noon - Duration::seconds(offset_seconds)).and_utc();
        if FULL_MOON_BAND.contains(&phase_at(instant)) {
            full_moon_days.push(day);
        }
    }

    let mut distinct = 0u32;
    let mut previous: Option<u32> = None;
    for day in full_moon_days {
        match previous {
            Some(p) if day - p <= 1 => {}
            _ => distinct += 1,
        }
        previous = Some(day);
    }
    Ok(distinct >= 2)
}

/// Fixed conic ramp of the lunar disc: darkest at the New Moon anchor,
/// brightest at the Full Moon anchor, closed back to the start.
pub fn phase_gradient_stops() -> Vec<ColorStop> {
    const STOPS: [(f64, &str); 12] = [
        (0.0, "#0f172a"),
        (45.0, "#1e293b"),
        (90.0, "#334155"),
        (135.0, "#475569"),
        (180.0, "#64748b"),
        (225.0, "#475569"),
        (270.0, "#334155"),
        (315.0, "#1e293b"),
        (326.25, "#1a2534"),
        (337.5, "#17212f"),
        (348.75, "#131c2a"),
        (360.0, "#0f172a"),
    ];
    STOPS
        .iter()
        .map(|&(angle, color)| ColorStop {
            angle: Degrees::new(angle),
            color,
        })
        .collect()
}
