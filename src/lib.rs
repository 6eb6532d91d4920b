// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almanac Dial Engine
//!
//! This crate is the computational core of a multi-ring almanac clock: it
//! converts a (date-time, location) pair into angular positions on three
//! concentric rotating discs, plus the classification and filtering logic
//! around them.  Rendering, ephemeris computation, geolocation, and
//! persistence are external collaborators — the crate is pure, synchronous
//! computation with no I/O and no shared state.
//!
//! # Rings
//!
//! | Ring | Cycle | Module |
//! |------|-------|--------|
//! | Solar | 24 h local apparent day | [`solar`] |
//! | Lunar | ~29.53 d synodic month | [`lunar`] |
//! | Annual | 365/366 d calendar year | [`annual`] |
//!
//! # Core types
//!
//! - [`GeoLocation`] — validated observer position.
//! - [`RotationConvention`] — the two angle directions that coexist on one
//!   disc: clockwise `Now` rotation vs counter-clockwise `FixedEvent`
//!   placement.
//! - [`SunEventSet`] / [`MoonState`] — externally supplied astronomy for
//!   one instant.
//! - [`AnnualEvent`] / [`EventSpan`] — single- or multi-day calendar
//!   events, projected to arcs on the annual disc.
//! - [`ZodiacSign`] / [`Wedge`] — static sign table and per-year wedges.
//! - [`EclipseRecord`] — static per-year eclipse data with coarse
//!   visibility filtering.
//! - [`MoonPhase`] / [`MoonName`] — phase classification and traditional
//!   full-moon names.
//!
//! # Local apparent time
//!
//! All location-local times derive from longitude alone
//! (`offset_hours = longitude / 15`), a deliberate simplification applied
//! consistently to ring rotation, event anchoring, and displayed clock
//! times — see [`angle::local_solar_hours`].
//!
//! # Quick Example
//! ```rust
//! use almadial::{annual, lunar, GeoLocation};
//! use chrono::NaiveDate;
//! use qtty::Degrees;
//!
//! let location = GeoLocation::new(Degrees::new(45.0), Degrees::new(-93.0))?;
//! let today = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
//!
//! let disc = annual::ring_rotation_angle(today);
//! let sign = annual::zodiac_sign_for(8, 12)?;
//! let phase = lunar::classify_phase(0.02);
//!
//! println!("annual disc at {disc}, {} season, {}", sign.name, phase.name());
//! println!("eclipses: {:?}", almadial::eclipses_visible_from(2026, &location));
//! # Ok::<(), almadial::Error>(())
//! ```

pub mod angle;
pub mod annual;
pub mod date_math;
pub mod eclipse;
mod error;
pub mod events;
pub mod location;
pub mod lunar;
pub mod moon_names;
pub mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::RotationConvention;
pub use annual::{Element, Wedge, ZodiacSign, ZODIAC_SIGNS};
pub use eclipse::{
    eclipse_dataset, eclipses_visible_from, EclipseExtent, EclipseKind, EclipseRecord, Hemisphere,
    VisibilityRegion,
};
pub use error::{Error, Result};
pub use events::{AnnualEvent, EventArc, EventKind, EventSpan, LabelOrientation};
pub use location::GeoLocation;
pub use lunar::{MoonPhase, MoonState};
pub use moon_names::{MoonName, MOON_NAMES};
pub use solar::{ColorStop, DayPeriod, SunEventSet};
