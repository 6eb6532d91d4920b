// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated observer location.
//!
//! Every location-dependent computation takes a [`GeoLocation`], and a
//! `GeoLocation` can only be constructed with latitude in [-90°, +90°] and
//! longitude in [-180°, +180°].  The external form layer is expected to
//! validate first; this constructor is the precondition gate that keeps
//! out-of-range values from ever reaching angle math.

use crate::error::{Error, Result};
use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on Earth, with an optional display name.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    latitude: Degrees,
    longitude: Degrees,
    name: Option<String>,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range coordinates.
    ///
    /// # Errors
    /// [`Error::LatitudeOutOfRange`] or [`Error::LongitudeOutOfRange`] —
    /// values are never clamped.
    pub fn new(latitude: Degrees, longitude: Degrees) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude.value()) {
            return Err(Error::LatitudeOutOfRange(latitude.value()));
        }
        if !(-180.0..=180.0).contains(&longitude.value()) {
            return Err(Error::LongitudeOutOfRange(longitude.value()));
        }
        Ok(Self {
            latitude,
            longitude,
            name: None,
        })
    }

    /// Attach a display name (e.g. from the external geocoder).
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Latitude, positive north.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, positive east.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Display name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Offset of local apparent time from UTC, in hours
    /// (`longitude / 15`) — the longitude-proportional simplification used
    /// throughout the crate.
    #[inline]
    pub fn local_offset_hours(&self) -> f64 {
        self.longitude.value() / 15.0
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// Hand-implemented so deserialization routes through the validating
// constructor: a persisted location with corrupt coordinates is rejected,
// not resurrected.

#[cfg(feature = "serde")]
impl Serialize for GeoLocation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("GeoLocation", 3)?;
        s.serialize_field("latitude", &self.latitude.value())?;
        s.serialize_field("longitude", &self.longitude.value())?;
        s.serialize_field("name", &self.name)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
            name: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let loc = GeoLocation::new(Degrees::new(raw.latitude), Degrees::new(raw.longitude))
            .map_err(serde::de::Error::custom)?;
        Ok(match raw.name {
            Some(name) => loc.named(name),
            None => loc,
        })
    }
}
