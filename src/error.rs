// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validation errors.
//!
//! Every ring computation is pure; the only failure mode is a precondition
//! violation on its inputs.  Out-of-range values are rejected with a
//! descriptive error **before** any angle math runs — the crate never
//! clamps silently and never produces a NaN angle from bad input.
//!
//! None of these conditions is fatal: each error is local to the single
//! computation that received the bad value.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Input-validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Latitude outside [-90°, +90°].
    #[error("latitude {0}° out of range [-90°, +90°]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180°, +180°].
    #[error("longitude {0}° out of range [-180°, +180°]")]
    LongitudeOutOfRange(f64),

    /// Calendar month outside [1, 12].
    #[error("month {0} out of range [1, 12]")]
    MonthOutOfRange(u32),

    /// Day that does not exist in the given month (Feb 29 is accepted,
    /// being valid in leap years).
    #[error("day {day} is not a valid day of month {month}")]
    DayOutOfMonth {
        /// Month the day was checked against.
        month: u32,
        /// The invalid day value.
        day: u32,
    },

    /// Lunar phase fraction outside [0, 1).
    #[error("lunar phase {0} out of range [0, 1)")]
    PhaseOutOfRange(f64),

    /// Illuminated fraction outside [0, 1].
    #[error("illuminated fraction {0} out of range [0, 1]")]
    IlluminationOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = Error::LatitudeOutOfRange(95.0);
        assert!(e.to_string().contains("95"));

        let e = Error::DayOutOfMonth { month: 2, day: 30 };
        let msg = e.to_string();
        assert!(msg.contains('2') && msg.contains("30"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            Error::MonthOutOfRange(13),
            Error::MonthOutOfRange(13)
        );
        assert_ne!(
            Error::PhaseOutOfRange(1.5),
            Error::IlluminationOutOfRange(1.5)
        );
    }
}
