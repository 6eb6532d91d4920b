// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Eclipse reference data and coarse visibility filtering.
//!
//! A static per-year dataset (NASA eclipse tables, 2026–2030) is filtered
//! down to the records plausibly visible from a location.  Solar eclipses
//! match on a declared path bounding box or hemisphere flag; lunar
//! eclipses match on coarse longitude buckets (the night side of Earth at
//! eclipse time) or a global flag.
//!
//! This is deliberately a **coarse inclusion filter**: real visibility
//! depends on precise path polygons and local circumstances.  The contract
//! is "worth showing on the ring", not "authoritative visibility".
//!
//! Years without data yield an empty result and a warn-level diagnostic,
//! never an error — data growth is a table edit, not a code change.

use crate::events::{AnnualEvent, EventKind};
use crate::location::GeoLocation;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Which body is eclipsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EclipseKind {
    Solar,
    Lunar,
}

/// Depth of the eclipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EclipseExtent {
    Total,
    Partial,
    Annular,
}

/// Coarse hemisphere buckets used by the visibility tables.
///
/// `North`/`South` are latitude flags for partial solar visibility;
/// the other three are longitude buckets for lunar night-side visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Hemisphere {
    North,
    South,
    Americas,
    EuropeAfrica,
    AsiaPacific,
}

/// One declared visibility region of an eclipse.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VisibilityRegion {
    /// Bounding box of the eclipse path.
    Path {
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    },
    /// Hemisphere flag (see [`Hemisphere`]).
    Hemisphere(Hemisphere),
    /// Visible from the whole night side.
    Global,
}

/// One eclipse of the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EclipseRecord {
    /// Stable identifier (`solar-2026-02-17`, ...).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Calendar month of the eclipse.
    pub month: u32,
    /// Calendar day of the eclipse.
    pub day: u32,
    /// Solar or lunar.
    pub kind: EclipseKind,
    /// Total, partial, or annular.
    pub extent: EclipseExtent,
    /// Marker color on the annual ring.
    pub color: &'static str,
    /// Declared visibility regions.
    pub visible_from: &'static [VisibilityRegion],
}

impl EclipseRecord {
    /// Does the coarse filter consider this eclipse visible from
    /// `location`?
    pub fn is_visible_from(&self, location: &GeoLocation) -> bool {
        let lat = location.latitude().value();
        let lng = location.longitude().value();

        self.visible_from.iter().any(|region| match (self.kind, *region) {
            (_, VisibilityRegion::Global) => true,
            (
                EclipseKind::Solar,
                VisibilityRegion::Path {
                    min_lat,
                    max_lat,
                    min_lng,
                    max_lng,
                },
            ) => (min_lat..=max_lat).contains(&lat) && (min_lng..=max_lng).contains(&lng),
            (EclipseKind::Solar, VisibilityRegion::Hemisphere(Hemisphere::North)) => lat > 0.0,
            (EclipseKind::Solar, VisibilityRegion::Hemisphere(Hemisphere::South)) => lat < 0.0,
            (EclipseKind::Lunar, VisibilityRegion::Hemisphere(Hemisphere::Americas)) => {
                (-180.0..=-30.0).contains(&lng)
            }
            (EclipseKind::Lunar, VisibilityRegion::Hemisphere(Hemisphere::EuropeAfrica)) => {
                (-30.0..=60.0).contains(&lng)
            }
            (EclipseKind::Lunar, VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific)) => {
                lng >= 60.0 || lng <= -120.0
            }
            _ => false,
        })
    }

    /// Project this record into an [`AnnualEvent`] for the annual ring.
    pub fn to_annual_event(&self) -> AnnualEvent {
        let kind = match self.kind {
            EclipseKind::Solar => EventKind::SolarEclipse,
            EclipseKind::Lunar => EventKind::LunarEclipse,
        };
        AnnualEvent::single_day(self.id, self.name, self.month, self.day, self.color, kind)
            .expect("reference dataset dates are valid")
    }
}

const SOLAR_COLOR: &str = "#FFD700";
const LUNAR_COLOR: &str = "#DC143C";

const ECLIPSES_2026: [EclipseRecord; 4] = [
    EclipseRecord {
        id: "solar-2026-02-17",
        name: "Annular Solar Eclipse",
        month: 2,
        day: 17,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Annular,
        color: SOLAR_COLOR,
        // Path crosses Antarctica and the southern oceans.
        visible_from: &[VisibilityRegion::Path {
            min_lat: -90.0,
            max_lat: -60.0,
            min_lng: -180.0,
            max_lng: 180.0,
        }],
    },
    EclipseRecord {
        id: "lunar-2026-03-03",
        name: "Total Lunar Eclipse",
        month: 3,
        day: 3,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Total,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::Americas),
            VisibilityRegion::Hemisphere(Hemisphere::EuropeAfrica),
        ],
    },
    EclipseRecord {
        id: "solar-2026-08-12",
        name: "Total Solar Eclipse",
        month: 8,
        day: 12,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Total,
        color: SOLAR_COLOR,
        // Path crosses northern Spain, Iceland, Greenland.
        visible_from: &[VisibilityRegion::Path {
            min_lat: 40.0,
            max_lat: 80.0,
            min_lng: -50.0,
            max_lng: 20.0,
        }],
    },
    EclipseRecord {
        id: "lunar-2026-08-28",
        name: "Partial Lunar Eclipse",
        month: 8,
        day: 28,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Partial,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::Americas),
            VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific),
        ],
    },
];

const ECLIPSES_2027: [EclipseRecord; 3] = [
    EclipseRecord {
        id: "solar-2027-02-06",
        name: "Annular Solar Eclipse",
        month: 2,
        day: 6,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Annular,
        color: SOLAR_COLOR,
        // Path crosses South America and southern Africa.
        visible_from: &[VisibilityRegion::Path {
            min_lat: -50.0,
            max_lat: 10.0,
            min_lng: -80.0,
            max_lng: 40.0,
        }],
    },
    EclipseRecord {
        id: "solar-2027-08-02",
        name: "Total Solar Eclipse",
        month: 8,
        day: 2,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Total,
        color: SOLAR_COLOR,
        // Path crosses North Africa, the Middle East, South Asia.
        visible_from: &[VisibilityRegion::Path {
            min_lat: 10.0,
            max_lat: 40.0,
            min_lng: -10.0,
            max_lng: 100.0,
        }],
    },
    EclipseRecord {
        id: "lunar-2027-09-07",
        name: "Total Lunar Eclipse",
        month: 9,
        day: 7,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Total,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::EuropeAfrica),
            VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific),
        ],
    },
];

const ECLIPSES_2028: [EclipseRecord; 4] = [
    EclipseRecord {
        id: "lunar-2028-01-12",
        name: "Total Lunar Eclipse",
        month: 1,
        day: 12,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Total,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::Americas),
            VisibilityRegion::Hemisphere(Hemisphere::EuropeAfrica),
        ],
    },
    EclipseRecord {
        id: "solar-2028-01-26",
        name: "Annular Solar Eclipse",
        month: 1,
        day: 26,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Annular,
        color: SOLAR_COLOR,
        // Path crosses South America, Europe, North Africa.
        visible_from: &[VisibilityRegion::Path {
            min_lat: -20.0,
            max_lat: 50.0,
            min_lng: -80.0,
            max_lng: 20.0,
        }],
    },
    EclipseRecord {
        id: "lunar-2028-07-06",
        name: "Partial Lunar Eclipse",
        month: 7,
        day: 6,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Partial,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::Americas),
            VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific),
        ],
    },
    EclipseRecord {
        id: "solar-2028-07-22",
        name: "Total Solar Eclipse",
        month: 7,
        day: 22,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Total,
        color: SOLAR_COLOR,
        // Path crosses Australia and New Zealand.
        visible_from: &[VisibilityRegion::Path {
            min_lat: -50.0,
            max_lat: -10.0,
            min_lng: 110.0,
            max_lng: 180.0,
        }],
    },
];

const ECLIPSES_2029: [EclipseRecord; 3] = [
    EclipseRecord {
        id: "lunar-2029-06-12",
        name: "Partial Lunar Eclipse",
        month: 6,
        day: 12,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Partial,
        color: LUNAR_COLOR,
        visible_from: &[VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific)],
    },
    EclipseRecord {
        id: "lunar-2029-12-05",
        name: "Total Lunar Eclipse",
        month: 12,
        day: 5,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Total,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::Americas),
            VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific),
        ],
    },
    EclipseRecord {
        id: "solar-2029-12-20",
        name: "Total Solar Eclipse",
        month: 12,
        day: 20,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Total,
        color: SOLAR_COLOR,
        // Path crosses South America and southern Africa.
        visible_from: &[VisibilityRegion::Path {
            min_lat: -50.0,
            max_lat: 0.0,
            min_lng: -80.0,
            max_lng: 40.0,
        }],
    },
];

const ECLIPSES_2030: [EclipseRecord; 4] = [
    EclipseRecord {
        id: "solar-2030-06-01",
        name: "Annular Solar Eclipse",
        month: 6,
        day: 1,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Annular,
        color: SOLAR_COLOR,
        // Path crosses the Mediterranean, the Middle East, Asia.
        visible_from: &[VisibilityRegion::Path {
            min_lat: 20.0,
            max_lat: 50.0,
            min_lng: -10.0,
            max_lng: 140.0,
        }],
    },
    EclipseRecord {
        id: "lunar-2030-06-15",
        name: "Partial Lunar Eclipse",
        month: 6,
        day: 15,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Partial,
        color: LUNAR_COLOR,
        visible_from: &[VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific)],
    },
    EclipseRecord {
        id: "solar-2030-11-25",
        name: "Total Solar Eclipse",
        month: 11,
        day: 25,
        kind: EclipseKind::Solar,
        extent: EclipseExtent::Total,
        color: SOLAR_COLOR,
        // Path crosses southern Africa and Australia.
        visible_from: &[VisibilityRegion::Path {
            min_lat: -50.0,
            max_lat: -10.0,
            min_lng: 10.0,
            max_lng: 150.0,
        }],
    },
    EclipseRecord {
        id: "lunar-2030-12-09",
        name: "Total Lunar Eclipse",
        month: 12,
        day: 9,
        kind: EclipseKind::Lunar,
        extent: EclipseExtent::Total,
        color: LUNAR_COLOR,
        visible_from: &[
            VisibilityRegion::Hemisphere(Hemisphere::Americas),
            VisibilityRegion::Hemisphere(Hemisphere::AsiaPacific),
        ],
    },
];

/// The full reference dataset for one year, or `None` for years without
/// data.
pub fn eclipse_dataset(year: i32) -> Option<&'static [EclipseRecord]> {
    match year {
        2026 => Some(&ECLIPSES_2026),
        2027 => Some(&ECLIPSES_2027),
        2028 => Some(&ECLIPSES_2028),
        2029 => Some(&ECLIPSES_2029),
        2030 => Some(&ECLIPSES_2030),
        _ => None,
    }
}

/// The eclipses of `year` plausibly visible from `location`.
///
/// Years without reference data return an empty list and emit a
/// warn-level diagnostic — never an error.
pub fn eclipses_visible_from(year: i32, location: &GeoLocation) -> Vec<&'static EclipseRecord> {
    let Some(records) = eclipse_dataset(year) else {
        tracing::warn!(year, "no eclipse reference data for year");
        return Vec::new();
    };
    records
        .iter()
        .filter(|record| record.is_visible_from(location))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Degrees;

    fn location(lat: f64, lng: f64) -> GeoLocation {
        GeoLocation::new(Degrees::new(lat), Degrees::new(lng)).unwrap()
    }

    fn ids(records: &[&EclipseRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn dataset_years_are_2026_through_2030() {
        for year in 2026..=2030 {
            assert!(eclipse_dataset(year).is_some(), "{year}");
        }
        assert!(eclipse_dataset(2025).is_none());
        assert!(eclipse_dataset(2031).is_none());
    }

    #[test]
    fn unknown_year_returns_empty() {
        assert!(eclipses_visible_from(2024, &location(45.0, -93.0)).is_empty());
    }

    #[test]
    fn antarctic_path_matches_only_far_south() {
        let south = eclipses_visible_from(2026, &location(-70.0, 0.0));
        assert!(ids(&south).contains(&"solar-2026-02-17"));

        let north = eclipses_visible_from(2026, &location(70.0, 0.0));
        assert!(!ids(&north).contains(&"solar-2026-02-17"));
    }

    #[test]
    fn high_north_atlantic_2026() {
        // (70°N, 0°E): inside the Aug 12 path box, inside the
        // europe-africa lunar bucket, outside everything else.
        let visible = eclipses_visible_from(2026, &location(70.0, 0.0));
        assert_eq!(
            ids(&visible),
            vec!["lunar-2026-03-03", "solar-2026-08-12"]
        );
    }

    #[test]
    fn midwest_2026_sees_the_lunar_pair() {
        // (45°N, 93°W): americas bucket for both lunar eclipses, outside
        // both solar paths.
        let visible = eclipses_visible_from(2026, &location(45.0, -93.0));
        assert_eq!(
            ids(&visible),
            vec!["lunar-2026-03-03", "lunar-2026-08-28"]
        );
    }

    #[test]
    fn lunar_longitude_buckets() {
        let record = ECLIPSES_2029[0]; // asia-pacific only
        assert!(record.is_visible_from(&location(35.0, 139.0))); // Tokyo
        assert!(record.is_visible_from(&location(21.0, -157.0))); // Honolulu
        assert!(!record.is_visible_from(&location(48.0, 2.0))); // Paris
        assert!(!record.is_visible_from(&location(45.0, -93.0))); // Minneapolis
    }

    #[test]
    fn solar_path_needs_both_axes() {
        let record = ECLIPSES_2026[2]; // lat 40..80, lng -50..20
        assert!(record.is_visible_from(&location(64.0, -19.0))); // Iceland
        assert!(!record.is_visible_from(&location(64.0, 30.0))); // lng out
        assert!(!record.is_visible_from(&location(30.0, 0.0))); // lat out
    }

    #[test]
    fn records_project_to_annual_events() {
        let record = &ECLIPSES_2026[0];
        let event = record.to_annual_event();
        assert_eq!(event.id, "solar-2026-02-17");
        assert_eq!(event.kind, crate::events::EventKind::SolarEclipse);
        assert!(!event.is_multi_day());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn records_serialize_with_kebab_case_kinds() {
        let json = serde_json::to_string(&ECLIPSES_2026[0]).unwrap();
        assert!(json.contains("\"solar\""));
        assert!(json.contains("\"annular\""));
        assert!(json.contains("solar-2026-02-17"));
    }
}
