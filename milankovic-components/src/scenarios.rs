//! Paleoclimate scenario catalog and documented parameter ranges.
//!
//! The catalog carries the named orbital/CO2 configurations the
//! visualisation offers, each with the globally averaged temperature range
//! reconstructed for that interval. The parameter ranges bound what the
//! orbital cycles have explored over the last several million years; the
//! validator checks every preset against them.

use milankovic_core::constants::PRESENT_PERIHELION_LONGITUDE_DEG;
use milankovic_core::errors::{MilankovicError, MilankovicResult};
use milankovic_core::inputs::OrbitalState;
use milankovic_core::numerics::{FloatValue, ValueRange};
use serde::{Deserialize, Serialize};

/// A documented parameter interval, optionally with its present-day value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: FloatValue,
    pub max: FloatValue,
    pub present: Option<FloatValue>,
}

impl ParameterRange {
    pub fn contains(&self, value: FloatValue) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Checks a named value against the interval.
    pub fn ensure(&self, parameter: &str, value: FloatValue) -> MilankovicResult<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(MilankovicError::DomainOutOfRange {
                parameter: parameter.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Scientifically accepted ranges for the orbital parameters and the PETM
/// CO2 window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    pub eccentricity: ParameterRange,
    /// unit: degrees
    pub axial_tilt: ParameterRange,
    /// unit: degrees
    pub precession: ParameterRange,
    /// unit: ppm
    pub co2_petm: ParameterRange,
}

impl ParameterRanges {
    /// Ranges explored by the orbital cycles over the paleoclimatic
    /// record.
    pub fn paleoclimatic() -> Self {
        Self {
            eccentricity: ParameterRange {
                min: 0.0034,
                max: 0.058,
                present: Some(0.0167),
            },
            axial_tilt: ParameterRange {
                min: 22.1,
                max: 24.5,
                present: Some(23.44),
            },
            precession: ParameterRange {
                min: 0.0,
                max: 360.0,
                present: None,
            },
            co2_petm: ParameterRange {
                min: 1000.0,
                max: 2000.0,
                present: None,
            },
        }
    }
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self::paleoclimatic()
    }
}

/// A named paleoclimate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    /// unit: ppm
    pub co2: FloatValue,
    /// Years relative to present; negative is before present.
    pub year: FloatValue,
    pub description: String,
    pub orbital: OrbitalState,
    /// Reconstructed global-mean temperature interval.
    /// unit: degC
    pub expected_temperature: ValueRange,
    /// Additional CO2 constraint, where the record pins it.
    /// unit: ppm
    #[serde(default)]
    pub co2_range: Option<ValueRange>,
}

/// The five standard presets.
pub fn standard_catalog() -> Vec<Preset> {
    vec![
        Preset {
            name: "LGM (21 kyr BP)".to_string(),
            orbital: OrbitalState::new(0.019, 22.99, 114.0),
            co2: 180.0,
            year: -21_000.0,
            expected_temperature: ValueRange::new(-6.0, -2.0),
            co2_range: None,
            description: "Last Glacial Maximum: large ice sheets, low CO2, \
                          cool northern summers"
                .to_string(),
        },
        Preset {
            name: "Mid-Holocene (6 kyr BP)".to_string(),
            orbital: OrbitalState::new(0.0187, 24.1, 303.0),
            co2: 265.0,
            year: -6_000.0,
            expected_temperature: ValueRange::new(14.0, 16.0),
            co2_range: None,
            description: "Holocene climatic optimum: strong northern summers \
                          under high obliquity"
                .to_string(),
        },
        Preset {
            name: "MPT (800 kyr BP)".to_string(),
            orbital: OrbitalState::new(0.043, 22.3, 275.0),
            co2: 240.0,
            year: -800_000.0,
            expected_temperature: ValueRange::new(8.0, 12.0),
            co2_range: None,
            description: "Mid-Pleistocene Transition: glacial cycles shifting \
                          from 41 kyr to 100 kyr pacing"
                .to_string(),
        },
        Preset {
            name: "PETM (56 Myr BP)".to_string(),
            orbital: OrbitalState::new(0.052, 23.8, 180.0),
            co2: 1500.0,
            year: -56_000_000.0,
            expected_temperature: ValueRange::new(22.0, 28.0),
            co2_range: Some(ValueRange::new(1000.0, 2000.0)),
            description: "Paleocene-Eocene Thermal Maximum: extreme greenhouse \
                          warmth, ice-free poles"
                .to_string(),
        },
        Preset {
            name: "Future (50 kyr AP)".to_string(),
            orbital: OrbitalState::new(0.015, 23.2, 90.0),
            co2: 280.0,
            year: 50_000.0,
            expected_temperature: ValueRange::new(10.0, 14.0),
            co2_range: None,
            description: "Projected orbital configuration 50 kyr ahead at \
                          pre-industrial CO2"
                .to_string(),
        },
    ]
}

/// First-harmonic orbital cycle periods.
/// unit: years
const ECCENTRICITY_PERIOD_YEARS: FloatValue = 100_000.0;
const OBLIQUITY_PERIOD_YEARS: FloatValue = 41_000.0;
const PRECESSION_PERIOD_YEARS: FloatValue = 23_000.0;

// Phases anchor the cycles to their present-day values.
const ECCENTRICITY_PHASE: FloatValue = -0.5386;
const OBLIQUITY_PHASE: FloatValue = 0.1169;

/// Approximate orbital configuration at a year relative to present
/// (negative before present).
///
/// A single-harmonic reconstruction of the three cycles, bounded by the
/// documented parameter ranges and anchored so that year 0 reproduces the
/// present-day orbit. Good enough to animate the cycles; it is not an
/// astronomical solution.
pub fn orbital_at_year(year: FloatValue) -> OrbitalState {
    if !year.is_finite() {
        return OrbitalState::baseline();
    }
    let ranges = ParameterRanges::paleoclimatic();

    let ecc_mid = (ranges.eccentricity.min + ranges.eccentricity.max) / 2.0;
    let ecc_amp = (ranges.eccentricity.max - ranges.eccentricity.min) / 2.0;
    let eccentricity = ecc_mid
        + ecc_amp
            * (2.0 * std::f64::consts::PI * year / ECCENTRICITY_PERIOD_YEARS
                + ECCENTRICITY_PHASE)
                .sin();

    let tilt_mid = (ranges.axial_tilt.min + ranges.axial_tilt.max) / 2.0;
    let tilt_amp = (ranges.axial_tilt.max - ranges.axial_tilt.min) / 2.0;
    let axial_tilt = tilt_mid
        + tilt_amp
            * (2.0 * std::f64::consts::PI * year / OBLIQUITY_PERIOD_YEARS + OBLIQUITY_PHASE)
                .sin();

    let precession = (PRESENT_PERIHELION_LONGITUDE_DEG
        + 360.0 * year / PRECESSION_PERIOD_YEARS)
        .rem_euclid(360.0);

    OrbitalState {
        eccentricity,
        axial_tilt,
        precession,
    }
}
