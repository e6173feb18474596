//! Input records for the climate response model.
//!
//! All inputs are plain numeric records produced per call and discarded;
//! nothing here is mutated or cached. Angles are degrees, season is the
//! fraction of the orbital year in [0, 1), time scales are years.

use crate::constants::{
    BASELINE_ECCENTRICITY, BASELINE_OBLIQUITY_DEG, BASELINE_PRECESSION_DEG, CO2_PREINDUSTRIAL_PPM,
};
use crate::numerics::FloatValue;
use serde::{Deserialize, Serialize};

/// Earth's orbital configuration.
///
/// Eccentricity is unitless; axial tilt and precession (longitude of
/// perihelion) are degrees. Precession is treated modulo 360.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    pub eccentricity: FloatValue,
    /// unit: degrees
    pub axial_tilt: FloatValue,
    /// unit: degrees
    pub precession: FloatValue,
}

impl OrbitalState {
    pub fn new(eccentricity: FloatValue, axial_tilt: FloatValue, precession: FloatValue) -> Self {
        Self {
            eccentricity,
            axial_tilt,
            precession,
        }
    }

    /// Present-day reference orbit.
    pub fn baseline() -> Self {
        Self {
            eccentricity: BASELINE_ECCENTRICITY,
            axial_tilt: BASELINE_OBLIQUITY_DEG,
            precession: BASELINE_PRECESSION_DEG,
        }
    }

    /// Same orbit with precession wrapped into [0, 360).
    pub fn normalized(&self) -> Self {
        Self {
            precession: self.precession.rem_euclid(360.0),
            ..*self
        }
    }

    pub fn is_finite(&self) -> bool {
        self.eccentricity.is_finite() && self.axial_tilt.is_finite() && self.precession.is_finite()
    }
}

impl Default for OrbitalState {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Atmospheric composition.
///
/// CO2 is always present; the trace species are optional and only
/// contribute to the combined forcing when given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Atmosphere {
    /// unit: ppm
    pub co2: FloatValue,
    /// unit: ppb
    pub ch4: Option<FloatValue>,
    /// unit: ppb
    pub n2o: Option<FloatValue>,
    /// Aerosol optical depth, unitless.
    pub aerosol_od: Option<FloatValue>,
}

impl Atmosphere {
    /// CO2-only atmosphere.
    pub fn with_co2(co2: FloatValue) -> Self {
        Self {
            co2,
            ..Self::default()
        }
    }

    pub fn preindustrial() -> Self {
        Self::with_co2(CO2_PREINDUSTRIAL_PPM)
    }

    pub fn is_finite(&self) -> bool {
        self.co2.is_finite()
            && self.ch4.map_or(true, FloatValue::is_finite)
            && self.n2o.map_or(true, FloatValue::is_finite)
            && self.aerosol_od.map_or(true, FloatValue::is_finite)
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            co2: CO2_PREINDUSTRIAL_PPM,
            ch4: None,
            n2o: None,
            aerosol_od: None,
        }
    }
}

/// Equilibrium climate sensitivity setting.
///
/// Expressed as the temperature response per unit radiative forcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

impl SensitivityLevel {
    /// Temperature response per unit forcing.
    /// unit: degC / (W / m^2)
    pub fn celsius_per_wm2(&self) -> FloatValue {
        match self {
            SensitivityLevel::Low => 0.5,
            SensitivityLevel::Medium => 0.75,
            SensitivityLevel::High => 1.0,
        }
    }
}

impl Default for SensitivityLevel {
    fn default() -> Self {
        SensitivityLevel::Medium
    }
}

/// Full input record for a point or regional evaluation.
///
/// Defaults describe a present-day mid-latitude site at the start of the
/// seasonal cycle with no time-scale attenuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateInputs {
    pub orbital: OrbitalState,
    pub atmosphere: Atmosphere,
    /// unit: degrees, positive north
    pub latitude: FloatValue,
    /// Fraction of the orbital year, wrapped into [0, 1).
    pub season: FloatValue,
    /// Additional offset applied to the final temperature.
    /// unit: degC
    pub temp_offset: FloatValue,
    /// Simulated response time; 0 means full equilibrium.
    /// unit: years
    pub time_scale_years: FloatValue,
    pub sensitivity: SensitivityLevel,
}

impl ClimateInputs {
    pub fn with_latitude(mut self, latitude: FloatValue) -> Self {
        self.latitude = latitude;
        self
    }

    pub fn with_season(mut self, season: FloatValue) -> Self {
        self.season = season;
        self
    }

    pub fn with_co2(mut self, co2: FloatValue) -> Self {
        self.atmosphere.co2 = co2;
        self
    }

    pub fn with_orbital(mut self, orbital: OrbitalState) -> Self {
        self.orbital = orbital;
        self
    }

    pub fn with_time_scale(mut self, years: FloatValue) -> Self {
        self.time_scale_years = years;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.orbital.is_finite()
            && self.atmosphere.is_finite()
            && self.latitude.is_finite()
            && self.season.is_finite()
            && self.temp_offset.is_finite()
            && self.time_scale_years.is_finite()
    }

    /// Season wrapped into [0, 1).
    pub fn wrapped_season(&self) -> FloatValue {
        self.season.rem_euclid(1.0)
    }
}

impl Default for ClimateInputs {
    fn default() -> Self {
        Self {
            orbital: OrbitalState::baseline(),
            atmosphere: Atmosphere::default(),
            latitude: 52.37,
            season: 0.0,
            temp_offset: 0.0,
            time_scale_years: 0.0,
            sensitivity: SensitivityLevel::default(),
        }
    }
}
