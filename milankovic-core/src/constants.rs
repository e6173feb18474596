//! Process-wide physical constants.
//!
//! Everything here is immutable and shared by all components; there is no
//! other process-wide state anywhere in the model.

use crate::numerics::FloatValue;

/// Total solar irradiance at 1 AU.
/// unit: W / m^2
pub const SOLAR_CONSTANT: FloatValue = 1361.0;

/// Pre-industrial atmospheric CO2 concentration.
/// unit: ppm
pub const CO2_PREINDUSTRIAL_PPM: FloatValue = 280.0;

/// Typical glacial-maximum CO2 concentration.
/// unit: ppm
pub const CO2_GLACIAL_PPM: FloatValue = 180.0;

/// Observed CO2 concentration in 2023.
/// unit: ppm
pub const CO2_2023_PPM: FloatValue = 420.0;

/// Pre-industrial atmospheric CH4 concentration.
/// unit: ppb
pub const CH4_PREINDUSTRIAL_PPB: FloatValue = 700.0;

/// Pre-industrial atmospheric N2O concentration.
/// unit: ppb
pub const N2O_PREINDUSTRIAL_PPB: FloatValue = 270.0;

/// Baseline aerosol optical depth (clean atmosphere).
/// unitless
pub const AEROSOL_BASELINE_OD: FloatValue = 0.0;

/// Freezing point of water.
/// unit: degC
pub const FREEZING_POINT_C: FloatValue = 0.0;

/// Lower bound for any reported temperature.
/// unit: degC
pub const TEMPERATURE_MIN_C: FloatValue = -60.0;

/// Upper bound for any reported temperature.
/// unit: degC
pub const TEMPERATURE_MAX_C: FloatValue = 60.0;

/// Baseline orbital eccentricity (present day).
pub const BASELINE_ECCENTRICITY: FloatValue = 0.0167;

/// Baseline axial tilt (present day).
/// unit: degrees
pub const BASELINE_OBLIQUITY_DEG: FloatValue = 23.44;

/// Baseline longitude of perihelion used by the reference insolation.
/// unit: degrees
pub const BASELINE_PRECESSION_DEG: FloatValue = 0.0;

/// Present-day longitude of perihelion (perihelion falls in early
/// January).
/// unit: degrees
pub const PRESENT_PERIHELION_LONGITUDE_DEG: FloatValue = 283.0;

/// Atmospheric adjustment time constant.
/// unit: years
pub const TAU_ATMOSPHERE_YEARS: FloatValue = 1.0;

/// Deep-ocean adjustment time constant.
/// unit: years
pub const TAU_DEEP_OCEAN_YEARS: FloatValue = 500.0;

/// Ice-sheet adjustment time constant.
/// unit: years
pub const TAU_ICE_SHEETS_YEARS: FloatValue = 5000.0;

/// Global-mean temperature reported when no latitude band produces a
/// valid result.
/// unit: degC
pub const REGIONAL_FALLBACK_TEMPERATURE_C: FloatValue = 15.0;
