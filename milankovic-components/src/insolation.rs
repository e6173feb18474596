//! Daily top-of-atmosphere insolation.
//!
//! Computes the daily-mean insolation Q(latitude, season) in W/m^2 for an
//! arbitrary orbital configuration, via the classical combination of
//! orbital distance, solar declination and sunrise hour angle:
//!
//! ```text
//! theta = 2*pi*s + prec
//! r     = (1 - e^2) / (1 + e*cos(theta))          (floored)
//! delta = asin(sin(tilt) * sin(theta + prec + pi))
//! H     = acos(clamp(-tan(lat)*tan(delta), -1, 1))
//! Q     = S0/(pi*r^2) * (H*sin(lat)*sin(delta) + cos(lat)*cos(delta)*sin(H))
//! ```
//!
//! The precession offset enters both the true anomaly and the solar
//! longitude of the declination; the doubled offset is intentional and
//! load-bearing for the seasonal alignment of the rest of the model, so it
//! must not be "fixed" independently of the feedback phases.
//!
//! Within a degree of the poles the day/night geometry degenerates, so a
//! simplified polar formulation takes over: zero during the hemispheric
//! dark season, a distance-modulated plateau during the lit season.

use milankovic_core::constants::SOLAR_CONSTANT;
use milankovic_core::inputs::OrbitalState;
use milankovic_core::numerics::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the insolation kernel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsolationParameters {
    /// Total solar irradiance.
    /// unit: W / m^2
    /// Default: 1361.0
    pub solar_constant: FloatValue,
    /// Latitude beyond which the simplified polar formulation applies.
    /// unit: degrees
    /// Default: 89.0
    pub polar_latitude: FloatValue,
    /// Floor for the normalized orbital distance, guarding the
    /// near-parabolic limit.
    /// Default: 1e-3
    pub radius_floor: FloatValue,
}

impl Default for InsolationParameters {
    fn default() -> Self {
        Self {
            solar_constant: SOLAR_CONSTANT,
            polar_latitude: 89.0,
            radius_floor: 1e-3,
        }
    }
}

/// Daily top-of-atmosphere insolation kernel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Insolation {
    parameters: InsolationParameters,
}

impl Insolation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: InsolationParameters) -> Self {
        Self { parameters }
    }

    /// Daily-mean insolation at `latitude` for the given orbit and season.
    ///
    /// `latitude` in degrees, `season` as a year fraction (wrapped into
    /// [0, 1)). The result is finite and non-negative for any input; a
    /// non-finite input or intermediate yields 0.
    pub fn daily(
        &self,
        latitude: FloatValue,
        season: FloatValue,
        orbital: &OrbitalState,
    ) -> FloatValue {
        if !latitude.is_finite() || !season.is_finite() || !orbital.is_finite() {
            return 0.0;
        }
        let season = season.rem_euclid(1.0);
        let orbital = orbital.normalized();

        if latitude.abs() >= self.parameters.polar_latitude {
            return self.polar_daily(latitude, season, &orbital);
        }

        let lat = latitude.to_radians();
        let tilt = orbital.axial_tilt.to_radians();
        let prec = orbital.precession.to_radians();
        let e = orbital.eccentricity;

        let theta = 2.0 * std::f64::consts::PI * season + prec;
        let radius = ((1.0 - e * e) / (1.0 + e * theta.cos())).max(self.parameters.radius_floor);
        let declination = (tilt.sin() * (theta + prec + std::f64::consts::PI).sin()).asin();

        // The argument drifts outside [-1, 1] from rounding near polar
        // latitudes and extreme tilts.
        let cos_hour = (-lat.tan() * declination.tan()).clamp(-1.0, 1.0);
        let hour_angle = cos_hour.acos();

        let q = self.parameters.solar_constant / (std::f64::consts::PI * radius * radius)
            * (hour_angle * lat.sin() * declination.sin()
                + lat.cos() * declination.cos() * hour_angle.sin());

        if q.is_finite() {
            q.max(0.0)
        } else {
            0.0
        }
    }

    /// Simplified polar formulation for |latitude| within a degree of the
    /// poles: zero through the hemispheric dark season, otherwise a
    /// distance-modulated plateau.
    ///
    /// The north pole is dark for season in [0, 0.2) and [0.7, 1); the
    /// south pole mirrors that interval.
    fn polar_daily(
        &self,
        latitude: FloatValue,
        season: FloatValue,
        orbital: &OrbitalState,
    ) -> FloatValue {
        let northern_dark = season < 0.2 || season >= 0.7;
        let dark = if latitude > 0.0 {
            northern_dark
        } else {
            !northern_dark
        };
        if dark {
            return 0.0;
        }

        let tilt = orbital.axial_tilt.to_radians();
        let q = self.parameters.solar_constant / 4.0
            * tilt.sin()
            * (1.0 + orbital.eccentricity * (std::f64::consts::PI * (season - 0.25)).sin());

        if q.is_finite() {
            q.max(0.0)
        } else {
            0.0
        }
    }

    /// Insolation under the fixed present-day reference orbit.
    pub fn baseline(&self, latitude: FloatValue, season: FloatValue) -> FloatValue {
        self.daily(latitude, season, &OrbitalState::baseline())
    }
}

/// Daily insolation under default kernel parameters.
/// unit: W / m^2
pub fn daily_insolation(
    latitude: FloatValue,
    season: FloatValue,
    eccentricity: FloatValue,
    axial_tilt: FloatValue,
    precession: FloatValue,
) -> FloatValue {
    Insolation::new().daily(
        latitude,
        season,
        &OrbitalState::new(eccentricity, axial_tilt, precession),
    )
}

/// Daily insolation under the present-day reference orbit.
/// unit: W / m^2
pub fn baseline_insolation(latitude: FloatValue, season: FloatValue) -> FloatValue {
    Insolation::new().baseline(latitude, season)
}
