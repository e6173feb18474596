//! Surface feedbacks: baseline climate, ice cover, seasonal overlay,
//! fast amplifiers and the ice-albedo response.
//!
//! The feedback chain works from a coarse latitudinal baseline climate.
//! Ice cover follows a logistic in the distance of the preliminary
//! temperature from a latitude-dependent freezing threshold; its cooling
//! is scaled by a response strength that grows towards the poles. Water
//! vapour and clouds amplify the greenhouse effect with fixed gains.

use milankovic_core::numerics::{finite_or, FloatValue};
use serde::{Deserialize, Serialize};

/// Reference baseline temperatures by absolute latitude.
/// unit: (degrees, degC)
const BASELINE_REFERENCES: [(FloatValue, FloatValue); 4] =
    [(0.0, 25.0), (30.0, 15.0), (65.0, -5.0), (90.0, -20.0)];

/// Parameters for the surface feedback chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackParameters {
    /// Freezing threshold scale; the threshold is `scale * cos(latitude)`.
    /// unit: degC
    /// Default: 2.0
    pub ice_threshold_scale: FloatValue,
    /// Width of the logistic ice transition.
    /// unit: degC
    /// Default: 1.5
    pub ice_transition_width: FloatValue,
    /// Clamp for the logistic exponent.
    /// Default: 50.0
    pub logistic_clamp: FloatValue,
    /// Seasonal amplitude scale; the amplitude is `scale * sin(|latitude|)`.
    /// unit: degC
    /// Default: 20.0
    pub seasonal_amplitude: FloatValue,
    /// Water vapour amplification of the greenhouse temperature effect.
    /// Default: 0.6
    pub water_vapor_gain: FloatValue,
    /// Cloud amplification of the greenhouse temperature effect.
    /// Default: 0.1
    pub cloud_gain: FloatValue,
    /// Ice-albedo response strength at the equator.
    /// unit: degC
    /// Default: 0.5
    pub ice_albedo_equator: FloatValue,
    /// Ice-albedo response strength at the poles.
    /// unit: degC
    /// Default: 4.0
    pub ice_albedo_pole: FloatValue,
    /// Warm adjustment applied to southern-hemisphere baselines.
    /// unit: degC
    /// Default: 1.0
    pub southern_offset: FloatValue,
}

impl Default for FeedbackParameters {
    fn default() -> Self {
        Self {
            ice_threshold_scale: 2.0,
            ice_transition_width: 1.5,
            logistic_clamp: 50.0,
            seasonal_amplitude: 20.0,
            water_vapor_gain: 0.6,
            cloud_gain: 0.1,
            ice_albedo_equator: 0.5,
            ice_albedo_pole: 4.0,
            southern_offset: 1.0,
        }
    }
}

/// Surface feedback component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceFeedbacks {
    parameters: FeedbackParameters,
}

impl SurfaceFeedbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: FeedbackParameters) -> Self {
        Self { parameters }
    }

    /// Baseline temperature for a latitude, from the nearest reference
    /// magnitude. Southern latitudes read the mirrored reference plus a
    /// small warm offset (the southern hemisphere is ocean-dominated).
    /// unit: degC
    pub fn baseline_temperature(&self, latitude: FloatValue) -> FloatValue {
        if !latitude.is_finite() {
            return BASELINE_REFERENCES[0].1;
        }
        let magnitude = latitude.abs();
        let mut nearest = BASELINE_REFERENCES[0];
        for reference in BASELINE_REFERENCES.iter().skip(1) {
            if (reference.0 - magnitude).abs() < (nearest.0 - magnitude).abs() {
                nearest = *reference;
            }
        }
        if latitude < 0.0 {
            nearest.1 + self.parameters.southern_offset
        } else {
            nearest.1
        }
    }

    /// Ice cover fraction at a temperature and latitude.
    ///
    /// Logistic in the distance from the latitude-dependent freezing
    /// threshold `2 * cos(latitude)`: cold temperatures saturate towards
    /// full cover, warm temperatures towards none. Returns 0.5 when the
    /// logistic cannot be evaluated.
    pub fn ice_fraction(&self, temperature: FloatValue, latitude: FloatValue) -> FloatValue {
        if !temperature.is_finite() || !latitude.is_finite() {
            return 0.5;
        }
        let threshold = self.parameters.ice_threshold_scale * latitude.to_radians().cos();
        let exponent = ((temperature - threshold) / self.parameters.ice_transition_width)
            .clamp(-self.parameters.logistic_clamp, self.parameters.logistic_clamp);
        let fraction = 1.0 / (1.0 + exponent.exp());
        finite_or(fraction, 0.5).clamp(0.0, 1.0)
    }

    /// Seasonal temperature overlay.
    ///
    /// Amplitude grows with latitude as `20 * sin(|latitude|)`; the phase
    /// is -pi/2 in the north and +pi/2 in the south so the hemispheres
    /// peak half a year apart. The phase flips across the equator, where
    /// the amplitude vanishes.
    /// unit: degC
    pub fn seasonal_variation(&self, latitude: FloatValue, season: FloatValue) -> FloatValue {
        if !latitude.is_finite() || !season.is_finite() {
            return 0.0;
        }
        let amplitude = self.parameters.seasonal_amplitude * latitude.to_radians().abs().sin();
        let phase = if latitude >= 0.0 {
            -std::f64::consts::FRAC_PI_2
        } else {
            std::f64::consts::FRAC_PI_2
        };
        let value = amplitude
            * (2.0 * std::f64::consts::PI * season.rem_euclid(1.0) + phase).sin();
        finite_or(value, 0.0)
    }

    /// Ice-albedo response strength at a latitude, interpolating between
    /// the equatorial and polar strengths with the squared sine of
    /// latitude.
    /// unit: degC
    pub fn ice_albedo_response(&self, latitude: FloatValue) -> FloatValue {
        if !latitude.is_finite() {
            return self.parameters.ice_albedo_equator;
        }
        let sin2 = latitude.to_radians().sin().powi(2);
        self.parameters.ice_albedo_equator
            + (self.parameters.ice_albedo_pole - self.parameters.ice_albedo_equator) * sin2
    }

    /// Water vapour amplification of a greenhouse temperature effect.
    /// unit: degC
    pub fn water_vapor_effect(&self, co2_effect: FloatValue) -> FloatValue {
        self.parameters.water_vapor_gain * finite_or(co2_effect, 0.0)
    }

    /// Cloud amplification of a greenhouse temperature effect.
    /// unit: degC
    pub fn cloud_effect(&self, co2_effect: FloatValue) -> FloatValue {
        self.parameters.cloud_gain * finite_or(co2_effect, 0.0)
    }
}

/// Ice cover fraction under default parameters.
pub fn ice_fraction(temperature: FloatValue, latitude: FloatValue) -> FloatValue {
    SurfaceFeedbacks::new().ice_fraction(temperature, latitude)
}

/// Seasonal temperature overlay under default parameters.
/// unit: degC
pub fn seasonal_variation(latitude: FloatValue, season: FloatValue) -> FloatValue {
    SurfaceFeedbacks::new().seasonal_variation(latitude, season)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn feedbacks() -> SurfaceFeedbacks {
        SurfaceFeedbacks::new()
    }

    #[test]
    fn test_baseline_at_references() {
        let fb = feedbacks();
        assert_eq!(fb.baseline_temperature(0.0), 25.0);
        assert_eq!(fb.baseline_temperature(30.0), 15.0);
        assert_eq!(fb.baseline_temperature(65.0), -5.0);
        assert_eq!(fb.baseline_temperature(90.0), -20.0);
    }

    #[test]
    fn test_baseline_southern_offset() {
        let fb = feedbacks();
        assert_eq!(fb.baseline_temperature(-30.0), 16.0);
        assert_eq!(fb.baseline_temperature(-90.0), -19.0);
    }

    #[test]
    fn test_baseline_uses_nearest_reference() {
        let fb = feedbacks();
        // 52.37 is closer to 65 than to 30.
        assert_eq!(fb.baseline_temperature(52.37), -5.0);
        assert_eq!(fb.baseline_temperature(10.0), 25.0);
        assert_eq!(fb.baseline_temperature(80.0), -20.0);
    }

    #[test]
    fn test_ice_fraction_saturates() {
        let fb = feedbacks();
        assert!(
            fb.ice_fraction(-40.0, 65.0) > 0.99,
            "deep cold must be ice covered"
        );
        assert!(
            fb.ice_fraction(25.0, 0.0) < 0.01,
            "warm tropics must be ice free"
        );
    }

    #[test]
    fn test_ice_fraction_midpoint_at_threshold() {
        let fb = feedbacks();
        // At the threshold temperature the logistic sits at 1/2.
        let threshold = 2.0 * 65.0_f64.to_radians().cos();
        assert_relative_eq!(fb.ice_fraction(threshold, 65.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_ice_fraction_bounds_and_guards() {
        let fb = feedbacks();
        for temperature in [-1000.0, -5.0, 0.0, 5.0, 1000.0] {
            let f = fb.ice_fraction(temperature, 45.0);
            assert!((0.0..=1.0).contains(&f));
        }
        assert_eq!(fb.ice_fraction(FloatValue::NAN, 45.0), 0.5);
    }

    #[test]
    fn test_seasonal_antisymmetry_between_hemispheres() {
        let fb = feedbacks();
        for season in [0.0, 0.2, 0.4, 0.5, 0.8] {
            for latitude in [15.0, 45.0, 65.0, 90.0] {
                let north = fb.seasonal_variation(latitude, season);
                let south = fb.seasonal_variation(-latitude, season);
                assert!(
                    (north + south).abs() < 1e-9,
                    "seasonal overlay must cancel across hemispheres at lat {} season {}",
                    latitude,
                    season
                );
            }
        }
    }

    #[test]
    fn test_seasonal_peaks_in_hemispheric_summer() {
        let fb = feedbacks();
        let north_summer = fb.seasonal_variation(65.0, 0.5);
        assert_relative_eq!(
            north_summer,
            20.0 * 65.0_f64.to_radians().sin(),
            epsilon = 1e-9
        );
        assert!(fb.seasonal_variation(65.0, 0.0) < 0.0, "northern winter cools");
    }

    #[test]
    fn test_seasonal_vanishes_at_equator() {
        let fb = feedbacks();
        for season in [0.0, 0.25, 0.5, 0.75] {
            assert!(fb.seasonal_variation(0.0, season).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ice_albedo_response_interpolates() {
        let fb = feedbacks();
        assert_relative_eq!(fb.ice_albedo_response(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(fb.ice_albedo_response(90.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(fb.ice_albedo_response(-90.0), 4.0, epsilon = 1e-12);
        let mid = fb.ice_albedo_response(45.0);
        assert!(mid > 0.5 && mid < 4.0);
    }

    #[test]
    fn test_amplifier_gains() {
        let fb = feedbacks();
        assert_relative_eq!(fb.water_vapor_effect(2.0), 1.2, epsilon = 1e-12);
        assert_relative_eq!(fb.cloud_effect(2.0), 0.2, epsilon = 1e-12);
        assert_eq!(fb.water_vapor_effect(FloatValue::NAN), 0.0);
    }
}
