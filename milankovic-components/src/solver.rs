//! Single-latitude temperature solver.
//!
//! Composes the insolation, forcing, feedback and time-response
//! components into one temperature decomposition:
//!
//! 1. baseline temperature for the latitude;
//! 2. insolation effect from the normalized difference against the
//!    reference orbit;
//! 3. greenhouse effect from the CO2 forcing and the chosen sensitivity,
//!    amplified by water vapour and clouds;
//! 4. ice cover from the preliminary temperature, cooling through the
//!    latitude-weighted ice-albedo response;
//! 5. seasonal overlay and caller offset;
//! 6. per-process time attenuation of the slow effects.
//!
//! The solver never fails across its boundary: non-finite inputs or
//! intermediates produce a fallback result that is flagged, finite and
//! within bounds.

use crate::feedback::SurfaceFeedbacks;
use crate::forcing::GreenhouseForcing;
use crate::insolation::Insolation;
use crate::response::ResponseTimescales;
use log::warn;
use milankovic_core::constants::{TEMPERATURE_MAX_C, TEMPERATURE_MIN_C};
use milankovic_core::inputs::ClimateInputs;
use milankovic_core::numerics::FloatValue;
use milankovic_core::results::{EffectBreakdown, FallbackReason, PointOutcome, PointResult};
use serde::{Deserialize, Serialize};

/// Parameters specific to the solver composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParameters {
    /// Temperature effect per unit normalized insolation difference.
    /// unit: degC
    /// Default: 10.0
    pub insolation_gain: FloatValue,
    /// Reference insolation below which the normalized difference is
    /// taken as zero.
    /// unit: W / m^2
    /// Default: 1e-3
    pub insolation_floor: FloatValue,
    /// Ice cover reported by the fallback result polewards of 60 degrees.
    /// Default: 0.8
    pub fallback_polar_ice: FloatValue,
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            insolation_gain: 10.0,
            insolation_floor: 1e-3,
            fallback_polar_ice: 0.8,
        }
    }
}

/// Point temperature solver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointSolver {
    parameters: SolverParameters,
    insolation: Insolation,
    forcing: GreenhouseForcing,
    feedbacks: SurfaceFeedbacks,
    timescales: ResponseTimescales,
}

impl PointSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: SolverParameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Evaluate the temperature decomposition for one input record.
    ///
    /// Always returns a complete, finite result; the fallback variant
    /// flags inputs the regular calculation could not handle.
    pub fn solve(&self, inputs: &ClimateInputs) -> PointOutcome {
        if !inputs.is_finite() {
            return self.fallback(inputs, FallbackReason::NonFiniteInput);
        }

        let latitude = inputs.latitude;
        let season = inputs.wrapped_season();
        let orbital = inputs.orbital.normalized();

        let base_temperature = self.feedbacks.baseline_temperature(latitude);

        // Normalized insolation difference against the reference orbit.
        let q = self.insolation.daily(latitude, season, &orbital);
        let q_base = self.insolation.baseline(latitude, season);
        let insolation_delta = if q_base > self.parameters.insolation_floor {
            (q - q_base) / q_base
        } else {
            0.0
        };
        let insolation_effect = self.parameters.insolation_gain * insolation_delta;

        let sensitivity = inputs.sensitivity.celsius_per_wm2();
        let co2_effect = sensitivity * self.forcing.total(&inputs.atmosphere);
        let water_vapor_effect = self.feedbacks.water_vapor_effect(co2_effect);
        let cloud_effect = self.feedbacks.cloud_effect(co2_effect);

        // Ice cover responds to the climate before the seasonal overlay.
        let preliminary = base_temperature
            + insolation_effect
            + co2_effect
            + water_vapor_effect
            + cloud_effect;
        let ice_factor = self.feedbacks.ice_fraction(preliminary, latitude);
        let ice_albedo_effect = -self.feedbacks.ice_albedo_response(latitude) * ice_factor;

        let seasonal_effect = self.feedbacks.seasonal_variation(latitude, season);

        let factors = self.timescales.factors(inputs.time_scale_years);
        let effects = EffectBreakdown {
            insolation: insolation_effect,
            co2: co2_effect * factors.fast,
            water_vapor: water_vapor_effect * factors.fast,
            cloud: cloud_effect * factors.fast,
            ice_albedo: ice_albedo_effect * factors.ice,
            seasonal: seasonal_effect,
            offset: inputs.temp_offset,
        };

        let temperature = base_temperature + effects.total();
        if !temperature.is_finite() {
            return self.fallback(inputs, FallbackReason::NonFiniteResult);
        }

        PointOutcome::Computed(PointResult {
            temperature: temperature.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            ice_factor,
            base_temperature,
            effects,
            sensitivity_used: inputs.sensitivity,
            time_scale_applied: factors.applied,
        })
    }

    /// Safe result used when the regular calculation cannot run: the
    /// baseline temperature for the latitude, a coarse ice estimate, and
    /// zero effects.
    fn fallback(&self, inputs: &ClimateInputs, reason: FallbackReason) -> PointOutcome {
        let latitude = if inputs.latitude.is_finite() {
            inputs.latitude
        } else {
            0.0
        };
        warn!(
            "point solve fell back at latitude {}: {}",
            latitude, reason
        );
        let base_temperature = self.feedbacks.baseline_temperature(latitude);
        let ice_factor = if latitude.abs() > 60.0 {
            self.parameters.fallback_polar_ice
        } else {
            0.0
        };
        PointOutcome::Fallback {
            result: PointResult {
                temperature: base_temperature.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
                ice_factor,
                base_temperature,
                effects: EffectBreakdown::zero(),
                sensitivity_used: inputs.sensitivity,
                time_scale_applied: false,
            },
            reason,
        }
    }
}

/// Point temperature under default parameters.
pub fn point_temperature(inputs: &ClimateInputs) -> PointOutcome {
    PointSolver::new().solve(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use milankovic_core::inputs::SensitivityLevel;

    fn present_day(latitude: FloatValue) -> ClimateInputs {
        ClimateInputs::default()
            .with_latitude(latitude)
            .with_season(0.5)
            .with_co2(415.0)
    }

    #[test]
    fn test_equilibrium_decomposition_at_equator() {
        let outcome = point_temperature(&present_day(0.0));
        assert!(!outcome.is_fallback());
        let result = outcome.result();

        assert_eq!(result.base_temperature, 25.0);
        // Reference orbit: no insolation anomaly.
        assert_relative_eq!(result.effects.insolation, 0.0, epsilon = 1e-9);
        // Medium sensitivity times the 415 ppm forcing.
        let expected_co2 = 0.75 * 5.35 * (415.0_f64 / 280.0).ln();
        assert_relative_eq!(result.effects.co2, expected_co2, epsilon = 1e-9);
        assert_relative_eq!(
            result.effects.water_vapor,
            0.6 * expected_co2,
            epsilon = 1e-9
        );
        assert_relative_eq!(result.effects.cloud, 0.1 * expected_co2, epsilon = 1e-9);
        // Warm tropics: no ice, no seasonal amplitude.
        assert!(result.ice_factor < 1e-6);
        assert_relative_eq!(result.effects.seasonal, 0.0, epsilon = 1e-9);
        assert!(!result.time_scale_applied);
    }

    #[test]
    fn test_temperature_within_bounds_for_extreme_co2() {
        let outcome = point_temperature(&present_day(0.0).with_co2(1e6));
        let result = outcome.result();
        assert!(result.temperature <= TEMPERATURE_MAX_C);
        assert!(result.temperature >= TEMPERATURE_MIN_C);
    }

    #[test]
    fn test_polar_ice_cools_through_albedo() {
        let outcome = point_temperature(&present_day(90.0));
        let result = outcome.result();
        assert!(result.ice_factor > 0.99, "polar cap must be ice covered");
        assert!(
            result.effects.ice_albedo < -3.9,
            "full polar ice must cool by the polar response strength"
        );
    }

    #[test]
    fn test_co2_warming_is_monotonic_with_time_scale() {
        let mut previous = FloatValue::NEG_INFINITY;
        for co2 in [180.0, 280.0, 400.0, 560.0, 800.0, 1500.0] {
            let inputs = present_day(65.0).with_co2(co2).with_time_scale(100.0);
            let temperature = point_temperature(&inputs).result().temperature;
            assert!(
                temperature >= previous,
                "warming must not reverse between CO2 steps ({} ppm)",
                co2
            );
            previous = temperature;
        }
    }

    #[test]
    fn test_time_scale_attenuates_slow_effects() {
        let equilibrium = point_temperature(&present_day(65.0)).result().effects;
        let century = point_temperature(&present_day(65.0).with_time_scale(100.0))
            .result()
            .effects;
        // Fast effects are essentially settled after a century.
        assert_relative_eq!(century.co2, equilibrium.co2, epsilon = 1e-6);
        // The ice-albedo response has barely begun.
        assert!(
            century.ice_albedo.abs() < equilibrium.ice_albedo.abs() * 0.05,
            "ice response after a century ({}) must be a sliver of equilibrium ({})",
            century.ice_albedo,
            equilibrium.ice_albedo
        );
    }

    #[test]
    fn test_long_time_scale_converges_to_equilibrium() {
        let equilibrium = point_temperature(&present_day(30.0)).result().temperature;
        let converged = point_temperature(&present_day(30.0).with_time_scale(1e7))
            .result()
            .temperature;
        assert!(
            (equilibrium - converged).abs() < 1e-3,
            "long time scales must converge: {} vs {}",
            equilibrium,
            converged
        );
    }

    #[test]
    fn test_fallback_on_non_finite_input() {
        let mut inputs = present_day(52.0);
        inputs.atmosphere.co2 = FloatValue::NAN;
        let outcome = point_temperature(&inputs);
        assert!(outcome.is_fallback());
        assert_eq!(
            outcome.fallback_reason(),
            Some(FallbackReason::NonFiniteInput)
        );
        let result = outcome.result();
        assert_eq!(result.temperature, -5.0, "fallback reports the baseline");
        assert_eq!(result.ice_factor, 0.0);
        assert_eq!(result.effects, EffectBreakdown::zero());
    }

    #[test]
    fn test_fallback_polar_ice_estimate() {
        let mut inputs = present_day(75.0);
        inputs.season = FloatValue::INFINITY;
        let outcome = point_temperature(&inputs);
        assert!(outcome.is_fallback());
        assert_eq!(outcome.result().ice_factor, 0.8);
    }

    #[test]
    fn test_sensitivity_levels_order_the_response() {
        let co2 = 560.0;
        let mut temperatures = Vec::new();
        for sensitivity in [
            SensitivityLevel::Low,
            SensitivityLevel::Medium,
            SensitivityLevel::High,
        ] {
            let mut inputs = present_day(30.0).with_co2(co2);
            inputs.sensitivity = sensitivity;
            temperatures.push(point_temperature(&inputs).result().temperature);
        }
        assert!(
            temperatures[0] < temperatures[1] && temperatures[1] < temperatures[2],
            "higher sensitivity must warm more: {:?}",
            temperatures
        );
    }

    #[test]
    fn test_offset_is_reported_and_applied() {
        let mut inputs = present_day(30.0);
        inputs.temp_offset = 2.5;
        let with_offset = point_temperature(&inputs).into_result();
        let without = point_temperature(&present_day(30.0)).into_result();
        assert_eq!(with_offset.effects.offset, 2.5);
        assert_relative_eq!(
            with_offset.temperature,
            without.temperature + 2.5,
            epsilon = 1e-9
        );
    }
}
