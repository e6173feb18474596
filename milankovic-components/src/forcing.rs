//! Greenhouse-gas and aerosol radiative forcing.
//!
//! CO2 uses the standard logarithmic relationship
//! `F = 5.35 * ln(C / C0)` with the pre-industrial reference C0 = 280 ppm.
//! CH4 and N2O use square-root relationships against their pre-industrial
//! references; aerosols combine a linear direct term with a saturating
//! indirect term. All concentrations are floored at 1 before taking
//! logarithms or roots.

use milankovic_core::constants::{
    CH4_PREINDUSTRIAL_PPB, CO2_PREINDUSTRIAL_PPM, N2O_PREINDUSTRIAL_PPB,
};
use milankovic_core::inputs::Atmosphere;
use milankovic_core::numerics::{safe_ln, FloatValue};
use serde::{Deserialize, Serialize};

/// Parameters for the radiative forcing calculations.
///
/// Coefficients give W/m^2 per logarithmic (CO2), square-root (CH4, N2O)
/// or linear/saturating (aerosol) concentration unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForcingParameters {
    /// Default: 5.35
    pub co2_coefficient: FloatValue,
    /// unit: ppm. Default: 280.0
    pub co2_reference: FloatValue,
    /// Default: 0.036
    pub ch4_coefficient: FloatValue,
    /// unit: ppb. Default: 700.0
    pub ch4_reference: FloatValue,
    /// Default: 0.12
    pub n2o_coefficient: FloatValue,
    /// unit: ppb. Default: 270.0
    pub n2o_reference: FloatValue,
    /// Direct aerosol term per unit optical depth. Default: -25.0
    pub aerosol_direct: FloatValue,
    /// Indirect (cloud-mediated) aerosol term. Default: -0.7
    pub aerosol_indirect: FloatValue,
    /// Optical-depth scaling inside the indirect logarithm. Default: 10.0
    pub aerosol_od_scale: FloatValue,
}

impl Default for ForcingParameters {
    fn default() -> Self {
        Self {
            co2_coefficient: 5.35,
            co2_reference: CO2_PREINDUSTRIAL_PPM,
            ch4_coefficient: 0.036,
            ch4_reference: CH4_PREINDUSTRIAL_PPB,
            n2o_coefficient: 0.12,
            n2o_reference: N2O_PREINDUSTRIAL_PPB,
            aerosol_direct: -25.0,
            aerosol_indirect: -0.7,
            aerosol_od_scale: 10.0,
        }
    }
}

/// Radiative forcing component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreenhouseForcing {
    parameters: ForcingParameters,
}

impl GreenhouseForcing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: ForcingParameters) -> Self {
        Self { parameters }
    }

    /// CO2 forcing relative to the pre-industrial reference.
    /// unit: W / m^2
    pub fn co2(&self, concentration: FloatValue) -> FloatValue {
        self.parameters.co2_coefficient
            * safe_ln(concentration.max(1.0) / self.parameters.co2_reference, 1e-12)
    }

    /// CH4 forcing relative to the pre-industrial reference.
    /// unit: W / m^2
    pub fn ch4(&self, concentration: FloatValue) -> FloatValue {
        self.parameters.ch4_coefficient
            * (concentration.max(1.0).sqrt() - self.parameters.ch4_reference.sqrt())
    }

    /// N2O forcing relative to the pre-industrial reference.
    /// unit: W / m^2
    pub fn n2o(&self, concentration: FloatValue) -> FloatValue {
        self.parameters.n2o_coefficient
            * (concentration.max(1.0).sqrt() - self.parameters.n2o_reference.sqrt())
    }

    /// Aerosol forcing for an optical depth.
    /// unit: W / m^2
    pub fn aerosol(&self, optical_depth: FloatValue) -> FloatValue {
        let od = optical_depth.max(0.0);
        self.parameters.aerosol_direct * od
            + self.parameters.aerosol_indirect
                * safe_ln(1.0 + self.parameters.aerosol_od_scale * od, 1e-12)
    }

    /// Combined forcing for an atmosphere: CO2 plus whichever optional
    /// species are present.
    /// unit: W / m^2
    pub fn total(&self, atmosphere: &Atmosphere) -> FloatValue {
        let mut forcing = self.co2(atmosphere.co2);
        if let Some(ch4) = atmosphere.ch4 {
            forcing += self.ch4(ch4);
        }
        if let Some(n2o) = atmosphere.n2o {
            forcing += self.n2o(n2o);
        }
        if let Some(od) = atmosphere.aerosol_od {
            forcing += self.aerosol(od);
        }
        forcing
    }
}

/// CO2 forcing under default parameters.
/// unit: W / m^2
pub fn co2_forcing(concentration: FloatValue) -> FloatValue {
    GreenhouseForcing::new().co2(concentration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_co2_forcing_at_preindustrial_is_zero() {
        assert!(co2_forcing(280.0).abs() < 1e-10);
    }

    #[test]
    fn test_co2_forcing_at_doubling() {
        // 5.35 * ln(2) = 3.708 W/m^2
        assert_relative_eq!(co2_forcing(560.0), 5.35 * 2.0_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_co2_forcing_strictly_increasing() {
        let levels = [180.0, 280.0, 400.0, 560.0, 800.0, 1500.0];
        for pair in levels.windows(2) {
            assert!(
                co2_forcing(pair[0]) < co2_forcing(pair[1]),
                "forcing must increase from {} to {} ppm",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_co2_concentration_floored_at_one() {
        assert_eq!(co2_forcing(0.0), co2_forcing(1.0));
        assert!(co2_forcing(0.0).is_finite());
        assert!(co2_forcing(-50.0).is_finite());
    }

    #[test]
    fn test_trace_gas_forcing_zero_at_reference() {
        let forcing = GreenhouseForcing::new();
        assert!(forcing.ch4(700.0).abs() < 1e-10);
        assert!(forcing.n2o(270.0).abs() < 1e-10);
        assert!(forcing.ch4(1800.0) > 0.0, "elevated CH4 must warm");
        assert!(forcing.n2o(100.0) < 0.0, "depleted N2O must cool");
    }

    #[test]
    fn test_aerosols_cool() {
        let forcing = GreenhouseForcing::new();
        assert_eq!(forcing.aerosol(0.0), 0.0);
        assert!(forcing.aerosol(0.1) < 0.0);
        assert!(
            forcing.aerosol(0.2) < forcing.aerosol(0.1),
            "thicker aerosol must cool more"
        );
    }

    #[test]
    fn test_total_with_co2_only_equals_co2_term() {
        let forcing = GreenhouseForcing::new();
        let atmosphere = Atmosphere::with_co2(415.0);
        assert_relative_eq!(
            forcing.total(&atmosphere),
            forcing.co2(415.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_total_accumulates_optional_species() {
        let forcing = GreenhouseForcing::new();
        let atmosphere = Atmosphere {
            co2: 415.0,
            ch4: Some(1900.0),
            n2o: Some(330.0),
            aerosol_od: Some(0.1),
        };
        let expected = forcing.co2(415.0)
            + forcing.ch4(1900.0)
            + forcing.n2o(330.0)
            + forcing.aerosol(0.1);
        assert_relative_eq!(forcing.total(&atmosphere), expected, epsilon = 1e-12);
    }
}
