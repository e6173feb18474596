//! First-order time response of the climate system.
//!
//! The model is quasi-equilibrium: instead of integrating a differential
//! equation it attenuates each effect with the closed-form first-order
//! relaxation factor
//!
//! ```text
//! r(tau_sim, tau_process) = 1 - exp(-tau_sim / tau_process)
//! ```
//!
//! Fast (atmospheric) effects equilibrate within years; the ice-albedo
//! response tracks the ice sheets over millennia. A zero simulated time
//! scale reports the full equilibrium.

use milankovic_core::constants::{
    TAU_ATMOSPHERE_YEARS, TAU_DEEP_OCEAN_YEARS, TAU_ICE_SHEETS_YEARS,
};
use milankovic_core::numerics::FloatValue;
use serde::{Deserialize, Serialize};

/// Adjustment time constants of the modelled processes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimescales {
    /// unit: years. Default: 1.0
    pub atmosphere: FloatValue,
    /// unit: years. Default: 500.0
    pub deep_ocean: FloatValue,
    /// unit: years. Default: 5000.0
    pub ice_sheets: FloatValue,
}

impl Default for ResponseTimescales {
    fn default() -> Self {
        Self {
            atmosphere: TAU_ATMOSPHERE_YEARS,
            deep_ocean: TAU_DEEP_OCEAN_YEARS,
            ice_sheets: TAU_ICE_SHEETS_YEARS,
        }
    }
}

/// Attenuation factors for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseFactors {
    /// Applies to the CO2, water vapour and cloud effects.
    pub fast: FloatValue,
    /// Applies to the ice-albedo effect.
    pub ice: FloatValue,
    /// False when the caller requested full equilibrium.
    pub applied: bool,
}

impl ResponseFactors {
    pub fn equilibrium() -> Self {
        Self {
            fast: 1.0,
            ice: 1.0,
            applied: false,
        }
    }
}

impl ResponseTimescales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of the equilibrium response realised after `tau_sim`
    /// years for a process with time constant `tau_process`.
    pub fn attenuation(&self, tau_sim: FloatValue, tau_process: FloatValue) -> FloatValue {
        if !tau_sim.is_finite() || !tau_process.is_finite() || tau_process <= 0.0 {
            return 1.0;
        }
        if tau_sim <= 0.0 {
            return 0.0;
        }
        1.0 - (-tau_sim / tau_process).exp()
    }

    /// Factors for a simulated time scale; zero (or non-finite) time
    /// scales report equilibrium.
    pub fn factors(&self, tau_sim: FloatValue) -> ResponseFactors {
        if !tau_sim.is_finite() || tau_sim <= 0.0 {
            return ResponseFactors::equilibrium();
        }
        ResponseFactors {
            fast: self.attenuation(tau_sim, self.atmosphere),
            ice: self.attenuation(tau_sim, self.ice_sheets),
            applied: true,
        }
    }
}
