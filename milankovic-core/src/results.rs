//! Result records produced by the point solver and regional aggregator.

use crate::inputs::SensitivityLevel;
use crate::numerics::FloatValue;
use crate::spatial::LatitudeBand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decomposition of a point temperature into physical contributions.
///
/// All values are degC. When a time scale is applied, the CO2, water
/// vapour, cloud and ice-albedo entries hold the attenuated values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectBreakdown {
    pub insolation: FloatValue,
    pub co2: FloatValue,
    pub water_vapor: FloatValue,
    pub cloud: FloatValue,
    pub ice_albedo: FloatValue,
    pub seasonal: FloatValue,
    pub offset: FloatValue,
}

impl EffectBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all contributions.
    pub fn total(&self) -> FloatValue {
        self.insolation
            + self.co2
            + self.water_vapor
            + self.cloud
            + self.ice_albedo
            + self.seasonal
            + self.offset
    }
}

/// Single-latitude temperature result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointResult {
    /// Final temperature, clamped to the documented bounds.
    /// unit: degC
    pub temperature: FloatValue,
    /// Ice cover fraction in [0, 1].
    pub ice_factor: FloatValue,
    /// Latitude-dependent reference temperature.
    /// unit: degC
    pub base_temperature: FloatValue,
    pub effects: EffectBreakdown,
    pub sensitivity_used: SensitivityLevel,
    /// Whether a non-zero response time attenuated the slow effects.
    pub time_scale_applied: bool,
}

/// Why a point evaluation fell back to the safe result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// One or more inputs were NaN or infinite.
    NonFiniteInput,
    /// An intermediate or the final temperature was NaN or infinite.
    NonFiniteResult,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NonFiniteInput => write!(f, "non-finite input"),
            FallbackReason::NonFiniteResult => write!(f, "non-finite result"),
        }
    }
}

/// Outcome of a point evaluation.
///
/// Both variants carry a complete, finite [`PointResult`]; the fallback
/// variant additionally records why the regular calculation was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointOutcome {
    Computed(PointResult),
    Fallback {
        result: PointResult,
        reason: FallbackReason,
    },
}

impl PointOutcome {
    pub fn result(&self) -> &PointResult {
        match self {
            PointOutcome::Computed(result) => result,
            PointOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> PointResult {
        match self {
            PointOutcome::Computed(result) => result,
            PointOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PointOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            PointOutcome::Computed(_) => None,
            PointOutcome::Fallback { reason, .. } => Some(*reason),
        }
    }
}

/// Point result annotated with its band metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandResult {
    pub band: LatitudeBand,
    /// unit: degrees
    pub latitude: FloatValue,
    pub name: String,
    pub weight: FloatValue,
    pub result: PointResult,
    pub calculation_error: bool,
}

impl BandResult {
    /// A band contributes to the global mean only when its temperature is
    /// finite and the point solve did not fall back.
    pub fn is_valid(&self) -> bool {
        !self.calculation_error && self.result.temperature.is_finite()
    }
}

/// Seven-band evaluation with its weight-normalized global mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub bands: Vec<BandResult>,
    /// unit: degC
    pub global_temperature: FloatValue,
}

impl RegionResult {
    pub fn band(&self, band: LatitudeBand) -> Option<&BandResult> {
        self.bands.iter().find(|entry| entry.band == band)
    }

    pub fn valid_band_count(&self) -> usize {
        self.bands.iter().filter(|entry| entry.is_valid()).count()
    }
}
