//! Seven-band regional aggregation.
//!
//! Evaluates the point solver on each canonical latitude band and reports
//! the weight-normalized global mean over the bands that produced a valid
//! result. When no band is valid the aggregate falls back to a fixed
//! global temperature so callers always receive a usable field.

use crate::solver::PointSolver;
use log::warn;
use milankovic_core::constants::REGIONAL_FALLBACK_TEMPERATURE_C;
use milankovic_core::inputs::ClimateInputs;
use milankovic_core::results::{BandResult, RegionResult};
use milankovic_core::spatial::{BandGrid, LatitudeBand};
use serde::{Deserialize, Serialize};

/// Regional temperature model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionalModel {
    solver: PointSolver,
    grid: BandGrid,
}

impl RegionalModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: BandGrid) -> Self {
        Self {
            solver: PointSolver::new(),
            grid,
        }
    }

    /// Evaluate all bands with the shared inputs; the latitude field of
    /// `inputs` is ignored and replaced by each band's latitude.
    pub fn solve(&self, inputs: &ClimateInputs) -> RegionResult {
        let mut bands = Vec::with_capacity(LatitudeBand::ALL.len());
        let mut values = Vec::with_capacity(LatitudeBand::ALL.len());

        for band in LatitudeBand::ALL {
            let latitude = band.latitude();
            let outcome = self.solver.solve(&inputs.with_latitude(latitude));
            let calculation_error = outcome.is_fallback();
            let result = outcome.into_result();
            values.push((result.temperature, !calculation_error));
            bands.push(BandResult {
                band,
                latitude,
                name: band.name().to_string(),
                weight: self.grid.weight(band),
                result,
                calculation_error,
            });
        }

        let global_temperature = match self.grid.aggregate_valid(&values) {
            Some(mean) => mean,
            None => {
                warn!("no valid latitude band; reporting fallback global mean");
                REGIONAL_FALLBACK_TEMPERATURE_C
            }
        };

        RegionResult {
            bands,
            global_temperature,
        }
    }
}

/// Regional temperatures under default parameters.
pub fn regional_temperatures(inputs: &ClimateInputs) -> RegionResult {
    RegionalModel::new().solve(inputs)
}
