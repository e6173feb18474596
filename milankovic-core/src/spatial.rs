//! Latitude-band grid for regional aggregation.
//!
//! The model resolves the globe into seven canonical latitude bands, each
//! with an area-motivated aggregation weight. The weights must sum to 1;
//! this is asserted at construction.

use crate::numerics::FloatValue;
use serde::{Deserialize, Serialize};

/// The seven canonical latitude bands, north to south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatitudeBand {
    NorthPole,
    NorthernMidLatitudes,
    NorthernSubtropics,
    Equator,
    SouthernSubtropics,
    SouthernMidLatitudes,
    SouthPole,
}

impl LatitudeBand {
    /// All bands in aggregation order (north to south).
    pub const ALL: [LatitudeBand; 7] = [
        LatitudeBand::NorthPole,
        LatitudeBand::NorthernMidLatitudes,
        LatitudeBand::NorthernSubtropics,
        LatitudeBand::Equator,
        LatitudeBand::SouthernSubtropics,
        LatitudeBand::SouthernMidLatitudes,
        LatitudeBand::SouthPole,
    ];

    /// Representative latitude of the band.
    /// unit: degrees
    pub fn latitude(&self) -> FloatValue {
        match self {
            LatitudeBand::NorthPole => 90.0,
            LatitudeBand::NorthernMidLatitudes => 65.0,
            LatitudeBand::NorthernSubtropics => 30.0,
            LatitudeBand::Equator => 0.0,
            LatitudeBand::SouthernSubtropics => -30.0,
            LatitudeBand::SouthernMidLatitudes => -65.0,
            LatitudeBand::SouthPole => -90.0,
        }
    }

    /// Human-readable band name.
    pub fn name(&self) -> &'static str {
        match self {
            LatitudeBand::NorthPole => "North Pole",
            LatitudeBand::NorthernMidLatitudes => "Northern Mid-Latitudes",
            LatitudeBand::NorthernSubtropics => "Northern Subtropics",
            LatitudeBand::Equator => "Equator",
            LatitudeBand::SouthernSubtropics => "Southern Subtropics",
            LatitudeBand::SouthernMidLatitudes => "Southern Mid-Latitudes",
            LatitudeBand::SouthPole => "South Pole",
        }
    }

    /// Position of the band in aggregation order.
    pub fn index(&self) -> usize {
        LatitudeBand::ALL
            .iter()
            .position(|band| band == self)
            .unwrap_or(0)
    }
}

/// Seven-band aggregation grid.
///
/// Weights follow band order north to south and must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandGrid {
    weights: [FloatValue; 7],
}

impl BandGrid {
    /// Canonical weights: poles 0.05, mid-latitudes 0.15, subtropics 0.25,
    /// equator 0.10, mirrored across hemispheres.
    pub fn canonical() -> Self {
        Self {
            weights: [0.05, 0.15, 0.25, 0.10, 0.25, 0.15, 0.05],
        }
    }

    /// Create a grid with custom weights.
    ///
    /// # Panics
    ///
    /// Panics if weights do not sum to approximately 1.0 (within 1e-6).
    pub fn with_weights(weights: [FloatValue; 7]) -> Self {
        let sum: FloatValue = weights.iter().sum();
        assert!(
            (sum - 1.0).abs() < 1e-6,
            "Band weights must sum to 1.0, got {}",
            sum
        );
        Self { weights }
    }

    pub fn weight(&self, band: LatitudeBand) -> FloatValue {
        self.weights[band.index()]
    }

    pub fn weights(&self) -> &[FloatValue; 7] {
        &self.weights
    }

    /// Weighted mean over all seven bands.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not 7.
    pub fn aggregate_global(&self, values: &[FloatValue]) -> FloatValue {
        assert_eq!(values.len(), 7, "BandGrid expects exactly 7 band values");
        values
            .iter()
            .zip(self.weights.iter())
            .map(|(v, w)| v * w)
            .sum()
    }

    /// Weight-normalized mean over the bands flagged valid.
    ///
    /// Returns `None` when no band is valid.
    pub fn aggregate_valid(&self, values: &[(FloatValue, bool)]) -> Option<FloatValue> {
        assert_eq!(values.len(), 7, "BandGrid expects exactly 7 band values");
        let mut weighted = 0.0;
        let mut weight_sum = 0.0;
        for ((value, valid), weight) in values.iter().zip(self.weights.iter()) {
            if *valid && value.is_finite() {
                weighted += value * weight;
                weight_sum += weight;
            }
        }
        if weight_sum > 0.0 {
            Some(weighted / weight_sum)
        } else {
            None
        }
    }
}

impl Default for BandGrid {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_canonical_weights_sum_to_one() {
        let sum: FloatValue = BandGrid::canonical().weights().iter().sum();
        assert!(is_close!(sum, 1.0), "weights sum to {}", sum);
    }

    #[test]
    fn test_band_order_is_north_to_south() {
        let latitudes: Vec<FloatValue> =
            LatitudeBand::ALL.iter().map(|b| b.latitude()).collect();
        assert_eq!(latitudes, vec![90.0, 65.0, 30.0, 0.0, -30.0, -65.0, -90.0]);
    }

    #[test]
    #[should_panic(expected = "must sum to 1.0")]
    fn test_bad_weights_rejected() {
        BandGrid::with_weights([0.5, 0.1, 0.1, 0.1, 0.1, 0.1, 0.5]);
    }

    #[test]
    fn test_aggregate_global_is_weighted_mean() {
        let grid = BandGrid::canonical();
        let uniform = [12.0; 7];
        assert!(is_close!(grid.aggregate_global(&uniform), 12.0));

        // Poles contribute 0.05 each.
        let polar = [10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0];
        assert!(is_close!(grid.aggregate_global(&polar), 1.0));
    }

    #[test]
    fn test_aggregate_valid_renormalizes() {
        let grid = BandGrid::canonical();
        let mut values = [(10.0, true); 7];
        values[0] = (1000.0, false);
        let mean = grid.aggregate_valid(&values).expect("six valid bands");
        assert!(
            is_close!(mean, 10.0),
            "invalid band must be excluded, got {}",
            mean
        );
    }

    #[test]
    fn test_aggregate_valid_none_when_all_invalid() {
        let grid = BandGrid::canonical();
        let values = [(10.0, false); 7];
        assert!(grid.aggregate_valid(&values).is_none());
    }

    #[test]
    fn test_non_finite_value_treated_as_invalid() {
        let grid = BandGrid::canonical();
        let mut values = [(5.0, true); 7];
        values[3] = (FloatValue::NAN, true);
        let mean = grid.aggregate_valid(&values).expect("six valid bands");
        assert!(is_close!(mean, 5.0));
    }
}
