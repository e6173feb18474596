//! Climate response model for the Milankovic cycle visualisation.
//!
//! A pure, deterministic numerical engine: given Earth's orbital
//! parameters, atmospheric composition, latitude, season and a response
//! time scale, it produces a self-consistent temperature field, an
//! ice-coverage field, and a decomposition into physical contributions.
//! The visualisation layers consume the narrow functional surface
//! re-exported here and contribute no physics of their own.
//!
//! ```
//! use milankovic::{regional_temperatures, ClimateInputs};
//!
//! let inputs = ClimateInputs::default().with_co2(415.0).with_season(0.5);
//! let region = regional_temperatures(&inputs);
//! assert!(region.global_temperature.is_finite());
//! assert_eq!(region.bands.len(), 7);
//! ```
//!
//! Everything is evaluated per call with no shared state; concurrent use
//! needs no synchronisation, and identical inputs give identical outputs.

pub use milankovic_core::constants;
pub use milankovic_core::errors::{MilankovicError, MilankovicResult};
pub use milankovic_core::inputs::{Atmosphere, ClimateInputs, OrbitalState, SensitivityLevel};
pub use milankovic_core::numerics::{
    normalize_temperature, normalize_temperature_in, smooth_temperature, smooth_temperature_by,
    FloatValue, ValueRange,
};
pub use milankovic_core::results::{
    BandResult, EffectBreakdown, FallbackReason, PointOutcome, PointResult, RegionResult,
};
pub use milankovic_core::spatial::{BandGrid, LatitudeBand};

pub use milankovic_components::feedback::{ice_fraction, seasonal_variation, SurfaceFeedbacks};
pub use milankovic_components::forcing::{co2_forcing, GreenhouseForcing};
pub use milankovic_components::insolation::{baseline_insolation, daily_insolation, Insolation};
pub use milankovic_components::regional::{regional_temperatures, RegionalModel};
pub use milankovic_components::response::ResponseTimescales;
pub use milankovic_components::scenarios::{
    orbital_at_year, standard_catalog, ParameterRanges, Preset,
};
pub use milankovic_components::solver::{point_temperature, PointSolver};
pub use milankovic_components::validator::{
    run_validation, CheckResult, SanityModel, ValidationReport, Validator,
};
