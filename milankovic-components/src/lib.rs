//! Physics components of the Milankovic climate response model.
//!
//! The model is a pipeline of pure functions over the types in
//! `milankovic-core`:
//!
//! - `insolation`: daily top-of-atmosphere insolation for an orbital
//!   configuration
//! - `forcing`: greenhouse-gas and aerosol radiative forcing
//! - `feedback`: surface feedbacks (baseline temperature, ice cover,
//!   seasonal overlay, amplifiers, ice-albedo response)
//! - `response`: first-order relaxation over process time constants
//! - `solver`: single-latitude temperature decomposition
//! - `regional`: seven-band aggregation to a global mean
//! - `scenarios`: paleoclimate preset catalog and parameter ranges
//! - `validator`: structured validation report over the catalog
//!
//! Each component pairs a parameters struct carrying documented defaults
//! with pure calculation methods; free functions over the defaults provide
//! the narrow surface the visualisation consumes. Nothing is shared or
//! mutated: callers may evaluate the model concurrently without
//! synchronisation, and identical inputs produce identical outputs.

pub mod feedback;
pub mod forcing;
pub mod insolation;
pub mod regional;
pub mod response;
pub mod scenarios;
pub mod solver;
pub mod validator;

pub use feedback::{ice_fraction, seasonal_variation, SurfaceFeedbacks};
pub use forcing::{co2_forcing, GreenhouseForcing};
pub use insolation::{baseline_insolation, daily_insolation, Insolation};
pub use regional::{regional_temperatures, RegionalModel};
pub use response::ResponseTimescales;
pub use scenarios::{standard_catalog, ParameterRanges, Preset};
pub use solver::{point_temperature, PointSolver};
pub use validator::{CheckResult, SanityModel, ValidationReport, Validator};
