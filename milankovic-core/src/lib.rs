//! Core types for the Milankovic climate response model.
//!
//! This crate carries the pieces shared by every physics component:
//! orbital and atmospheric input records, result records with their effect
//! decomposition, the seven-band latitude grid, process-wide physical
//! constants, and the numeric guard helpers that keep every kernel finite.
//!
//! The physics itself lives in `milankovic-components`.

pub mod constants;
pub mod errors;
pub mod inputs;
pub mod numerics;
pub mod results;
pub mod spatial;

pub use errors::{MilankovicError, MilankovicResult};
pub use numerics::FloatValue;
