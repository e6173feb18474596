use crate::numerics::FloatValue;
use thiserror::Error;

/// Error type for invalid operations.
///
/// The solver surface never returns these across its public boundary; they
/// exist for the validator and for internal diagnostics. Out-of-range
/// parameters are a validation outcome, numeric failures are absorbed by
/// the guards in [`crate::numerics`], and calculation errors surface only
/// as the fallback flag on a result record.
#[derive(Error, Debug)]
pub enum MilankovicError {
    #[error("{parameter} = {value} is outside the documented range [{min}, {max}]")]
    DomainOutOfRange {
        parameter: String,
        value: FloatValue,
        min: FloatValue,
        max: FloatValue,
    },
    #[error("non-finite value while evaluating {0}")]
    NumericFailure(String),
    #[error("{0}")]
    CalculationError(String),
}

/// Convenience type for `Result<T, MilankovicError>`.
pub type MilankovicResult<T> = Result<T, MilankovicError>;
