//! Simulator error type.
//!
//! Every fatal condition in the core is a configuration error raised
//! synchronously by the call that violates the precondition.  Degenerate
//! physics (zero or negative speeds) is never an error; it is reported as an
//! infinite gap or time-to-go by the functions that meet it.

use thiserror::Error;

use crate::AircraftId;

/// The top-level error type for `aep-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AepError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("horizon of {horizon_minutes} min is shorter than the {window_minutes} min storm window")]
    HorizonTooShort {
        horizon_minutes: i64,
        window_minutes:  i64,
    },

    #[error("aircraft {0} not found")]
    AircraftNotFound(AircraftId),
}

/// Shorthand result type for all `aep-*` crates.
pub type AepResult<T> = Result<T, AepError>;
