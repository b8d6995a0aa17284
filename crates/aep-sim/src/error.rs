use aep_core::{AepError, Minute};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("arrival at {minute} lies outside the [0, {horizon_minutes}) horizon")]
    ArrivalOutsideHorizon {
        minute:          Minute,
        horizon_minutes: i64,
    },

    #[error(transparent)]
    Core(#[from] AepError),
}

pub type SimResult<T> = Result<T, SimError>;
