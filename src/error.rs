use thiserror::Error;

/// Errors raised by this crate.
///
/// Variants are grouped by the three kinds the driver distinguishes: configuration
/// errors (surfaced before a run starts), contract violations from user-supplied
/// code (surfaced mid-generation, aborting the run), and internal invariant
/// breaches (unreachable in a correct build, kept as a typed escape hatch rather
/// than a bare `panic!` so callers can match on it in tests).
#[derive(Error, Debug)]
pub enum EvolveError {
    #[error("invalid configuration for '{0}': {1}")]
    Config(String, String),

    #[error("stall stop conditions are only valid for single-objective runs")]
    StallStopInMultiObjective,

    #[error("fitness vector has arity {got}, expected {expected}")]
    FitnessArity { expected: usize, got: usize },

    #[error("fitness function returned a non-finite value: {0}")]
    NonFiniteFitness(f64),

    #[error("repair produced a chromosome of length {got}, expected {expected}")]
    RepairLengthMismatch { expected: usize, got: usize },

    #[error("internal invariant violated in {0}: {1}")]
    Internal(String, String),
}

impl EvolveError {
    pub(crate) fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        EvolveError::Config(component.into(), message.into())
    }

    pub(crate) fn internal(component: impl Into<String>, message: impl Into<String>) -> Self {
        EvolveError::Internal(component.into(), message.into())
    }
}

pub type Result<T> = std::result::Result<T, EvolveError>;
