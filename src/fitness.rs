//! The fitness function external interface (§6).

use crate::error::EvolveError;
use crate::gene::Gene;

/// A pure function from chromosome to a non-empty ordered sequence of finite
/// real-valued objective scores, maximization convention throughout. Must be safe
/// for concurrent invocation: the driver calls it from inside a `rayon` parallel
/// map (§5).
pub trait FitnessFunction<G: Gene>: Send + Sync {
    fn evaluate(&self, chromosome: &[G]) -> Result<Vec<f64>, EvolveError>;

    /// Declares whether the same chromosome always produces the same fitness
    /// vector. When true, the driver skips re-evaluating a child whose `evaluated`
    /// flag survived crossover/mutation/repair untouched (§4.1 step 7, §9).
    fn is_stationary(&self) -> bool {
        false
    }
}
