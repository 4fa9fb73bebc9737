//! SOGA elitist truncation (§4.6). New: the teacher has no single-objective
//! algorithm to ground this on, but it mirrors the `Population`/`sort_by` idiom
//! the teacher uses in `NSGA2::evolve`'s own truncation step.

use crate::candidate::Candidate;
use crate::gene::Gene;

/// Concatenate previous population and children, sort by (single) fitness
/// descending, keep the first `target_size` (§4.6).
pub fn truncate<G: Gene>(mut pool: Vec<Candidate<G>>, target_size: usize) -> Vec<Candidate<G>> {
    pool.sort_by(|a, b| b.fitness[0].total_cmp(&a.fitness[0]));
    pool.truncate(target_size);
    pool
}
