//! The encoding adapter external interface (§6).
//!
//! Concrete encodings (binary strings, real vectors, permutations, integer
//! alphabets) and their operator catalogues are out of scope for this crate (§1);
//! this trait is the minimal boundary an encoding crate implements to plug into the
//! generation driver.

use crate::gene::Gene;

/// Chromosome generation and the three genetic operators for one gene type.
/// Operators are pluggable at runtime (a boxed trait object rather than an
/// inheritance hierarchy, per §9's strategy-polymorphism note); default operators
/// for the four standard encodings live in encoding crates built against this
/// trait, not in this crate.
pub trait EncodingAdapter<G: Gene>: Send + Sync {
    /// Produce a fresh chromosome of the configured length.
    fn generate_candidate(&self, rng: &mut dyn rand::RngCore) -> Vec<G>;

    /// Recombine two parents into two children. Implementations own their own
    /// `rate` knob: a no-op crossover simply clones both parents when a coin flip
    /// against its rate fails.
    fn crossover(&self, parent_a: &[G], parent_b: &[G], rng: &mut dyn rand::RngCore) -> (Vec<G>, Vec<G>);

    /// Mutate a chromosome in place. Implementations own their own `rate` knob.
    fn mutate(&self, chromosome: &mut Vec<G>, rng: &mut dyn rand::RngCore);

    /// Optional post-mutation repair. Must preserve chromosome length; the driver
    /// treats a length mismatch as a contract violation (§7). The default
    /// implementation is the identity (no repair configured).
    fn repair(&self, chromosome: Vec<G>, _rng: &mut dyn rand::RngCore) -> Vec<G> {
        chromosome
    }
}
