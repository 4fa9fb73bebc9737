//! Generation loop, single-objective selection, and multi-objective
//! Pareto-replacement engines for evolutionary computation.
//!
//! This crate is the generic core of a genetic-algorithm library: one
//! [`driver::GenerationDriver`] drives a population of [`candidate::Candidate`]s
//! through selection, recombination, mutation, evaluation, and replacement,
//! in one of three [`config::Mode`]s (single-objective fitness-proportional/
//! tournament selection, NSGA-II-style non-dominated sorting with crowding,
//! or NSGA-III-style reference-point decomposition).
//!
//! Concrete encodings (binary strings, real vectors, permutations, integer
//! alphabets) and their operator catalogues are external collaborators: this
//! crate only defines the [`encoding::EncodingAdapter`] and
//! [`fitness::FitnessFunction`] traits they plug into.

pub mod archive;
pub mod callback;
pub mod candidate;
pub mod config;
pub mod encoding;
pub mod error;
pub mod fitness;
pub mod gene;
pub mod history;
pub mod operators;
pub mod pareto;
pub mod population;
pub mod replacement;
mod rng;
pub mod stop;

mod driver;

pub use archive::Archive;
pub use callback::Callback;
pub use candidate::Candidate;
pub use config::{Config, Mode};
pub use driver::GenerationDriver;
pub use encoding::EncodingAdapter;
pub use error::{EvolveError, Result};
pub use fitness::FitnessFunction;
pub use gene::{Gene, GeneEq};
pub use history::{History, HistoryRow};
pub use operators::selection::soga::{SogaSelection, Weighting};
pub use population::Population;
pub use stop::StopCondition;
