//! Validated configuration surface (§6), grounded on the teacher's
//! `NSGA2Arg::new`/`Problem::new` pattern of validating in a constructor and
//! returning a descriptive error rather than panicking.

use crate::candidate::Candidate;
use crate::error::EvolveError;
use crate::gene::Gene;
use crate::operators::selection::soga::{SogaSelection, Weighting};
use crate::stop::StopCondition;

/// Which selection/replacement engine the driver runs (§2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SingleObjective,
    MultiObjectiveSorting,
    MultiObjectiveDecomp,
}

/// Everything the generation driver needs, validated once at construction
/// (§6). Generic over the gene type so `preset_initial_population` can be
/// typed directly.
pub struct Config<G: Gene> {
    pub population_size: usize,
    pub chrom_len: usize,
    pub max_generations: usize,
    pub max_fitness_evals: Option<u64>,
    pub mode: Mode,
    pub stop_conditions: Vec<StopCondition>,
    pub selection_method: SogaSelection,
    pub tournament_size: usize,
    pub fitness_threshold: Option<Vec<f64>>,
    pub preset_initial_population: Vec<Vec<G>>,
    pub archive_optimal_solutions: bool,
    pub stationary_fitness: bool,
    pub parallel: bool,
    pub seed: Option<u64>,
}

impl<G: Gene> Config<G> {
    /// Validate the configuration surface (§6). Fails synchronously so the run
    /// never starts with an invalid combination (§7 "Configuration error").
    pub fn validate(&self) -> Result<(), EvolveError> {
        if self.population_size < 1 {
            return Err(EvolveError::config("population_size", "must be >= 1"));
        }
        if self.chrom_len < 1 {
            return Err(EvolveError::config("chrom_len", "must be >= 1"));
        }
        if self.max_generations < 1 {
            return Err(EvolveError::config("max_generations", "must be >= 1"));
        }
        if let Some(max_evals) = self.max_fitness_evals {
            if max_evals < 1 {
                return Err(EvolveError::config("max_fitness_evals", "must be >= 1"));
            }
        }
        if self.tournament_size < 2 {
            return Err(EvolveError::config("tournament_size", "must be >= 2"));
        }
        self.selection_method
            .validate()
            .map_err(|msg| EvolveError::config("selection_method", msg))?;

        if let Some((idx, preset)) = self
            .preset_initial_population
            .iter()
            .enumerate()
            .find(|(_, preset)| preset.len() != self.chrom_len)
        {
            return Err(EvolveError::config(
                "preset_initial_population",
                format!("entry {idx} has length {}, expected chrom_len {}", preset.len(), self.chrom_len),
            ));
        }

        if let Some(threshold) = &self.fitness_threshold {
            if threshold.is_empty() {
                return Err(EvolveError::config("fitness_threshold", "must be non-empty when set"));
            }
            if threshold.iter().any(|v| !v.is_finite()) {
                return Err(EvolveError::config("fitness_threshold", "must contain only finite values"));
            }
        }

        for condition in &self.stop_conditions {
            if condition.is_stall() && self.mode != Mode::SingleObjective {
                return Err(EvolveError::StallStopInMultiObjective);
            }
            if let StopCondition::FitnessMeanStall { window, delta } | StopCondition::FitnessBestStall { window, delta } = condition {
                if *window < 1 {
                    return Err(EvolveError::config("stop_condition", "stall patience (window) must be >= 1"));
                }
                if !delta.is_finite() {
                    return Err(EvolveError::config("stop_condition", "stall delta must be finite"));
                }
            }
        }

        Ok(())
    }
}

/// Top up a preset initial population with freshly generated randoms, or
/// truncate it, so the result has exactly `population_size` members (§4.1 step
/// 1, §6 "preset_initial_population"). Only the *count* of preset entries is
/// auto-corrected here (top-up/truncate); entry length is a hard precondition
/// enforced by `Config::validate`, not silently repaired, so every entry is
/// expected to already have length `chrom_len` by the time this runs.
pub fn seed_initial_population<G: Gene>(
    mut preset: Vec<Vec<G>>,
    population_size: usize,
    chrom_len: usize,
    mut generate: impl FnMut() -> Vec<G>,
) -> Vec<Candidate<G>> {
    preset.truncate(population_size);
    let mut candidates: Vec<Candidate<G>> = preset
        .into_iter()
        .map(|chromosome| {
            debug_assert_eq!(
                chromosome.len(),
                chrom_len,
                "preset chromosome length must equal chrom_len; Config::validate should have rejected this"
            );
            Candidate::new(chromosome)
        })
        .collect();

    while candidates.len() < population_size {
        candidates.push(Candidate::new(generate()));
    }
    candidates
}
