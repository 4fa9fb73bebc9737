//! The unified generation driver (§4.1), ported from the teacher's
//! `Algorithm` trait (`optirustic/src/algorithms/algorithm.rs`): `run`/`initialise`
//! map onto this driver's `run`/`initialise`, and `do_parallel_evaluation`'s
//! `individuals.into_par_iter().enumerate().try_for_each(...)` shape is generalized
//! here to every data-parallel phase the spec names (parent-pair construction,
//! evaluation), gated by `Config::parallel` the way the teacher gates it on
//! `NSGA2Arg.parallel`. Unlike the teacher, which implements NSGA-II and NSGA-III as
//! two separate structs each with their own `evolve()`, this driver is generic over
//! a single [`Mode`] so one loop serves all three engines (§2, DESIGN.md).

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::archive::Archive;
use crate::callback::Callback;
use crate::candidate::Candidate;
use crate::config::{Config, Mode};
use crate::encoding::EncodingAdapter;
use crate::error::EvolveError;
use crate::fitness::FitnessFunction;
use crate::gene::Gene;
use crate::history::History;
use crate::operators::comparison::{crowded_compare, niched_compare};
use crate::operators::selection::soga::{self, SogaSelection};
use crate::operators::selection::tournament::{binary_tournament, tournament_select};
use crate::pareto::dominance::dominates;
use crate::pareto::kung::{kung_front, max_extractor_1d};
use crate::pareto::normalise::NormalisationState;
use crate::pareto::reference_points::generate_reference_points;
use crate::population::Population;
use crate::replacement;
use crate::rng::{get_rng, worker_rng, worker_seeds};
use crate::stop::{should_stop, StopContext};

/// Owns the whole state of one evolutionary run and drives it to completion
/// (§3: "NSGA-III state owned by the driver", generalized here to all the
/// per-run state every mode needs).
pub struct GenerationDriver<G: Gene> {
    config: Config<G>,
    fitness_fn: Box<dyn FitnessFunction<G>>,
    encoding: Box<dyn EncodingAdapter<G>>,
    callback: Option<Box<dyn Callback<G>>>,
    population: Population<G>,
    generation: usize,
    num_fitness_evals: AtomicU64,
    num_objectives: usize,
    history: History,
    archive: Option<Archive<G>>,
    normalisation: Option<NormalisationState>,
    reference_points: Vec<Vec<f64>>,
    rng: ChaCha8Rng,
}

impl<G: Gene> GenerationDriver<G> {
    /// Validate `config` and build a driver ready for [`Self::run`] (§6, §7
    /// "Configuration error").
    pub fn new(
        config: Config<G>,
        fitness_fn: Box<dyn FitnessFunction<G>>,
        encoding: Box<dyn EncodingAdapter<G>>,
        callback: Option<Box<dyn Callback<G>>>,
    ) -> Result<Self, EvolveError> {
        config.validate()?;
        info!(
            "constructing generation driver: mode={:?} population_size={} max_generations={}",
            config.mode, config.population_size, config.max_generations
        );
        let rng = get_rng(config.seed);
        let archive = config.archive_optimal_solutions.then(Archive::new);

        Ok(GenerationDriver {
            config,
            fitness_fn,
            encoding,
            callback,
            population: Population::empty(),
            generation: 0,
            num_fitness_evals: AtomicU64::new(0),
            num_objectives: 0,
            history: History::new(),
            archive,
            normalisation: None,
            reference_points: Vec::new(),
            rng,
        })
    }

    pub fn population(&self) -> &Population<G> {
        &self.population
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn num_fitness_evals(&self) -> u64 {
        self.num_fitness_evals.load(Ordering::Relaxed)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn archive(&self) -> Option<&Archive<G>> {
        self.archive.as_ref()
    }

    pub fn reference_points(&self) -> &[Vec<f64>] {
        &self.reference_points
    }

    pub fn ideal_point(&self) -> Option<&[f64]> {
        self.normalisation.as_ref().map(|n| n.ideal.as_slice())
    }

    pub fn nadir_point(&self) -> Option<&[f64]> {
        self.normalisation.as_ref().map(|n| n.nadir.as_slice())
    }

    /// Run to completion: initialise, then repeat steps 2-9 of §4.1 until a stop
    /// condition fires, then return the optimal-solution set (§6 "Returned
    /// artifacts from `run()`").
    pub fn run(&mut self) -> Result<Vec<Candidate<G>>, EvolveError> {
        info!("starting run");
        self.initialise()?;

        loop {
            self.prepare_selection();

            if let Some(archive) = &mut self.archive {
                archive.update(self.population.individuals());
            }

            let mut children = self.produce_children()?;

            let expected_arity = self.num_objectives;
            let skip_if_evaluated = self.config.stationary_fitness && self.fitness_fn.is_stationary();
            evaluate_batch(
                &mut children,
                self.fitness_fn.as_ref(),
                expected_arity,
                self.config.parallel,
                skip_if_evaluated,
                &self.num_fitness_evals,
            )?;

            let mut pool = std::mem::take(&mut self.population).into_individuals();
            pool.extend(children);
            self.replace(pool);

            if self.config.mode == Mode::SingleObjective {
                let values: Vec<f64> = self.population.individuals().iter().map(|c| c.fitness[0]).collect();
                self.history.push(self.generation, &values);
            }

            if let Some(mut cb) = self.callback.take() {
                cb.on_generation(self);
                self.callback = Some(cb);
            }

            debug!(
                "generation {} complete, evals={}",
                self.generation,
                self.num_fitness_evals()
            );

            let fitnesses: Vec<&[f64]> = self.population.individuals().iter().map(|c| c.fitness.as_slice()).collect();
            let mean_series = self.history.mean_series();
            let max_series = self.history.max_series();
            let ctx = StopContext {
                generation: self.generation,
                max_generations: self.config.max_generations,
                population_fitnesses: &fitnesses,
                num_fitness_evals: self.num_fitness_evals(),
                mean_series: &mean_series,
                max_series: &max_series,
            };
            let threshold_reached = self
                .config
                .fitness_threshold
                .as_ref()
                .is_some_and(|reference| fitnesses.iter().any(|fitness| dominates(fitness, reference)));
            let evals_budget_reached = self
                .config
                .max_fitness_evals
                .is_some_and(|max_evals| self.num_fitness_evals() >= max_evals);
            let stop = threshold_reached || evals_budget_reached || should_stop(&self.config.stop_conditions, &ctx);
            self.generation += 1;
            if stop {
                info!("stopping after {} generations", self.generation);
                break;
            }
        }

        Ok(self.optimal_solutions())
    }

    /// Step 1 (§4.1): seed the population, evaluate it, and — for the
    /// multi-objective modes — assign the rank/distance/niche state the first
    /// generation's selection needs, by reusing the mode's own replacement
    /// truncation with `target_size == population_size` (a no-op truncation that
    /// still performs the sort/association pass).
    fn initialise(&mut self) -> Result<(), EvolveError> {
        let population_size = self.config.population_size;
        let chrom_len = self.config.chrom_len;
        let preset = self.config.preset_initial_population.clone();
        let encoding = self.encoding.as_ref();
        let rng = &mut self.rng;

        let individuals = crate::config::seed_initial_population(preset, population_size, chrom_len, || {
            encoding.generate_candidate(rng)
        });
        self.population = Population::new(individuals);

        self.evaluate_initial()?;

        if self.config.mode == Mode::MultiObjectiveDecomp {
            self.reference_points = generate_reference_points(population_size, self.num_objectives, &mut self.rng);
            self.normalisation = Some(NormalisationState::new(self.num_objectives));
        }

        if self.config.mode != Mode::SingleObjective {
            let pool = std::mem::take(&mut self.population).into_individuals();
            self.replace(pool);
        }

        Ok(())
    }

    /// Evaluate every member of a freshly seeded population, learning the
    /// objective arity from the first candidate (§8 property 5) and validating
    /// every subsequent candidate against it.
    fn evaluate_initial(&mut self) -> Result<(), EvolveError> {
        let fitness_fn = self.fitness_fn.as_ref();
        let parallel = self.config.parallel;
        let evals = &self.num_fitness_evals;

        let (first, rest) = self
            .population
            .individuals_mut()
            .split_first_mut()
            .expect("population_size validated to be >= 1");

        let fitness = fitness_fn.evaluate(&first.chromosome)?;
        if fitness.is_empty() {
            return Err(EvolveError::FitnessArity { expected: 1, got: 0 });
        }
        for &v in &fitness {
            if !v.is_finite() {
                return Err(EvolveError::NonFiniteFitness(v));
            }
        }
        let num_objectives = fitness.len();
        first.fitness = fitness;
        first.evaluated = true;
        evals.fetch_add(1, Ordering::Relaxed);

        evaluate_batch(rest, fitness_fn, num_objectives, parallel, false, evals)?;
        self.num_objectives = num_objectives;
        Ok(())
    }

    /// Step 2 (§4.1): no-op outside SOGA — the multi-objective comparators read
    /// rank/distance/niche state that replacement already refreshed.
    fn prepare_selection(&mut self) {
        if self.config.mode != Mode::SingleObjective {
            return;
        }
        if let SogaSelection::Weighted(weighting) = &self.config.selection_method {
            soga::prepare_selection(&mut self.population, weighting, self.generation, self.config.max_generations);
        }
    }

    /// Steps 4-6 (§4.1): draw `ceil(P/2)` parent pairs, crossover, mutate, and
    /// repair each child, in parallel when configured (§5). Each pair's RNG is an
    /// independent `ChaCha8Rng` derived from a splitmix64 expansion of one draw
    /// from the driver's serial RNG, so parallel workers never contend on a
    /// shared generator.
    fn produce_children(&mut self) -> Result<Vec<Candidate<G>>, EvolveError> {
        let population_size = self.config.population_size;
        let num_pairs = population_size.div_ceil(2);
        let mode = self.config.mode;
        let tournament_size = self.config.tournament_size;
        let selection_method = &self.config.selection_method;
        let population = self.population.individuals();
        let encoding = self.encoding.as_ref();

        let build_pair = |rng: &mut ChaCha8Rng| -> Result<(Candidate<G>, Candidate<G>), EvolveError> {
            let idx_a = select_parent(mode, selection_method, tournament_size, population, rng);
            let idx_b = select_parent(mode, selection_method, tournament_size, population, rng);
            let parent_a = &population[idx_a];
            let parent_b = &population[idx_b];

            let (mut child_a_chrom, mut child_b_chrom) =
                encoding.crossover(&parent_a.chromosome, &parent_b.chromosome, rng);
            encoding.mutate(&mut child_a_chrom, rng);
            encoding.mutate(&mut child_b_chrom, rng);

            let child_a_chrom = repair_checked(encoding, child_a_chrom, rng)?;
            let child_b_chrom = repair_checked(encoding, child_b_chrom, rng)?;

            let child_a = inherit_or_new(child_a_chrom, parent_a, parent_b);
            let child_b = inherit_or_new(child_b_chrom, parent_a, parent_b);
            Ok((child_a, child_b))
        };

        let pairs: Vec<Result<(Candidate<G>, Candidate<G>), EvolveError>> = if self.config.parallel {
            let seeds = worker_seeds(self.rng.gen(), num_pairs);
            seeds.into_par_iter().map(|seed| build_pair(&mut worker_rng(seed))).collect()
        } else {
            (0..num_pairs).map(|_| build_pair(&mut self.rng)).collect()
        };

        let mut children = Vec::with_capacity(num_pairs * 2);
        for pair in pairs {
            let (a, b) = pair?;
            children.push(a);
            children.push(b);
        }
        Ok(children)
    }

    /// Step 8 (§4.1): concatenate the previous population with `children` and
    /// truncate with the mode-specific replacement strategy.
    fn replace(&mut self, pool: Vec<Candidate<G>>) {
        let population_size = self.config.population_size;
        let next = match self.config.mode {
            Mode::SingleObjective => replacement::soga::truncate(pool, population_size),
            Mode::MultiObjectiveSorting => replacement::nsga2::truncate(pool, population_size),
            Mode::MultiObjectiveDecomp => {
                let normalisation = self
                    .normalisation
                    .as_mut()
                    .expect("NSGA-III normalisation state initialised during `initialise`");
                replacement::nsga3::truncate(pool, population_size, &self.reference_points, normalisation, &mut self.rng)
            }
        };
        self.population = Population::new(next);
    }

    /// The non-dominated set to hand back from `run()`: the archive's members
    /// when an archive is configured (it may hold points replacement has since
    /// discarded), otherwise the non-dominated front of the final population
    /// (§6 "Returned artifacts from `run()`").
    fn optimal_solutions(&self) -> Vec<Candidate<G>> {
        if let Some(archive) = &self.archive {
            if !archive.is_empty() {
                return archive.members().to_vec();
            }
        }

        let fitnesses: Vec<&[f64]> = self.population.individuals().iter().map(|c| c.fitness.as_slice()).collect();
        let front = if self.num_objectives <= 1 {
            max_extractor_1d(&fitnesses)
        } else {
            kung_front(&fitnesses)
        };
        front.into_iter().map(|i| self.population.individuals()[i].clone()).collect()
    }
}

/// Pick one parent index according to the mode's comparator (§4.2, §4.5).
fn select_parent<G: Gene>(
    mode: Mode,
    selection_method: &SogaSelection,
    tournament_size: usize,
    population: &[Candidate<G>],
    rng: &mut impl Rng,
) -> usize {
    match mode {
        Mode::SingleObjective => match selection_method {
            SogaSelection::Weighted(_) => {
                let cdf: Vec<f64> = population.iter().map(|c| c.selection_cdf).collect();
                soga::sample_cdf(&cdf, rng.gen::<f64>())
            }
            SogaSelection::Tournament => {
                tournament_select(population.len(), tournament_size, rng, |a, b| {
                    population[a].fitness[0] > population[b].fitness[0]
                })
            }
        },
        Mode::MultiObjectiveSorting => {
            binary_tournament(population.len(), rng, |a, b| crowded_compare(&population[a], &population[b]))
        }
        Mode::MultiObjectiveDecomp => {
            binary_tournament(population.len(), rng, |a, b| niched_compare(&population[a], &population[b]))
        }
    }
}

/// Run repair and check the length invariant (§7 "Repair produced a wrong-length
/// chromosome").
fn repair_checked<G: Gene>(
    encoding: &dyn EncodingAdapter<G>,
    chromosome: Vec<G>,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<G>, EvolveError> {
    let expected = chromosome.len();
    let repaired = encoding.repair(chromosome, rng);
    if repaired.len() != expected {
        return Err(EvolveError::RepairLengthMismatch { expected, got: repaired.len() });
    }
    Ok(repaired)
}

/// Build a fresh child candidate, inheriting a parent's cached fitness when the
/// final (post-repair) chromosome is unchanged from that parent (§4.1 step 7, §9
/// "Candidate::selection_pdf/selection_cdf reset each generation" sibling case:
/// the `evaluated` flag must reflect the chromosome actually produced, not an
/// intermediate one, so this check runs after crossover/mutation/repair).
fn inherit_or_new<G: Gene>(chromosome: Vec<G>, parent_a: &Candidate<G>, parent_b: &Candidate<G>) -> Candidate<G> {
    let mut child = Candidate::new(chromosome);
    for parent in [parent_a, parent_b] {
        if parent.evaluated && child.same_chromosome(parent) {
            child.fitness = parent.fitness.clone();
            child.evaluated = true;
            break;
        }
    }
    child
}

/// Evaluate every candidate in `items`, skipping those already marked evaluated
/// when `skip_if_evaluated` is set (§4.1 step 7). Validates arity and finiteness
/// per candidate and increments `evals` once per actual fitness-function call
/// (§5, §7).
fn evaluate_batch<G: Gene>(
    items: &mut [Candidate<G>],
    fitness_fn: &dyn FitnessFunction<G>,
    expected_arity: usize,
    parallel: bool,
    skip_if_evaluated: bool,
    evals: &AtomicU64,
) -> Result<(), EvolveError> {
    let eval_one = |c: &mut Candidate<G>| -> Result<(), EvolveError> {
        if skip_if_evaluated && c.evaluated {
            return Ok(());
        }
        let fitness = fitness_fn.evaluate(&c.chromosome)?;
        if fitness.len() != expected_arity {
            return Err(EvolveError::FitnessArity { expected: expected_arity, got: fitness.len() });
        }
        for &v in &fitness {
            if !v.is_finite() {
                return Err(EvolveError::NonFiniteFitness(v));
            }
        }
        c.fitness = fitness;
        c.evaluated = true;
        evals.fetch_add(1, Ordering::Relaxed);
        Ok(())
    };

    if parallel {
        items.par_iter_mut().try_for_each(eval_one)
    } else {
        items.iter_mut().try_for_each(eval_one)
    }
}
