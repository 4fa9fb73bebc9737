//! S4 (spec §8): NSGA-III on DTLZ1 (3 objectives, 7 variables), P=100, 1500
//! generations. DTLZ1's objectives are computed in their usual minimization
//! form, then negated to fit this crate's maximization convention, so the
//! optimal sheet `f1+f2+f3 = 0.5` becomes `f1+f2+f3 = -0.5`.

mod common;

use common::RealVectorEncoding;
use evolve_core::config::Mode;
use evolve_core::operators::selection::soga::{SogaSelection, Weighting};
use evolve_core::{Config, EvolveError, FitnessFunction, GenerationDriver};
use evolve_macros::test_with_retries;

const NUM_VARS: usize = 7;
const NUM_OBJECTIVES: usize = 3;
const K: usize = NUM_VARS - NUM_OBJECTIVES + 1;

struct Dtlz1;

impl FitnessFunction<f64> for Dtlz1 {
    fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, EvolveError> {
        let tail = &x[NUM_VARS - K..];
        let g = 100.0
            * (K as f64
                + tail
                    .iter()
                    .map(|&xi| (xi - 0.5).powi(2) - (20.0 * std::f64::consts::PI * (xi - 0.5)).cos())
                    .sum::<f64>());

        let f1 = 0.5 * x[0] * x[1] * (1.0 + g);
        let f2 = 0.5 * x[0] * (1.0 - x[1]) * (1.0 + g);
        let f3 = 0.5 * (1.0 - x[0]) * (1.0 + g);

        Ok(vec![-f1, -f2, -f3])
    }

    fn is_stationary(&self) -> bool {
        true
    }
}

fn config(seed: u64) -> Config<f64> {
    Config {
        population_size: 100,
        chrom_len: NUM_VARS,
        max_generations: 1500,
        max_fitness_evals: None,
        mode: Mode::MultiObjectiveDecomp,
        stop_conditions: vec![],
        selection_method: SogaSelection::Weighted(Weighting::Roulette), // unused outside SOGA
        tournament_size: 2,
        fitness_threshold: None,
        preset_initial_population: vec![],
        archive_optimal_solutions: false,
        stationary_fitness: true,
        parallel: true,
        seed: Some(seed),
    }
}

#[test_with_retries(4)]
fn nsga3_dtlz1_final_front_lies_near_the_optimal_sheet() {
    let mut driver = GenerationDriver::new(
        config(0x5eed_4),
        Box::new(Dtlz1),
        Box::new(RealVectorEncoding {
            len: NUM_VARS,
            lo: 0.0,
            hi: 1.0,
            crossover_rate: 1.0,
            mutation_rate: 1.0 / NUM_VARS as f64,
            sbx_distribution_index: 30.0,
            mutation_sigma: 0.05,
        }),
        None,
    )
    .unwrap();

    let optimal = driver.run().unwrap();
    assert!(optimal.len() >= 90, "only {} points survived", optimal.len());

    for candidate in &optimal {
        let sum: f64 = candidate.fitness.iter().sum();
        assert!((sum - (-0.5)).abs() <= 0.05, "sum={sum} too far from -0.5");
    }
}
