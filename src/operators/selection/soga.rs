//! SOGA fitness-proportional weighting and CDF sampling (§4.2), ported from the
//! teacher's `Roulette`/`Rank`/`Sigma`/`Boltzmann` selection operators
//! (`optirustic` has no single-objective algorithm, so the operator *shape* —
//! `prepare` computes weights then a CDF, `select` binary-searches it — is
//! grounded on `original_source/src/selection/selection.impl.hpp`, the upstream
//! C++ this spec was distilled from, which implements exactly these five
//! schemes).

use crate::candidate::Candidate;
use crate::gene::Gene;
use crate::population::Population;

/// The five weighting schemes §4.2 names, plus a user-supplied escape hatch.
pub enum Weighting {
    Roulette,
    Rank { min_weight: f64, max_weight: f64 },
    Sigma { scale: f64 },
    Boltzmann { t_min: f64, t_max: f64 },
    /// User-provided weight function with the same contract: one non-negative
    /// weight per candidate, in population order.
    Custom(Box<dyn Fn(&[f64]) -> Vec<f64> + Send + Sync>),
}

/// The full `selection_method` knob (§4.2, §6): one of the five weighting
/// schemes feeding CDF sampling, or the raw-fitness tournament that needs no
/// preparation step at all.
pub enum SogaSelection {
    Weighted(Weighting),
    Tournament,
}

impl SogaSelection {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            SogaSelection::Weighted(w) => w.validate(),
            SogaSelection::Tournament => Ok(()),
        }
    }
}

impl Weighting {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Weighting::Rank { min_weight, max_weight } => {
                if !(0.0 <= *min_weight && min_weight <= max_weight) {
                    return Err(format!(
                        "rank weights must satisfy 0 <= min_weight <= max_weight, got min={min_weight} max={max_weight}"
                    ));
                }
                Ok(())
            }
            Weighting::Sigma { scale } => {
                if *scale < 1.0 {
                    return Err(format!("sigma scale must be >= 1.0, got {scale}"));
                }
                Ok(())
            }
            Weighting::Boltzmann { t_min, t_max } => {
                if !(0.1 <= *t_min && t_min < t_max) {
                    return Err(format!(
                        "boltzmann temperatures must satisfy 0.1 <= t_min < t_max, got t_min={t_min} t_max={t_max}"
                    ));
                }
                Ok(())
            }
            Weighting::Roulette | Weighting::Custom(_) => Ok(()),
        }
    }
}

/// Recompute `selection_pdf`/`selection_cdf` on every candidate from the
/// population's current fitness values (§4.1 step 2, §4.2). Must run after every
/// candidate in `population` has been evaluated at least once this generation;
/// stale pdf/cdf from a prior generation are always overwritten, never merged
/// (§9 "Candidate::selection_pdf/selection_cdf reset each generation").
pub fn prepare_selection<G: Gene>(
    population: &mut Population<G>,
    weighting: &Weighting,
    generation: usize,
    max_generations: usize,
) {
    let fitnesses: Vec<f64> = population.iter().map(|c| c.fitness[0]).collect();
    let weights = compute_weights(&fitnesses, weighting, generation, max_generations);
    let cdf = weights_to_cdf(&weights);

    for (candidate, (w, c)) in population.iter_mut().zip(weights.iter().zip(cdf.iter())) {
        candidate.selection_pdf = *w;
        candidate.selection_cdf = *c;
    }
}

fn compute_weights(fitnesses: &[f64], weighting: &Weighting, generation: usize, max_generations: usize) -> Vec<f64> {
    match weighting {
        Weighting::Roulette => roulette_weights(fitnesses),
        Weighting::Rank { min_weight, max_weight } => rank_weights(fitnesses, *min_weight, *max_weight),
        Weighting::Sigma { scale } => sigma_weights(fitnesses, *scale),
        Weighting::Boltzmann { t_min, t_max } => boltzmann_weights(fitnesses, generation, max_generations, *t_min, *t_max),
        Weighting::Custom(f) => f(fitnesses),
    }
}

/// `offset = min(0, min fitness)`; `w_i = f_i - 2*offset`, guaranteeing
/// non-negativity when any fitness is negative (§4.2).
fn roulette_weights(fitnesses: &[f64]) -> Vec<f64> {
    let min = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
    let offset = min.min(0.0);
    fitnesses.iter().map(|f| f - 2.0 * offset).collect()
}

/// Sort indices by fitness descending; assign linearly interpolated weights
/// from `max_weight` (best) to `min_weight` (worst) (§4.2).
fn rank_weights(fitnesses: &[f64], min_weight: f64, max_weight: f64) -> Vec<f64> {
    let n = fitnesses.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| fitnesses[b].total_cmp(&fitnesses[a]));

    let mut weights = vec![0.0; n];
    for (rank, &idx) in order.iter().enumerate() {
        weights[idx] = if n <= 1 {
            max_weight
        } else {
            max_weight - (max_weight - min_weight) * (rank as f64) / ((n - 1) as f64)
        };
    }
    weights
}

const SIGMA_EPSILON: f64 = 1e-10;

/// `w_i = max(0, 1 + (f_i - mean) / (c * max(std_dev, eps)))` (§4.2).
fn sigma_weights(fitnesses: &[f64], scale: f64) -> Vec<f64> {
    let n = fitnesses.len() as f64;
    let mean = fitnesses.iter().sum::<f64>() / n;
    let variance = fitnesses.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt().max(SIGMA_EPSILON);

    fitnesses
        .iter()
        .map(|f| (1.0 + (f - mean) / (scale * std_dev)).max(0.0))
        .collect()
}

/// `T(t, t_max) = -Tmax / (1 + exp(-10*t/t_max + 3)) + Tmax + Tmin`; fitness is
/// min-max normalized to [0,1] over the population; `w_i = exp(f'_i / T)` (§4.2).
fn boltzmann_weights(fitnesses: &[f64], generation: usize, max_generations: usize, t_min: f64, t_max: f64) -> Vec<f64> {
    let min = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = (max - min).max(SIGMA_EPSILON);

    let t = generation as f64;
    let t_max_f = max_generations as f64;
    let temperature = -t_max / (1.0 + (-10.0 * t / t_max_f + 3.0).exp()) + t_max + t_min;

    fitnesses
        .iter()
        .map(|f| {
            let normalised = (f - min) / range;
            (normalised / temperature).exp()
        })
        .collect()
}

/// Normalize weights to a probability mass and accumulate to a CDF (§4.2).
fn weights_to_cdf(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let total = if total > 0.0 { total } else { 1.0 };

    let mut cdf = Vec::with_capacity(weights.len());
    let mut running = 0.0;
    for w in weights {
        running += w / total;
        cdf.push(running);
    }
    if let Some(last) = cdf.last_mut() {
        *last = 1.0;
    }
    cdf
}

/// Binary-search the CDF for `u`; fall back to the last candidate if the
/// search returns the end iterator (§4.2).
pub fn sample_cdf(cdf: &[f64], u: f64) -> usize {
    match cdf.binary_search_by(|probe| probe.partial_cmp(&u).unwrap()) {
        Ok(idx) => idx,
        Err(idx) => idx.min(cdf.len() - 1),
    }
}

/// Draw one candidate by sampling the population's prepared CDF (§4.2).
pub fn select_one<'a, G: Gene>(population: &'a [Candidate<G>], u: f64) -> &'a Candidate<G> {
    let cdf: Vec<f64> = population.iter().map(|c| c.selection_cdf).collect();
    &population[sample_cdf(&cdf, u)]
}
