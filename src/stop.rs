//! Termination contracts (§4.1, §7).

use crate::pareto::dominance::dominates;

/// One stop condition. Several may be configured at once; the driver checks
/// `max_gen` first regardless of configuration order, then the rest in the order
/// given (§4.1: "short-circuit priority `max_generations → condition`").
#[derive(Debug, Clone)]
pub enum StopCondition {
    /// Stops when any population member's fitness Pareto-dominates `reference`.
    FitnessValue(Vec<f64>),
    /// Stops when cumulative evaluation count reaches or exceeds `max_evals`.
    FitnessEvals(u64),
    /// SOGA only: stops when the mean-fitness series has not improved by at least
    /// `delta` over the last `window` generations.
    FitnessMeanStall { window: usize, delta: f64 },
    /// SOGA only: analogous to `FitnessMeanStall` but over the per-generation max.
    FitnessBestStall { window: usize, delta: f64 },
}

impl StopCondition {
    pub fn is_stall(&self) -> bool {
        matches!(self, StopCondition::FitnessMeanStall { .. } | StopCondition::FitnessBestStall { .. })
    }
}

/// Everything a stop condition needs to evaluate, gathered at the end of a
/// generation. Kept as a struct rather than threading five parameters through
/// every call site.
pub struct StopContext<'a> {
    pub generation: usize,
    pub max_generations: usize,
    pub population_fitnesses: &'a [&'a [f64]],
    pub num_fitness_evals: u64,
    /// SOGA-only per-generation mean series, including the current generation.
    pub mean_series: &'a [f64],
    /// SOGA-only per-generation max series, including the current generation.
    pub max_series: &'a [f64],
}

/// Evaluate the configured stop conditions against the end-of-generation state.
/// `max_gen` is always checked first (§4.1).
pub fn should_stop(conditions: &[StopCondition], ctx: &StopContext) -> bool {
    if ctx.generation + 1 >= ctx.max_generations {
        return true;
    }
    conditions.iter().any(|c| evaluate_one(c, ctx))
}

fn evaluate_one(condition: &StopCondition, ctx: &StopContext) -> bool {
    match condition {
        StopCondition::FitnessValue(reference) => ctx
            .population_fitnesses
            .iter()
            .any(|fitness| dominates(fitness, reference)),
        StopCondition::FitnessEvals(max_evals) => ctx.num_fitness_evals >= *max_evals,
        StopCondition::FitnessMeanStall { window, delta } => {
            stalled(ctx.mean_series, *window, *delta)
        }
        StopCondition::FitnessBestStall { window, delta } => {
            stalled(ctx.max_series, *window, *delta)
        }
    }
}

/// `series[g] − series[g−window] < delta` once at least `window` generations of
/// history are available (§4.1).
fn stalled(series: &[f64], window: usize, delta: f64) -> bool {
    if series.len() <= window {
        return false;
    }
    let current = series[series.len() - 1];
    let lagged = series[series.len() - 1 - window];
    current - lagged < delta
}
