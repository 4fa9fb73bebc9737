//! Per-generation statistics for single-objective runs (§3).

/// One generation's summary of the (single) objective across the population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub generation: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// The SOGA-only per-generation history, reset on every `run()` the way the
/// source's algorithm-owned export history is rebuilt per run rather than
/// accumulated across runs.
#[derive(Debug, Clone, Default)]
pub struct History {
    rows: Vec<HistoryRow>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn push(&mut self, generation: usize, fitnesses: &[f64]) {
        let row = summarize(generation, fitnesses);
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn mean_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mean).collect()
    }

    pub fn max_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.max).collect()
    }
}

fn summarize(generation: usize, fitnesses: &[f64]) -> HistoryRow {
    let n = fitnesses.len() as f64;
    let mean = fitnesses.iter().sum::<f64>() / n;
    let variance = fitnesses.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;
    let min = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    HistoryRow { generation, mean, std_dev: variance.sqrt(), min, max }
}
