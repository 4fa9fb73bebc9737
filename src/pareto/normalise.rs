//! Ideal/extreme/nadir-point tracking for NSGA-III (§3, §4.6), ported from
//! `optirustic/src/algorithms/nsga3/normalise.rs`'s `Normalise::calculate`, mirrored
//! onto the maximization convention (ideal is a running componentwise *maximum*,
//! not minimum) and simplified per §9: the teacher computes the nadir point from
//! the intercepts of a hyperplane fitted through the extreme points via an
//! `nalgebra` SVD solve; this crate instead takes the nadir as the componentwise
//! minimum across the extreme points directly, as the distilled spec specifies,
//! so no linear solver is needed.

const ASF_EPSILON_WEIGHT: f64 = 1e-6;
const NADIR_IDEAL_GAP_FLOOR: f64 = -1e-6;

/// Running ideal/extreme/nadir state, owned by the driver across the whole run
/// (§3: "NSGA-III state owned by the driver").
#[derive(Debug, Clone)]
pub struct NormalisationState {
    pub ideal: Vec<f64>,
    pub extreme_points: Vec<Vec<f64>>,
    pub nadir: Vec<f64>,
}

impl NormalisationState {
    pub fn new(num_objectives: usize) -> Self {
        NormalisationState {
            ideal: vec![f64::NEG_INFINITY; num_objectives],
            extreme_points: Vec::new(),
            nadir: vec![f64::INFINITY; num_objectives],
        }
    }

    /// Update ideal, extreme points, and nadir from the current pool of fitness
    /// vectors (§4.6: "using the refreshed ideal/nadir/extreme points").
    pub fn update(&mut self, fitnesses: &[&[f64]]) {
        self.update_ideal(fitnesses);
        self.update_extreme_points(fitnesses);
        self.update_nadir();
    }

    fn update_ideal(&mut self, fitnesses: &[&[f64]]) {
        for point in fitnesses {
            for (i, &v) in point.iter().enumerate() {
                if v > self.ideal[i] {
                    self.ideal[i] = v;
                }
            }
        }
    }

    /// For each axis, find the point (from the current pool or a prior extreme
    /// point) with the lowest achievement-scalarization value along that axis
    /// (§4.6: "extreme points updated by lowest ASF along each axis across both the
    /// pool and the existing extremes").
    fn update_extreme_points(&mut self, fitnesses: &[&[f64]]) {
        let num_objectives = self.ideal.len();
        let mut candidates: Vec<&[f64]> = fitnesses.to_vec();
        let existing: Vec<Vec<f64>> = self.extreme_points.clone();
        candidates.extend(existing.iter().map(|v| v.as_slice()));

        let mut new_extremes = Vec::with_capacity(num_objectives);
        for axis in 0..num_objectives {
            let mut weights = vec![ASF_EPSILON_WEIGHT; num_objectives];
            weights[axis] = 1.0;

            let mut best_asf = f64::INFINITY;
            let mut best_point: Option<&[f64]> = None;
            for &point in &candidates {
                let asf = achievement_scalarisation(&self.ideal, point, &weights);
                if asf < best_asf {
                    best_asf = asf;
                    best_point = Some(point);
                }
            }
            new_extremes.push(best_point.unwrap_or(&candidates[0]).to_vec());
        }
        self.extreme_points = new_extremes;
    }

    fn update_nadir(&mut self) {
        let num_objectives = self.ideal.len();
        let mut nadir = vec![f64::INFINITY; num_objectives];
        for point in &self.extreme_points {
            for (i, &v) in point.iter().enumerate() {
                if v < nadir[i] {
                    nadir[i] = v;
                }
            }
        }
        self.nadir = nadir;
    }

    /// Normalize a fitness vector by `(f − ideal) / min(nadir − ideal, −ε)` (§4.4).
    /// The floored denominator keeps the sign right (and avoids division by zero)
    /// when `nadir[i] − ideal[i]` is near zero or positive, which is pathological
    /// under this maximization convention but not impossible on a degenerate front
    /// — an intentional smoothing, not a bug (§9).
    pub fn normalise(&self, fitness: &[f64]) -> Vec<f64> {
        fitness
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let denom = (self.nadir[i] - self.ideal[i]).min(NADIR_IDEAL_GAP_FLOOR);
                (f - self.ideal[i]) / denom
            })
            .collect()
    }
}

/// `max_i(translated_i / w_i)` where `translated = ideal − f` (Eq. 4 of the NSGA-III
/// paper, mirrored for maximization: `ideal − f ≥ 0` here rather than the teacher's
/// `f − ideal_min ≥ 0`).
fn achievement_scalarisation(ideal: &[f64], point: &[f64], weights: &[f64]) -> f64 {
    ideal
        .iter()
        .zip(point)
        .zip(weights)
        .map(|((&id, &f), &w)| (id - f) / w)
        .fold(f64::NEG_INFINITY, f64::max)
}
