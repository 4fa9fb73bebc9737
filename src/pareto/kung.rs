//! Pareto-front extraction after the fact (§4.3): a 1-D max extractor and Kung's
//! divide-and-conquer extractor for M ≥ 2. Neither exists in the teacher, which
//! only ever needs ranked fronts out of [`crate::pareto::sort`]; these are new,
//! grounded on the dominance primitive in [`crate::pareto::dominance`] and the
//! classic Kung–Luccio–Preparata maxima-set algorithm this spec names in §4.3.

use crate::pareto::dominance::dominates;

/// `{c : c.fitness[0] = max_i pop[i].fitness[0]}` (§4.3, §8 property 7).
pub fn max_extractor_1d(fitnesses: &[&[f64]]) -> Vec<usize> {
    let max = fitnesses
        .iter()
        .map(|f| f[0])
        .fold(f64::NEG_INFINITY, f64::max);
    (0..fitnesses.len()).filter(|&i| fitnesses[i][0] == max).collect()
}

/// Kung's algorithm: sort by first objective descending, recursively split into
/// top/bottom halves, extract each half's front, then merge by dropping bottom
/// members dominated by any top member (§4.3).
pub fn kung_front(fitnesses: &[&[f64]]) -> Vec<usize> {
    if fitnesses.is_empty() {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..fitnesses.len()).collect();
    indices.sort_by(|&a, &b| fitnesses[b][0].partial_cmp(&fitnesses[a][0]).unwrap());
    recurse(&indices, fitnesses)
}

fn recurse(indices: &[usize], fitnesses: &[&[f64]]) -> Vec<usize> {
    if indices.len() <= 1 {
        return indices.to_vec();
    }
    let mid = indices.len() / 2;
    let top_front = recurse(&indices[..mid], fitnesses);
    let bottom_front = recurse(&indices[mid..], fitnesses);

    let mut merged = top_front.clone();
    for b in bottom_front {
        let dominated = top_front.iter().any(|&t| dominates(fitnesses[t], fitnesses[b]));
        if !dominated {
            merged.push(b);
        }
    }
    merged
}

/// Naive O(N²) front extractor, used only to check [`kung_front`] against (§8
/// property 8): the set of indices dominated by nothing else in the population.
#[cfg(test)]
fn naive_front(fitnesses: &[&[f64]]) -> Vec<usize> {
    (0..fitnesses.len())
        .filter(|&i| !(0..fitnesses.len()).any(|j| j != i && dominates(fitnesses[j], fitnesses[i])))
        .collect()
}
