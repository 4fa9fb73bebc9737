//! Non-dominated sort (§4.3), ported from the teacher's
//! `utils/fast_non_dominated_sort.rs`, itself paragraph 3A of Deb et al.'s NSGA-II
//! paper. The teacher sorts `Individual`s carrying a minimise/maximise direction
//! per objective and writes rank into a string-keyed data bag; here every
//! objective is maximized uniformly (GLOSSARY) and rank is a plain `usize` field
//! on [`crate::candidate::Candidate`], 0-indexed rather than the teacher's
//! 1-indexed rank.

use crate::pareto::dominance::{compare, PreferredSolution};

/// Output of [`fast_non_dominated_sort`].
#[derive(Debug)]
pub struct NonDominatedSortResult {
    /// `fronts[k]` lists the population indices with rank `k`, rank 0 first.
    pub fronts: Vec<Vec<usize>>,
    /// `ranks[i]` is the rank assigned to population index `i`.
    pub ranks: Vec<usize>,
    /// Final domination counter per index (0 for every rank-0 member).
    pub domination_counter: Vec<usize>,
}

/// O(N²·M) pairwise sweep followed by rank-peeling (§4.3). `fitnesses[i]` is
/// candidate `i`'s objective vector; all must have equal, non-zero length.
///
/// When `first_front_only` is true, only the first front is computed and
/// `ranks`/`domination_counter` reflect only that pass (ranks beyond the first
/// front are left as `usize::MAX`), matching the teacher's early-return shortcut
/// used by the archive and by the 1-objective-case callers that only need the
/// non-dominated set.
pub fn fast_non_dominated_sort(fitnesses: &[&[f64]], first_front_only: bool) -> NonDominatedSortResult {
    let n = fitnesses.len();
    let mut dominated_solutions: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_counter: Vec<usize> = vec![0; n];
    let mut ranks: Vec<usize> = vec![usize::MAX; n];
    let mut current_front: Vec<usize> = Vec::new();

    for p in 0..n {
        for q in (p + 1)..n {
            match compare(fitnesses[p], fitnesses[q]) {
                PreferredSolution::First => {
                    dominated_solutions[p].push(q);
                    domination_counter[q] += 1;
                }
                PreferredSolution::Second => {
                    dominated_solutions[q].push(p);
                    domination_counter[p] += 1;
                }
                PreferredSolution::MutuallyPreferred => {}
            }
        }
        if domination_counter[p] == 0 {
            current_front.push(p);
            ranks[p] = 0;
        }
    }

    if first_front_only {
        return NonDominatedSortResult { fronts: vec![current_front], ranks, domination_counter };
    }

    let mut all_fronts = vec![current_front.clone()];
    let mut rank = 0;
    loop {
        let mut next_front = Vec::new();
        for &p in &current_front {
            for &q in &dominated_solutions[p] {
                domination_counter[q] -= 1;
                if domination_counter[q] == 0 {
                    next_front.push(q);
                    ranks[q] = rank + 1;
                }
            }
        }
        rank += 1;
        if next_front.is_empty() {
            break;
        }
        all_fronts.push(next_front.clone());
        current_front = next_front;
    }

    NonDominatedSortResult { fronts: all_fronts, ranks, domination_counter }
}

#[cfg(test)]
mod test {
    use super::*;

    fn negate(points: &[[f64; 2]]) -> Vec<Vec<f64>> {
        // The teacher's 2-objective minimisation fixtures, mirrored under this
        // crate's maximisation convention by negating every component.
        points.iter().map(|p| vec![-p[0], -p[1]]).collect()
    }

    #[test]
    fn sorts_two_objective_minimisation_fixture_under_maximisation() {
        let points = [
            [1.1, 8.1], [2.1, 6.1], [3.1, 4.1], [3.1, 7.1], [5.1, 3.1],
            [5.1, 5.1], [7.1, 7.1], [8.1, 2.1], [10.1, 6.1], [11.1, 1.1], [11.1, 3.1],
        ];
        let negated = negate(&points);
        let refs: Vec<&[f64]> = negated.iter().map(|v| v.as_slice()).collect();
        let result = fast_non_dominated_sort(&refs, false);

        assert_eq!(result.fronts[0], vec![0, 1, 2, 4, 7, 9]);
        assert_eq!(result.fronts[1], vec![3, 5, 10]);
        assert_eq!(result.fronts[2], vec![6, 8]);
        for idx in &result.fronts[0] {
            assert_eq!(result.domination_counter[*idx], 0);
        }
        assert_eq!(result.domination_counter[5], 2);
        assert_eq!(result.domination_counter[8], 5);
        assert_eq!(result.domination_counter[3], 2);
    }

    #[test]
    fn every_front_k_member_is_dominated_only_by_earlier_fronts() {
        let fitnesses: Vec<Vec<f64>> = vec![
            vec![5.0, 1.0], vec![4.0, 2.0], vec![3.0, 3.0],
            vec![1.0, 1.0], vec![2.0, 0.5],
        ];
        let refs: Vec<&[f64]> = fitnesses.iter().map(|v| v.as_slice()).collect();
        let result = fast_non_dominated_sort(&refs, false);

        for (k, front) in result.fronts.iter().enumerate() {
            for &i in front {
                for (k2, front2) in result.fronts.iter().enumerate() {
                    if k2 >= k {
                        continue;
                    }
                    let dominated_by_earlier = front2
                        .iter()
                        .any(|&j| compare(refs[j], refs[i]) == PreferredSolution::First);
                    assert!(dominated_by_earlier, "front {k} member {i} not dominated by any earlier front");
                }
                for &j in front {
                    if i != j {
                        assert_ne!(compare(refs[i], refs[j]), PreferredSolution::Second);
                    }
                }
            }
        }
    }

    #[test]
    fn first_front_only_skips_the_peeling_pass() {
        let fitnesses: Vec<Vec<f64>> = vec![vec![5.0, 1.0], vec![1.0, 1.0], vec![3.0, 3.0]];
        let refs: Vec<&[f64]> = fitnesses.iter().map(|v| v.as_slice()).collect();
        let result = fast_non_dominated_sort(&refs, true);
        assert_eq!(result.fronts.len(), 1);
        assert_eq!(result.fronts[0], vec![0, 2]);
    }
}
