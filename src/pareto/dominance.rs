//! Pareto dominance under the maximization convention (§4.3, GLOSSARY).
//!
//! Grounded on the teacher's `ParetoConstrainedDominance` comparator, stripped of
//! its feasibility/constraint-violation branch: this spec's data model carries no
//! constraint values, so only the final "objective-wise Pareto dominance" step
//! survives, and it no longer needs the per-objective minimise/maximise sign flip
//! because every objective here is maximized uniformly (§3 GLOSSARY).

/// Which solution a pairwise comparison prefers, mirroring the teacher's
/// `PreferredSolution` three-way outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredSolution {
    First,
    Second,
    MutuallyPreferred,
}

/// `a` Pareto-dominates `b` iff every component of `a` is ≥ the corresponding
/// component of `b` and at least one is strictly greater (GLOSSARY).
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut strictly_better = false;
    for (x, y) in a.iter().zip(b) {
        if x < y {
            return false;
        }
        if x > y {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Pairwise dominance relation between two fitness vectors, ported from the
/// teacher's `ParetoConstrainedDominance::compare` objective sweep (the "which one
/// wins a tournament" shape used throughout §4.5).
pub fn compare(a: &[f64], b: &[f64]) -> PreferredSolution {
    debug_assert_eq!(a.len(), b.len());
    let mut relation = PreferredSolution::MutuallyPreferred;
    for (x, y) in a.iter().zip(b) {
        if x > y {
            if relation == PreferredSolution::Second {
                return PreferredSolution::MutuallyPreferred;
            }
            relation = PreferredSolution::First;
        } else if x < y {
            if relation == PreferredSolution::First {
                return PreferredSolution::MutuallyPreferred;
            }
            relation = PreferredSolution::Second;
        }
    }
    relation
}
