//! Binary comparators for multi-objective tournament selection (§4.5), ported
//! from the teacher's `BinaryComparisonOperator`/`ParetoConstrainedDominance` shape
//! with the constraint-violation branch removed: this spec's [`Candidate`] carries
//! no constraint values, so only the rank/distance/niche-count tie-breaking chain
//! survives.

use crate::candidate::Candidate;
use crate::gene::Gene;

/// `a` beats `b` iff `a.rank < b.rank`, or tied rank and `a.distance > b.distance`
/// (§4.5, NSGA-II).
pub fn crowded_compare<G: Gene>(a: &Candidate<G>, b: &Candidate<G>) -> bool {
    if a.rank != b.rank {
        return a.rank < b.rank;
    }
    a.distance > b.distance
}

/// `a` beats `b` iff `a.rank < b.rank`, else tied rank and `a.niche_count <
/// b.niche_count`, else tied both and `a.distance < b.distance` (§4.5, NSGA-III).
pub fn niched_compare<G: Gene>(a: &Candidate<G>, b: &Candidate<G>) -> bool {
    if a.rank != b.rank {
        return a.rank < b.rank;
    }
    if a.niche_count != b.niche_count {
        return a.niche_count < b.niche_count;
    }
    a.distance < b.distance
}

#[cfg(test)]
mod test {
    use super::*;

    fn candidate_with(rank: usize, distance: f64, niche_count: usize) -> Candidate<f64> {
        let mut c = Candidate::new(vec![0.0]);
        c.rank = rank;
        c.distance = distance;
        c.niche_count = niche_count;
        c
    }

    #[test]
    fn crowded_compare_prefers_lower_rank() {
        let a = candidate_with(0, 1.0, 0);
        let b = candidate_with(1, 100.0, 0);
        assert!(crowded_compare(&a, &b));
        assert!(!crowded_compare(&b, &a));
    }

    #[test]
    fn crowded_compare_prefers_larger_distance_when_tied() {
        let a = candidate_with(0, 5.0, 0);
        let b = candidate_with(0, 1.0, 0);
        assert!(crowded_compare(&a, &b));
    }

    #[test]
    fn niched_compare_prefers_lower_rank_then_lower_niche_count_then_smaller_distance() {
        let better_rank = candidate_with(0, 10.0, 5);
        let worse_rank = candidate_with(1, 0.0, 0);
        assert!(niched_compare(&better_rank, &worse_rank));

        let fewer_niche = candidate_with(0, 10.0, 1);
        let more_niche = candidate_with(0, 0.0, 5);
        assert!(niched_compare(&fewer_niche, &more_niche));

        let closer = candidate_with(0, 1.0, 2);
        let farther = candidate_with(0, 5.0, 2);
        assert!(niched_compare(&closer, &farther));
    }
}
