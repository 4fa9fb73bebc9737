//! Generic k-ary tournament, ported from the teacher's `TournamentSelector`
//! (`examples/s-simoncelli-optirustic/src/operators/selector.rs`), generalized
//! over any binary "does a beat b" predicate so the same primitive serves the
//! SOGA raw-fitness tournament (§4.2) and the NSGA-II/NSGA-III binary
//! tournaments (§4.5) without three copies of the draw-and-compare loop.

use rand::Rng;

/// Draw `k` independent uniform indices into `[0, population_len)` with
/// replacement and return the index of the one `beats` prefers, ties broken by
/// keeping the earliest-drawn winner (§4.2: "no preparation step").
///
/// `beats(a, b)` must report whether the candidate at index `a` wins against
/// the candidate at index `b`.
pub fn tournament_select(population_len: usize, k: usize, rng: &mut impl Rng, beats: impl Fn(usize, usize) -> bool) -> usize {
    assert!(population_len > 0, "cannot run a tournament over an empty population");
    assert!(k >= 2, "tournament size must be at least 2");

    let mut winner = rng.gen_range(0..population_len);
    for _ in 1..k {
        let challenger = rng.gen_range(0..population_len);
        if beats(challenger, winner) {
            winner = challenger;
        }
    }
    winner
}

/// The binary tournament §4.5 uses for both multi-objective modes: two
/// independent draws, `beats` decides the winner.
pub fn binary_tournament(population_len: usize, rng: &mut impl Rng, beats: impl Fn(usize, usize) -> bool) -> usize {
    tournament_select(population_len, 2, rng, beats)
}
