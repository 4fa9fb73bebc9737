//! Pareto-front, crowding/niching, and normalisation kernels (§4.3, §4.4).

pub mod associate;
pub mod crowding;
pub mod dominance;
pub mod kung;
pub mod niching;
pub mod normalise;
pub mod reference_points;
pub mod sort;
