//! Replacement strategies (§4.6): build the next generation from the combined
//! pool of the previous population and its children.

pub mod nsga2;
pub mod nsga3;
pub mod soga;
