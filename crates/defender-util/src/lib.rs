//! Small slice helpers: weighted random picks, weight normalization and
//! boolean reductions.

mod logic;
mod weighted;

pub use logic::BoolReduce;
pub use weighted::{UtilError, choose_weighted, normalized};
