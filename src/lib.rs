//! conjtest - rank-based monotone conjunction test
//!
//! Reads a small set of 2D integer points, sorts them by x, ranks the
//! y-values in descending order with average ties, and contrasts the rank
//! sums of the first and last thirds.

pub mod cli;
pub mod config;
pub mod conjunction;
pub mod error;
pub mod output;
pub mod points;

pub use conjunction::{compute, ConjunctionResult};
pub use error::{ConjunctionError, Result};
pub use points::{Point, PointSet};
