// Monotone Conjunction Test
//
// Rank-based contrast between the extreme thirds of a point set sorted by x.
// Points are ordered by x (stable), their y-values are ranked in descending
// order with average ties, and the rank sums of the first and last thirds are
// compared.
//
// Outputs:
// - difference: r1 - r2, rounded half-to-even
// - standard_error: (n + 0.5) * sqrt(p / 6), rounded half-to-even
// - conjunction: difference / (p * (n - p)), rounded to 2 decimals
//
// Sign convention: y increasing with x gives a positive difference and a
// conjunction of +1.00 for a perfectly monotone set.

mod ranking;
mod rounding;
mod statistic;

pub use ranking::{descending_ranks, fractional_ranks};
pub use rounding::{round_half_even, round_to_cents, third_of};
pub use statistic::{
    compute, compute_detailed, compute_rows, ConjunctionBreakdown, ConjunctionResult,
    ParseResultError,
};
