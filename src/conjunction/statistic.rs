// Conjunction statistic over a validated point set
//
// Algorithm:
// 1. Stable sort by x (equal x keep input order, which fixes y positions)
// 2. Descending fractional ranks of the reordered y-values
// 3. p = round(n / 3); r1 = sum of the first p ranks, r2 = sum of the last p
// 4. diff = r1 - r2, se = (n + 0.5) * sqrt(p / 6), conj = diff / (p * (n - p))
//
// p <= n / 3 + 1/3 < n / 2 for n >= 9, so the two windows never overlap and
// neither divisor can be zero.

use super::ranking::descending_ranks;
use super::rounding::{round_half_even, round_to_cents, third_of};
use crate::error::Result;
use crate::points::PointSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Final rounded triple written to the output sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConjunctionResult {
    /// Rank-sum difference r1 - r2
    pub difference: i64,
    /// Normalisation term (n + 0.5) * sqrt(p / 6)
    pub standard_error: i64,
    /// Normalised score in [-1, 1], 2 decimals
    pub conjunction: f64,
}

/// Intermediate values of a single computation, before rounding
#[derive(Debug, Clone, PartialEq)]
pub struct ConjunctionBreakdown {
    pub n: usize,
    /// Window width round(n / 3)
    pub p: usize,
    /// y-values in ascending-x order
    pub ys: Vec<u64>,
    /// Descending average-tie ranks of `ys`
    pub ranks: Vec<f64>,
    pub r1: f64,
    pub r2: f64,
    pub difference: f64,
    pub standard_error: f64,
    pub conjunction: f64,
}

impl ConjunctionBreakdown {
    /// Apply the output rounding rules
    pub fn rounded(&self) -> ConjunctionResult {
        ConjunctionResult {
            difference: round_half_even(self.difference) as i64,
            standard_error: round_half_even(self.standard_error) as i64,
            conjunction: round_to_cents(self.conjunction),
        }
    }
}

/// Compute every intermediate quantity of the test
pub fn compute_detailed(points: &PointSet) -> ConjunctionBreakdown {
    let n = points.len();

    let mut sorted = points.points().to_vec();
    sorted.sort_by_key(|point| point.x);
    let ys: Vec<u64> = sorted.iter().map(|point| point.y).collect();
    tracing::debug!(?ys, "y-values ordered by x");

    let ranks = descending_ranks(&ys);
    let p = third_of(n);

    let r1: f64 = ranks[..p].iter().sum();
    let r2: f64 = ranks[n - p..].iter().sum();
    tracing::debug!(n, p, r1, r2, "window rank sums");

    let difference = r1 - r2;
    let standard_error = (n as f64 + 0.5) * (p as f64 / 6.0).sqrt();
    let conjunction = difference / (p * (n - p)) as f64;

    ConjunctionBreakdown {
        n,
        p,
        ys,
        ranks,
        r1,
        r2,
        difference,
        standard_error,
        conjunction,
    }
}

/// Run the monotone conjunction test on a validated point set
pub fn compute(points: &PointSet) -> ConjunctionResult {
    let result = compute_detailed(points).rounded();
    tracing::info!(
        difference = result.difference,
        standard_error = result.standard_error,
        conjunction = result.conjunction,
        "conjunction test complete"
    );
    result
}

/// Validate raw rows (shape, then count) and run the test
pub fn compute_rows(rows: &[Vec<i64>]) -> Result<ConjunctionResult> {
    let points = PointSet::from_rows(rows)?;
    Ok(compute(&points))
}

impl fmt::Display for ConjunctionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.difference, self.standard_error, self.conjunction
        )
    }
}

/// Errors from parsing a rendered result line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseResultError {
    #[error("Expected 3 tokens, found {0}")]
    TokenCount(usize),

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl FromStr for ConjunctionResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let &[difference, standard_error, conjunction] = tokens.as_slice() else {
            return Err(ParseResultError::TokenCount(tokens.len()));
        };

        let invalid = |field: &'static str, value: &str| ParseResultError::InvalidValue {
            field,
            value: value.to_string(),
        };

        Ok(Self {
            difference: difference
                .parse()
                .map_err(|_| invalid("difference", difference))?,
            standard_error: standard_error
                .parse()
                .map_err(|_| invalid("standard_error", standard_error))?,
            conjunction: conjunction
                .parse()
                .map_err(|_| invalid("conjunction", conjunction))?,
        })
    }
}
