// Rounding conventions
//
// All rounding is half-to-even (banker's rounding). Rank sums are multiples
// of 0.5, so the difference can land exactly on a half and the mode matters.

/// Round to the nearest integer, ties to even
pub fn round_half_even(x: f64) -> f64 {
    normalize_zero(x.round_ties_even())
}

/// Round to 2 decimals by scaling to cents, ties to even
pub fn round_to_cents(x: f64) -> f64 {
    normalize_zero((x * 100.0).round_ties_even() / 100.0)
}

/// Window width `round(n / 3)`
///
/// For integer `n` the fraction of `n / 3` is 0, 1/3 or 2/3, never one half,
/// so the result is independent of rounding mode and equals `(n + 1) / 3`.
pub fn third_of(n: usize) -> usize {
    (n + 1) / 3
}

fn normalize_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
