// Fractional ranking (average ties)
//
// Values are ordered by a stable index sort, then every run of equal values
// receives the mean of the 1-based ranks it spans.

/// Ascending 1-based ranks, tied values share the average of their positions
///
/// Rank 1 is the smallest value. For a run of equal values occupying sorted
/// positions `i..j` (0-based, exclusive end) the shared rank is `(i + j + 1) / 2`.
pub fn fractional_ranks(values: &[u64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| values[i]);

    let mut ranks = vec![0.0; n];
    let mut start = 0;

    while start < n {
        let value = values[order[start]];
        let mut end = start + 1;
        while end < n && values[order[end]] == value {
            end += 1;
        }

        let shared = (start + end + 1) as f64 / 2.0;
        for &index in &order[start..end] {
            ranks[index] = shared;
        }

        start = end;
    }

    ranks
}

/// Descending 1-based ranks with average ties: `(n + 1) - r`
///
/// Rank 1 goes to the largest value. Reflecting the ascending ranks around
/// `(n + 1) / 2` maps every tie run onto the same average it would get from a
/// direct descending ranking.
pub fn descending_ranks(values: &[u64]) -> Vec<f64> {
    let top = (values.len() + 1) as f64;
    fractional_ranks(values)
        .into_iter()
        .map(|rank| top - rank)
        .collect()
}
