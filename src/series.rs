use std::ops::Range;

/// Evaluates the `k`-th Leibniz term, already scaled by 4: `4 * (-1)^k / (2k + 1)`.
///
/// The sign comes from the parity of `k`, so large indices never go through
/// a real-valued power.
pub fn term(k: u64) -> f64 {
    let divisor: f64 = 2.0 * k as f64 + 1.0;
    if k % 2 == 0 {
        4.0 / divisor
    } else {
        -4.0 / divisor
    }
}

/// Sums the terms over `range` on the calling thread.
pub fn sequential(range: Range<u64>) -> f64 {
    let mut sum: f64 = 0.0;
    for k in range {
        sum += term(k);
    }
    sum
}
