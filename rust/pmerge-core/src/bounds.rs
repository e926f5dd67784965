//! Reference comparison counts for reports and tests.

/// `ceil(log2(n!))`: no comparison sort can beat this in the worst case.
pub fn information_bound(n: usize) -> u64 {
    let bits: f64 = (2..=n).map(|k| (k as f64).log2()).sum();
    // Absorb float noise on exact powers of two before rounding up.
    (bits - 1e-9).ceil().max(0.0) as u64
}

/// Worst-case comparisons of textbook Ford-Johnson:
/// `sum over k in 1..=n of ceil(log2(3k / 4))`.
pub fn ford_johnson_bound(n: usize) -> u64 {
    (1..=n as u64).map(|k| ceil_log2(3 * k).saturating_sub(2)).sum()
}

fn ceil_log2(x: u64) -> u64 {
    debug_assert!(x > 0);
    u64::from(u64::BITS - (x - 1).leading_zeros())
}
