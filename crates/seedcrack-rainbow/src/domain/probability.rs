//! Success-probability estimate for a set of table parameters
//!
//! Straightforward application of the rainbow-table coverage recurrence:
//! the number of distinct seeds covered at column `i+1` is
//! `m[i+1] = N * (1 - exp(-m[i] / N))`, and a lookup misses a table only if
//! it misses every column.

/// Probability that a lookup over `table_count` independent tables with the
/// given parameters recovers a uniformly random seed.
pub fn success_probability(
    chain_num: u64,
    chain_len: u32,
    table_count: u32,
    key_space: u64,
) -> f64 {
    let n = key_space as f64;
    let mut m = chain_num as f64;
    let mut miss = 1.0f64;
    for _ in 0..chain_len {
        miss *= 1.0 - m / n;
        m = n * (1.0 - (-m / n).exp());
    }
    1.0 - miss.powi(table_count as i32)
}
