//! Combination enumeration over the station-ID universe.

use itertools::Itertools;

/// Returns all combinations of `size` distinct station IDs drawn from
/// `stations`, in lexicographic order over the input.
///
/// The members of each combination appear in the order they have in
/// `stations`, so a sorted universe yields sorted combinations.
pub fn station_combinations(stations: &[usize], size: usize) -> Vec<Vec<usize>> {
    stations.iter().copied().combinations(size).collect()
}

/// Binomial coefficient C(n, k), the number of combinations of size `k`
/// drawn from `n` elements. Returns 0 when `k > n`.
pub fn num_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        // stays integral since the partial product is C(n, i + 1) * (i + 1)!
        result = result * (n - i) / (i + 1);
    }
    result
}
