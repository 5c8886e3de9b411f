// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns every ordering of the indices `0..n` (Heap's algorithm).
///
/// Yields `n!` entries, so keep `n` small (≤ 7).
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut counters = vec![0usize; n];
    let mut result = vec![current.clone()];

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            let swap_with = if i % 2 == 0 { 0 } else { counters[i] };
            current.swap(swap_with, i);
            result.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}

/// Reorders `items` so that position `k` holds `items[permutation[k]]`.
///
/// # Panics
///
/// Panics if `permutation` is not a permutation of `0..items.len()`.
pub fn apply_permutation<T: Clone>(items: &[T], permutation: &[usize]) -> Vec<T> {
    assert_eq!(
        items.len(),
        permutation.len(),
        "permutation length must match items length"
    );

    permutation.iter().map(|&index| items[index].clone()).collect()
}
