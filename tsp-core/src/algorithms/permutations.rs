//! Generates all orderings of a sequence using in-place backtracking swaps.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/permutations_test.rs"]
mod permutations_test;

use std::ops::ControlFlow;

const MAX_PREALLOCATED: usize = 1 << 16;

/// Visits every permutation of the given items exactly once. Items are permuted in place in
/// a single working buffer: at depth `k` each element at position `i >= k` is swapped into
/// position `k`, the rest is permuted recursively and then the swap is reverted.
///
/// The visitor receives the buffer each time it holds a complete permutation and can stop the
/// enumeration by returning `ControlFlow::Break`. The buffer is restored to its original order
/// when the function returns, including an early break.
///
/// The visit order is deterministic, but it is not lexicographic.
pub fn for_each_permutation<T, F>(items: &mut [T], mut visitor: F) -> ControlFlow<()>
where
    F: FnMut(&[T]) -> ControlFlow<()>,
{
    permute(items, 0, &mut visitor)
}

/// Returns all permutations of the given items, `n!` in total. For empty input, a single empty
/// permutation is returned.
pub fn get_permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut buffer = items.to_vec();
    let mut permutations = Vec::with_capacity(factorial(items.len()).min(MAX_PREALLOCATED));

    // NOTE copy is required: the buffer is reused for all branches
    let _ = for_each_permutation(buffer.as_mut_slice(), |permutation| {
        permutations.push(permutation.to_vec());
        ControlFlow::Continue(())
    });

    permutations
}

/// Returns `n!`, saturating on overflow.
pub fn factorial(n: usize) -> usize {
    (1..=n).try_fold(1_usize, |acc, value| acc.checked_mul(value)).unwrap_or(usize::MAX)
}

fn permute<T, F>(items: &mut [T], k: usize, visitor: &mut F) -> ControlFlow<()>
where
    F: FnMut(&[T]) -> ControlFlow<()>,
{
    if k == items.len() {
        return visitor(items);
    }

    for i in k..items.len() {
        items.swap(k, i);
        let flow = permute(items, k + 1, visitor);
        items.swap(k, i);

        flow?;
    }

    ControlFlow::Continue(())
}
