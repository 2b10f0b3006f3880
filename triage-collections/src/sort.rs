//! Stable merge sort over any totally ordered element type.

/// Sorts `items` into ascending order, preserving the relative order of
/// equal elements.
///
/// Divide-and-conquer: split at the midpoint, sort each half, merge. The
/// two recursive calls share no mutable state. Runs in O(n log n) time
/// with O(n) auxiliary space per level, deterministically - it does not
/// special-case nearly-sorted input, so worst-case behavior never
/// degrades the way partition-based sorts can.
///
/// Sequences of length 0 or 1 come back as-is.
///
/// # Example
///
/// ```
/// use triage_collections::merge_sort;
///
/// let sorted = merge_sort(vec![3, 1, 4, 1, 5]);
/// assert_eq!(sorted, vec![1, 1, 3, 4, 5]);
/// ```
#[must_use]
pub fn merge_sort<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items);
    let right = merge_sort(right);
    merge(left, right)
}

/// Merges two sorted sequences, taking from `right` only when its element
/// is strictly smaller. Equal elements therefore come from `left` first,
/// which keeps elements that were earlier in the unsplit input earlier in
/// the output - the stability contract.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if r < l {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // One side is exhausted; the other's remainder is already in order.
    merged.extend(left);
    merged.extend(right);
    merged
}
