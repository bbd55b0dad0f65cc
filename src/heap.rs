//! Heapsort driven by a `less` predicate.
//!
//! Unlike `slice::sort_by`, this sort never panics on a comparator that is not
//! a total order. Every index it touches is bounded by the slice length and the
//! number of comparator calls is O(n log n) whatever the comparator answers, so
//! the result is always a permutation of the input.

/// Restores the heap property below `node`, looking only at `v[..]`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, less: &mut F)
    where F: FnMut(&T, &T) -> bool
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Pick the greater of the two children.
        if child + 1 < v.len() && less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}

/// Sorts `v` in place so that, for a strict weak ordering `less`, no element
/// is less than its predecessor.
///
/// # Example
///
/// ```
/// let mut v = [5, 1, 4, 2, 3];
/// weakord::heap::sort_by_less(&mut v, |a, b| a < b);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_by_less<T, F>(v: &mut [T], mut less: F)
    where F: FnMut(&T, &T) -> bool
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for node in (0..len / 2).rev() {
        sift_down(v, node, &mut less);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &mut less);
    }
}
