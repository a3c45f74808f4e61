use log::trace;

use crate::Less;

/// Work done by one insertion sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of times the key was compared against an element of the sorted prefix.
    pub comparisons: usize,
    /// Number of elements moved one slot to the right.
    pub shifts: usize,
}

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &F) -> SortStats
where
    F: Less<T>,
{
    let mut stats = SortStats::default();
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less, &mut stats);
    }
    stats
}

/// Moves the last element to the left past every element strictly greater than it.
///
/// The key is left in place while scanning, so nothing in `v` moves until the
/// insertion point is known. `hole` is the slot the key ends up in, one past the
/// element currently being compared, so the scan stops at the front of the slice
/// before any comparison is made.
fn insert_tail<T, F>(v: &mut [T], is_less: &F, stats: &mut SortStats)
where
    F: Less<T>,
{
    debug_assert!(!v.is_empty());
    let key = v.len() - 1;
    let mut hole = key;
    while hole > 0 {
        stats.comparisons += 1;
        if !is_less(&v[key], &v[hole - 1]) {
            break;
        }
        hole -= 1;
    }

    if hole < key {
        // Shift `v[hole..key]` one slot right and drop the key into `v[hole]`.
        v[hole..].rotate_right(1);
        stats.shifts += key - hole;
        trace!("inserted index {key} at {hole}");
    }
}
