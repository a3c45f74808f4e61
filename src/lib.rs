//! Stable, in-place insertion sort.
//!
//! ```
//! let mut v = [5, -1, 0, 5, 3];
//! insertion_sort::sort(&mut v);
//! assert_eq!(v, [-1, 0, 3, 5, 5]);
//!
//! assert!(insertion_sort::sort_checked(&mut v, 6).is_err());
//! ```
use std::cmp::Ordering;

use log::debug;

pub use error::SortError;
pub use insertion_sort::SortStats;

pub mod constants;
mod error;
mod insertion_sort;
mod util;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Sorts the slice in ascending order.
///
/// The sort is stable and allocates nothing. It runs in *O*(*n*) time on
/// sorted input and *O*(*n*^2) otherwise.
///
/// The slice is borrowed mutably for the whole call; sharing one sequence
/// between threads needs external synchronisation.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort_by(v, &T::lt);
}

/// Sorts the slice with a comparator function, keeping equal elements in order.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    insertion_sort_by(v, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, keeping equal keys in order.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    insertion_sort_by(v, &|a: &T, b: &T| f(a).lt(&f(b)));
}

/// Sorts the slice after checking that `len` describes it.
///
/// Returns [`SortError`] without touching `v` if `len` is negative or differs
/// from `v.len()`.
pub fn sort_checked<T>(v: &mut [T], len: isize) -> Result<(), SortError>
where
    T: Ord,
{
    error::check_len(len, v.len())?;
    sort(v);
    Ok(())
}

/// Sorts the slice and reports how many comparisons and shifts it took.
#[must_use]
pub fn sort_with_stats<T>(v: &mut [T]) -> SortStats
where
    T: Ord,
{
    insertion_sort_by(v, &T::lt)
}

fn insertion_sort_by<T, F>(v: &mut [T], is_less: &F) -> SortStats
where
    F: Less<T>,
{
    let stats = insertion_sort::insertion_sort(v, is_less);
    debug!(
        "sorted {} elements with {} comparisons and {} shifts",
        v.len(),
        stats.comparisons,
        stats.shifts
    );
    debug_assert!(v.is_sorted_by(is_less_to_le!(is_less)));
    stats
}
