/// Turns a strict `is_less` predicate into the `a <= b` predicate expected by
/// [`slice::is_sorted_by`].
#[macro_export]
macro_rules! is_less_to_le {
    ( $x:ident ) => {{
        |a, b| !$x(b, a)
    }};
}

/// Whether `elem` lives inside `range`, the pointer range of the slice being sorted.
#[cfg(test)]
pub(crate) fn contains<T>(range: &std::ops::Range<*const T>, elem: &T) -> bool {
    range.contains(&(elem as *const T))
}
