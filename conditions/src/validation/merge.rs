//! Reductions used when several conditions constrain the same lock.
//!
//! "After" locks (ASSERT_HEIGHT_*, ASSERT_SECONDS_*) keep the latest value,
//! "before" locks keep the earliest. Values are never added together.

/// Tightest of an optional "after" lock and a new assertion.
#[must_use]
pub fn merge_after<T: Ord + Copy>(current: Option<T>, new: T) -> Option<T> {
    Some(match current {
        Some(c) => c.max(new),
        None => new,
    })
}

/// Same as [`merge_after`] for locks where zero means unconstrained.
#[must_use]
pub fn merge_after_or_zero<T: Ord + Copy>(current: T, new: T) -> T {
    current.max(new)
}

/// Tightest of an optional "before" lock and a new assertion.
#[must_use]
pub fn merge_before<T: Ord + Copy>(current: Option<T>, new: T) -> Option<T> {
    Some(match current {
        Some(c) => c.min(new),
        None => new,
    })
}

/// Merges two optional "before" locks from different sources.
#[must_use]
pub fn merge_before_opt<T: Ord + Copy>(current: Option<T>, new: Option<T>) -> Option<T> {
    match new {
        Some(n) => merge_before(current, n),
        None => current,
    }
}

/// A window `[after, before)` is empty when `before <= after`.
#[must_use]
pub fn is_impossible<T: Ord + Copy>(after: Option<T>, before: Option<T>) -> bool {
    match (after, before) {
        (Some(a), Some(b)) => b <= a,
        _ => false,
    }
}
