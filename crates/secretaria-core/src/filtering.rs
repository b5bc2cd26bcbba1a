//! Pure client-side list filtering.
//!
//! Screens filter the loaded snapshot locally: case-insensitive substring
//! match on free-text criteria, exact match on coded criteria. Filtering
//! never mutates the source collection; it produces a derived view. An
//! empty criteria set is the identity, and applying the same criteria twice
//! yields the same result as applying it once.

/// Per-screen filter criteria.
///
/// Implementations hold only optional criteria so that the default value is
/// the empty filter.
pub trait ListFilter<T> {
    /// True when no criterion is set; [`apply_filter`] then returns the
    /// whole list unchanged.
    fn is_empty(&self) -> bool;

    /// Whether a record satisfies every set criterion.
    fn matches(&self, record: &T) -> bool;
}

/// Apply `filter` to a loaded snapshot, returning the derived view.
pub fn apply_filter<T: Clone, F: ListFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    if filter.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Case-insensitive substring match.
///
/// An empty needle matches everything, mirroring an untouched search box.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
