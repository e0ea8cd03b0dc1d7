use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::{SearchError, SearchResult};

/// Positions already queued or expanded during the current search.
///
/// Insert-only between resets.
pub struct VisitedSet<P> {
    seen: FxHashSet<P>,
}

impl<P> Default for VisitedSet<P> {
    fn default() -> Self {
        Self { seen: FxHashSet::default() }
    }
}

impl<P: Eq + Hash> VisitedSet<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pos`. Returns false when it was already present.
    pub fn insert(&mut self, pos: P) -> SearchResult<bool> {
        if self.seen.contains(&pos) {
            return Ok(false);
        }
        self.seen.try_reserve(1).map_err(SearchError::alloc("visited set", 1))?;
        Ok(self.seen.insert(pos))
    }

    pub fn contains(&self, pos: &P) -> bool {
        self.seen.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen = FxHashSet::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_first_sighting_only() {
        let mut v = VisitedSet::new();
        assert!(v.insert((0, 0)).unwrap());
        assert!(!v.insert((0, 0)).unwrap());
        assert!(v.insert((0, 1)).unwrap());
        assert_eq!(v.len(), 2);
        assert!(v.contains(&(0, 1)));
        assert!(!v.contains(&(1, 1)));
        v.clear();
        assert!(v.is_empty());
    }
}
