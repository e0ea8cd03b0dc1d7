//! Min-priority queue of candidate paths.
//!
//! Entries are ordered by estimated total cost `f` (ascending). Entries with
//! equal `f` pop in insertion order: each push takes a monotonically
//! increasing sequence number and the lower number wins.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{SearchError, SearchResult};
use crate::path::Path;

struct Entry<P> {
    f: f64,
    seq: u64,
    path: Path<P>,
}

impl<P> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<P> Eq for Entry<P> {}
impl<P> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert both keys for min-f, then FIFO
        other.f.total_cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Frontier<P> {
    heap: BinaryHeap<Entry<P>>,
    seq: u64,
    // Makes the next push report an allocation failure.
    #[cfg(test)]
    pub(crate) fail_next_push: bool,
}

impl<P> Default for Frontier<P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            #[cfg(test)]
            fail_next_push: false,
        }
    }
}

impl<P> Frontier<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: Path<P>, f: f64) -> SearchResult<()> {
        #[cfg(test)]
        if std::mem::take(&mut self.fail_next_push) {
            return Err(SearchError::Allocation { what: "frontier", requested: 1 });
        }
        self.heap.try_reserve(1).map_err(SearchError::alloc("frontier", 1))?;
        self.heap.push(Entry { f, seq: self.seq, path });
        self.seq = self.seq.wrapping_add(1);
        Ok(())
    }

    /// Remove the entry with the smallest `f`.
    pub fn pop(&mut self) -> Option<Path<P>> {
        self.heap.pop().map(|e| e.path)
    }

    pub fn peek(&self) -> Option<&Path<P>> {
        self.heap.peek().map(|e| &e.path)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry and release the backing storage.
    pub fn clear(&mut self) {
        self.heap = BinaryHeap::new();
        self.seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(c: char) -> Path<char> {
        Path::new(c)
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut q = Frontier::new();
        q.push(at('c'), 3.0).unwrap();
        q.push(at('a'), 1.0).unwrap();
        q.push(at('b'), 2.0).unwrap();
        assert_eq!(q.peek().map(|p| *p.current()), Some('a'));
        let order: Vec<char> = std::iter::from_fn(|| q.pop()).map(|p| *p.current()).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn equal_f_pops_in_insertion_order() {
        let mut q = Frontier::new();
        for c in ['x', 'y', 'z'] {
            q.push(at(c), 5.0).unwrap();
        }
        q.push(at('w'), 4.5).unwrap();
        let order: Vec<char> = std::iter::from_fn(|| q.pop()).map(|p| *p.current()).collect();
        assert_eq!(order, vec!['w', 'x', 'y', 'z']);
    }

    #[test]
    fn clear_empties_and_resets() {
        let mut q = Frontier::new();
        q.push(at('a'), 0.0).unwrap();
        assert_eq!(q.len(), 1);
        q.clear();
        assert!(q.is_empty());
        assert!(q.peek().is_none());
        assert!(q.pop().is_none());
    }
}
