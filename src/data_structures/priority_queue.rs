use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::data_structures::traits::IndexedPriorityQueue;
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// Binary min-heap on `(key, item)` pairs that emulates decrease-key lazily
///
/// Lowering a key pushes a fresh entry and leaves the old one in place.
/// Extraction discards entries whose key is above the best key recorded for
/// their item, so the heap may hold several entries per item and every
/// decrease-key costs O(log n).
#[derive(Debug)]
pub struct LazyBinaryHeap<W>
where
    W: Weight,
{
    /// The underlying binary heap, possibly holding stale entries
    heap: BinaryHeap<Reverse<(W, usize)>>,
    /// Best key recorded for each item
    best: Vec<W>,
    extracted: Vec<bool>,
    live: usize,
}

impl<W> LazyBinaryHeap<W>
where
    W: Weight,
{
    /// Creates an empty queue for the items `0..n`
    pub fn new(n: usize) -> Self {
        LazyBinaryHeap {
            heap: BinaryHeap::new(),
            best: vec![W::infinity(); n],
            extracted: vec![false; n],
            live: 0,
        }
    }

    /// Number of entries in the underlying heap, stale ones included
    pub fn entries(&self) -> usize {
        self.heap.len()
    }

    /// Clears the queue, making every item untouched again
    pub fn clear(&mut self) {
        self.heap.clear();
        self.best.fill(W::infinity());
        self.extracted.fill(false);
        self.live = 0;
    }
}

impl<W> IndexedPriorityQueue<W> for LazyBinaryHeap<W>
where
    W: Weight,
{
    const NAME: &'static str = "binary";

    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn capacity(&self) -> usize {
        self.best.len()
    }

    fn len(&self) -> usize {
        self.live
    }

    fn key(&self, item: usize) -> Option<W> {
        self.best.get(item).copied()
    }

    fn decrease_key(&mut self, item: usize, key: W) -> Result<bool> {
        let best = *self.best.get(item).ok_or(Error::InvalidVertex(item))?;
        if key >= best {
            return Ok(false);
        }
        if self.extracted[item] {
            return Err(Error::AlreadyExtracted(item));
        }
        if !best.is_finite() {
            self.live += 1;
        }
        self.best[item] = key;
        self.heap.push(Reverse((key, item)));
        Ok(true)
    }

    fn extract_min(&mut self) -> Result<(usize, W)> {
        while let Some(Reverse((key, item))) = self.heap.pop() {
            if self.extracted[item] || key > self.best[item] {
                continue;
            }
            self.extracted[item] = true;
            self.live -= 1;
            return Ok((item, key));
        }
        Err(Error::EmptyHeap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_entries_are_skipped() {
        let mut queue: LazyBinaryHeap<u64> = LazyBinaryHeap::new(3);
        queue.decrease_key(0, 50).unwrap();
        queue.decrease_key(1, 20).unwrap();
        queue.decrease_key(0, 10).unwrap();
        assert_eq!(queue.entries(), 3);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.extract_min().unwrap(), (0, 10));
        assert_eq!(queue.extract_min().unwrap(), (1, 20));
        assert!(queue.is_empty());
        // the stale (50, 0) entry is dropped here
        assert!(matches!(queue.extract_min(), Err(Error::EmptyHeap)));
        assert_eq!(queue.entries(), 0);
    }

    #[test]
    fn ties_break_on_item_id() {
        let mut queue: LazyBinaryHeap<u32> = LazyBinaryHeap::new(4);
        for item in [3, 1, 2] {
            queue.decrease_key(item, 7).unwrap();
        }
        let order: Vec<usize> = (0..3).map(|_| queue.extract_min().unwrap().0).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn misuse_is_reported() {
        let mut queue: LazyBinaryHeap<u32> = LazyBinaryHeap::new(2);
        assert!(matches!(queue.decrease_key(2, 1), Err(Error::InvalidVertex(2))));
        queue.decrease_key(0, 4).unwrap();
        queue.extract_min().unwrap();
        assert!(!queue.decrease_key(0, 9).unwrap());
        assert!(matches!(queue.decrease_key(0, 2), Err(Error::AlreadyExtracted(0))));
    }

    #[test]
    fn clear_resets_every_item() {
        let mut queue: LazyBinaryHeap<u32> = LazyBinaryHeap::new(2);
        queue.decrease_key(1, 4).unwrap();
        queue.extract_min().unwrap();
        queue.clear();
        assert_eq!(queue.key(1), Some(u32::MAX));
        assert!(queue.decrease_key(1, 2).unwrap());
        assert_eq!(queue.extract_min().unwrap(), (1, 2));
    }
}
