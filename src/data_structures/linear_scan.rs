use crate::data_structures::traits::IndexedPriorityQueue;
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// Queue without any auxiliary structure: keys live in a plain array and
/// extract-min scans every item that is not finalized yet.
///
/// decrease_key is a single array write; extract_min is O(n), so a full
/// Dijkstra run is O(n^2). Used as the obviously-correct reference on small
/// inputs and to locate the crossover point against the heaps on dense ones.
#[derive(Debug, Clone)]
pub struct LinearScanQueue<W> {
    keys: Vec<W>,
    finalized: Vec<bool>,
    frontier: usize,
}

impl<W> LinearScanQueue<W>
where
    W: Weight,
{
    pub fn new(n: usize) -> Self {
        LinearScanQueue {
            keys: vec![W::infinity(); n],
            finalized: vec![false; n],
            frontier: 0,
        }
    }
}

impl<W> IndexedPriorityQueue<W> for LinearScanQueue<W>
where
    W: Weight,
{
    const NAME: &'static str = "naive";

    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn capacity(&self) -> usize {
        self.keys.len()
    }

    fn len(&self) -> usize {
        self.frontier
    }

    fn key(&self, item: usize) -> Option<W> {
        self.keys.get(item).copied()
    }

    fn decrease_key(&mut self, item: usize, key: W) -> Result<bool> {
        let current = *self.keys.get(item).ok_or(Error::InvalidVertex(item))?;
        if key >= current {
            return Ok(false);
        }
        if self.finalized[item] {
            return Err(Error::AlreadyExtracted(item));
        }
        if !current.is_finite() {
            self.frontier += 1;
        }
        self.keys[item] = key;
        Ok(true)
    }

    fn extract_min(&mut self) -> Result<(usize, W)> {
        let mut best: Option<usize> = None;
        for (item, &key) in self.keys.iter().enumerate() {
            if self.finalized[item] || !key.is_finite() {
                continue;
            }
            if best.map_or(true, |b| key < self.keys[b]) {
                best = Some(item);
            }
        }

        let item = best.ok_or(Error::EmptyHeap)?;
        self.finalized[item] = true;
        self.frontier -= 1;
        Ok((item, self.keys[item]))
    }
}
