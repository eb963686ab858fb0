use std::fmt::Debug;

use crate::graph::weight::Weight;
use crate::Result;

/// Priority queue over a fixed universe of item ids `0..capacity`
///
/// Every item starts with key `W::infinity()` and outside the queue. Lowering
/// the key of an untouched item enqueues it; extracting an item removes it
/// permanently. This is the contract Dijkstra's relaxation loop needs, and
/// the Fibonacci heap, the lazy binary heap and the linear scan all provide it.
pub trait IndexedPriorityQueue<W>: Debug
where
    W: Weight,
{
    /// Short identifier used in logs and benchmark reports
    const NAME: &'static str;

    /// Creates a queue for the items `0..capacity`, all with infinite key
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Size of the item universe
    fn capacity(&self) -> usize;

    /// Number of items with a finite key that have not been extracted yet
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current key of `item`; `None` if the id is out of range
    fn key(&self, item: usize) -> Option<W>;

    /// Lowers the key of `item` to `key`.
    ///
    /// Returns `Ok(false)` without touching anything when `key` is not
    /// smaller than the current key, `Ok(true)` when the key was lowered.
    /// Fails with [`crate::Error::InvalidVertex`] for ids outside the
    /// universe and with [`crate::Error::AlreadyExtracted`] when asked to
    /// lower an item that was already extracted.
    fn decrease_key(&mut self, item: usize, key: W) -> Result<bool>;

    /// Removes and returns the item with the smallest key.
    ///
    /// Fails with [`crate::Error::EmptyHeap`] when no item is queued.
    fn extract_min(&mut self) -> Result<(usize, W)>;
}
