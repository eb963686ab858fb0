//! Indexed Fibonacci heap
//!
//! A Fibonacci heap over a fixed universe of item ids `0..n`, with:
//! - O(1) amortized decrease_key (which also performs insertion)
//! - O(log n) amortized extract_min
//!
//! All nodes live in one arena (`Vec<Node>`) owned by the heap, and every
//! link (parent, first child, left and right sibling) is an index into that
//! arena. Roots and children form circular doubly linked lists, so splicing a
//! node in or out is O(1). Trees of equal rank are only merged lazily, when
//! the minimum is extracted.

use std::mem;

use log::trace;

use crate::data_structures::traits::IndexedPriorityQueue;
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// Lifecycle of an item slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Key is infinite and the node is in no list
    Untouched,
    /// Key is finite and the node is in the root list or in a child list
    Queued,
    /// Removed by `extract_min`; the key is final
    Extracted,
}

/// Structural invariant broken, as detected by [`FibonacciHeap::validate`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapViolation {
    #[error("sibling links around item {0} are inconsistent")]
    BrokenSiblingLink(usize),

    #[error("parent link of item {0} is inconsistent")]
    BrokenParentLink(usize),

    #[error("item {0} has a smaller key than its parent")]
    HeapOrder(usize),

    #[error("rank of item {0} does not match its number of children")]
    WrongRank(usize),

    #[error("subtree of item {0} is too small for its rank")]
    DegreeBound(usize),

    #[error("root does not hold the minimum key (item {0} is smaller)")]
    RootNotMinimum(usize),

    #[error("heap length is {expected} but {found} items are linked")]
    WrongLength { expected: usize, found: usize },

    #[error("item {0} is linked into the heap but is not queued")]
    StateMismatch(usize),

    #[error("root item {0} is marked")]
    MarkedRoot(usize),
}

/// Counters of the structural work done so far
///
/// Every link removes one tree, and trees are only created by inserts, cuts
/// and promotions of an extracted root's children, so
/// `links <= inserts + cuts + promotions` always holds. Every cascading cut
/// consumes a mark, so `cascading_cuts <= marks`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub inserts: u64,
    pub links: u64,
    pub cuts: u64,
    pub cascading_cuts: u64,
    pub marks: u64,
    pub promotions: u64,
    pub consolidations: u64,
}

#[derive(Debug, Clone)]
struct Node<W> {
    key: W,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    rank: usize,
    marked: bool,
    state: NodeState,
}

/// Fibonacci heap over the item ids `0..capacity`
///
/// # Example
///
/// ```rust
/// use fib_sssp::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<u64> = FibonacciHeap::new(4);
/// heap.decrease_key(2, 10).unwrap();
/// heap.decrease_key(3, 7).unwrap();
/// heap.decrease_key(2, 5).unwrap();
/// assert_eq!(heap.extract_min().unwrap(), (2, 5));
/// assert_eq!(heap.extract_min().unwrap(), (3, 7));
/// assert!(heap.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciHeap<W> {
    nodes: Vec<Node<W>>,
    /// Minimum-key root; `None` iff no item is queued
    root: Option<usize>,
    /// Consolidation scratch space indexed by rank, all `None` between calls
    table: Vec<Option<usize>>,
    len: usize,
    stats: HeapStats,
}

/// Slots needed for ranks up to log_phi(n + 1); 2.08 > 1 / ln(phi)
fn rank_table_size(n: usize) -> usize {
    (((n + 1) as f64).ln() * 2.08).ceil() as usize + 1
}

/// F(k) with F(1) = F(2) = 1
fn fibonacci_number(k: usize) -> usize {
    let (mut a, mut b) = (0_usize, 1_usize);
    for _ in 0..k {
        (a, b) = (b, a.saturating_add(b));
    }
    a
}

impl<W> FibonacciHeap<W>
where
    W: Weight,
{
    /// Creates a heap for the items `0..n`, all untouched
    pub fn new(n: usize) -> Self {
        let nodes = (0..n)
            .map(|i| Node {
                key: W::infinity(),
                parent: None,
                child: None,
                left: i,
                right: i,
                rank: 0,
                marked: false,
                state: NodeState::Untouched,
            })
            .collect();

        FibonacciHeap {
            nodes,
            root: None,
            table: vec![None; rank_table_size(n)],
            len: 0,
            stats: HeapStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Item with the smallest key, without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.root.map(|r| (r, self.nodes[r].key))
    }

    pub fn key(&self, item: usize) -> Option<W> {
        self.nodes.get(item).map(|node| node.key)
    }

    pub fn state(&self, item: usize) -> Option<NodeState> {
        self.nodes.get(item).map(|node| node.state)
    }

    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Lowers the key of `item`, enqueueing it on first touch.
    ///
    /// A `key` that is not below the current key is ignored (`Ok(false)`),
    /// so keys only ever decrease. When the new key breaks heap order with
    /// the parent, the node is cut into the root list and the cut cascades
    /// through marked ancestors.
    pub fn decrease_key(&mut self, item: usize, key: W) -> Result<bool> {
        let node = self.nodes.get(item).ok_or(Error::InvalidVertex(item))?;
        if key >= node.key {
            return Ok(false);
        }

        let state = node.state;
        match state {
            NodeState::Extracted => return Err(Error::AlreadyExtracted(item)),
            NodeState::Untouched => {
                self.nodes[item].key = key;
                self.nodes[item].state = NodeState::Queued;
                self.len += 1;
                self.stats.inserts += 1;
                self.add_root(item);
            }
            NodeState::Queued => {
                self.nodes[item].key = key;
                match self.nodes[item].parent {
                    None => self.refresh_root(item),
                    Some(parent) if self.nodes[parent].key <= key => {}
                    Some(parent) => self.cascading_cut(item, parent),
                }
            }
        }

        Ok(true)
    }

    /// Removes the item with the smallest key and consolidates the remaining
    /// trees so that no two roots share a rank.
    pub fn extract_min(&mut self) -> Result<(usize, W)> {
        let min = self.root.ok_or(Error::EmptyHeap)?;
        debug_assert_eq!(self.nodes[min].state, NodeState::Queued);
        let key = self.nodes[min].key;

        let mut max_rank = 0;
        let mut v = self.nodes[min].right;
        while v != min {
            let next = self.nodes[v].right;
            self.insert_by_rank(v, &mut max_rank);
            v = next;
        }

        if let Some(first) = self.nodes[min].child {
            let mut v = first;
            loop {
                let next = self.nodes[v].right;
                self.nodes[v].parent = None;
                self.nodes[v].marked = false;
                self.stats.promotions += 1;
                self.insert_by_rank(v, &mut max_rank);
                v = next;
                if v == first {
                    break;
                }
            }
        }

        let node = &mut self.nodes[min];
        node.state = NodeState::Extracted;
        node.parent = None;
        node.child = None;
        node.rank = 0;
        node.marked = false;
        node.left = min;
        node.right = min;
        self.len -= 1;

        self.root = None;
        let mut roots = 0;
        for rank in 0..max_rank {
            if let Some(v) = self.table[rank].take() {
                self.add_root(v);
                roots += 1;
            }
        }
        self.stats.consolidations += 1;
        trace!("extracted item {} ({} roots left, {} queued)", min, roots, self.len);

        Ok((min, key))
    }

    /// Checks every structural invariant: circular sibling lists, parent
    /// links, unmarked roots, heap order, ranks, the Fibonacci degree bound,
    /// the root pointer and the queued count.
    pub fn validate(&self) -> std::result::Result<(), HeapViolation> {
        let mut order = Vec::with_capacity(self.len);

        if let Some(root) = self.root {
            let roots = self.ring(root)?;
            for &v in &roots {
                if self.nodes[v].parent.is_some() {
                    return Err(HeapViolation::BrokenParentLink(v));
                }
                if self.nodes[v].marked {
                    return Err(HeapViolation::MarkedRoot(v));
                }
                if self.nodes[v].key < self.nodes[root].key {
                    return Err(HeapViolation::RootNotMinimum(v));
                }
            }

            let mut stack = roots;
            while let Some(v) = stack.pop() {
                if self.nodes[v].state != NodeState::Queued {
                    return Err(HeapViolation::StateMismatch(v));
                }
                order.push(v);
                if order.len() > self.nodes.len() {
                    return Err(HeapViolation::WrongLength {
                        expected: self.len,
                        found: order.len(),
                    });
                }

                let Some(first) = self.nodes[v].child else {
                    if self.nodes[v].rank != 0 {
                        return Err(HeapViolation::WrongRank(v));
                    }
                    continue;
                };
                let children = self.ring(first)?;
                if children.len() != self.nodes[v].rank {
                    return Err(HeapViolation::WrongRank(v));
                }
                for &c in &children {
                    if self.nodes[c].parent != Some(v) {
                        return Err(HeapViolation::BrokenParentLink(c));
                    }
                    if self.nodes[c].key < self.nodes[v].key {
                        return Err(HeapViolation::HeapOrder(c));
                    }
                }
                stack.extend(children);
            }
        }

        let queued = self
            .nodes
            .iter()
            .filter(|node| node.state == NodeState::Queued)
            .count();
        if order.len() != self.len || queued != self.len {
            return Err(HeapViolation::WrongLength {
                expected: self.len,
                found: order.len().max(queued),
            });
        }

        // children come after their parent in `order`
        let mut size = vec![1_usize; self.nodes.len()];
        for &v in order.iter().rev() {
            if size[v] < fibonacci_number(self.nodes[v].rank + 2) {
                return Err(HeapViolation::DegreeBound(v));
            }
            if let Some(parent) = self.nodes[v].parent {
                size[parent] += size[v];
            }
        }

        Ok(())
    }

    /// Members of the circular list containing `start`, beginning at `start`
    fn ring(&self, start: usize) -> std::result::Result<Vec<usize>, HeapViolation> {
        let mut members = vec![start];
        let mut v = start;
        loop {
            let next = self.nodes[v].right;
            if self.nodes[next].left != v {
                return Err(HeapViolation::BrokenSiblingLink(v));
            }
            if next == start {
                return Ok(members);
            }
            if members.len() >= self.nodes.len() {
                return Err(HeapViolation::BrokenSiblingLink(start));
            }
            members.push(next);
            v = next;
        }
    }

    /// Inserts `v` to the left of `anchor` in the anchor's list
    fn splice_before(&mut self, v: usize, anchor: usize) {
        let prev = self.nodes[anchor].left;
        self.nodes[v].left = prev;
        self.nodes[v].right = anchor;
        self.nodes[prev].right = v;
        self.nodes[anchor].left = v;
    }

    fn unlink(&mut self, v: usize) {
        let (left, right) = (self.nodes[v].left, self.nodes[v].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;
    }

    /// Puts `v` into the root list and keeps `root` at the minimum
    fn add_root(&mut self, v: usize) {
        self.nodes[v].parent = None;
        match self.root {
            None => {
                self.nodes[v].left = v;
                self.nodes[v].right = v;
                self.root = Some(v);
            }
            Some(root) => {
                self.splice_before(v, root);
                self.refresh_root(v);
            }
        }
    }

    fn refresh_root(&mut self, v: usize) {
        match self.root {
            Some(root) if self.nodes[root].key <= self.nodes[v].key => {}
            _ => self.root = Some(v),
        }
    }

    /// Makes `child` a child of `parent`; both must be roots of equal rank
    fn link(&mut self, child: usize, parent: usize) {
        match self.nodes[parent].child {
            Some(first) => self.splice_before(child, first),
            None => {
                self.nodes[child].left = child;
                self.nodes[child].right = child;
                self.nodes[parent].child = Some(child);
            }
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[child].marked = false;
        self.nodes[parent].rank += 1;
        self.stats.links += 1;
    }

    /// Files the tree rooted at `v` under its rank, linking with the tree
    /// already there until a free slot is found
    fn insert_by_rank(&mut self, mut v: usize, max_rank: &mut usize) {
        loop {
            let rank = self.nodes[v].rank;
            if rank >= self.table.len() {
                self.table.resize(rank + 1, None);
            }
            match self.table[rank].take() {
                None => {
                    self.table[rank] = Some(v);
                    break;
                }
                Some(mut u) => {
                    if self.nodes[u].key < self.nodes[v].key {
                        mem::swap(&mut u, &mut v);
                    }
                    self.link(u, v);
                }
            }
        }
        *max_rank = (*max_rank).max(self.nodes[v].rank + 1);
    }

    /// Moves `v` from its parent's child list into the root list
    fn cut(&mut self, v: usize, parent: usize) {
        let right = self.nodes[v].right;
        self.unlink(v);
        self.nodes[parent].rank -= 1;
        if self.nodes[parent].child == Some(v) {
            self.nodes[parent].child = if self.nodes[parent].rank == 0 {
                None
            } else {
                Some(right)
            };
        }
        self.nodes[v].marked = false;
        self.add_root(v);
        self.stats.cuts += 1;
    }

    fn cascading_cut(&mut self, item: usize, parent: usize) {
        self.cut(item, parent);

        let mut v = parent;
        let mut cascaded = 0;
        // roots are never marked: stop at a root before looking at its mark
        while let Some(grandparent) = self.nodes[v].parent {
            if !self.nodes[v].marked {
                self.nodes[v].marked = true;
                self.stats.marks += 1;
                break;
            }
            self.cut(v, grandparent);
            cascaded += 1;
            v = grandparent;
        }

        if cascaded > 0 {
            self.stats.cascading_cuts += cascaded;
            trace!("decrease of item {} cascaded through {} ancestors", item, cascaded);
        }
    }
}

impl<W> IndexedPriorityQueue<W> for FibonacciHeap<W>
where
    W: Weight,
{
    const NAME: &'static str = "fibonacci";

    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn capacity(&self) -> usize {
        FibonacciHeap::capacity(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn key(&self, item: usize) -> Option<W> {
        FibonacciHeap::key(self, item)
    }

    fn decrease_key(&mut self, item: usize, key: W) -> Result<bool> {
        FibonacciHeap::decrease_key(self, item, key)
    }

    fn extract_min(&mut self) -> Result<(usize, W)> {
        FibonacciHeap::extract_min(self)
    }
}
