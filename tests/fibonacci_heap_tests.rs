//! Property-based tests for the indexed Fibonacci heap
//!
//! Random interleavings of decrease_key and extract_min are replayed against a
//! plain array model; after every operation the heap must pass `validate()`.

use fib_sssp::data_structures::{
    FibonacciHeap, IndexedPriorityQueue, LazyBinaryHeap, LinearScanQueue, NodeState,
};
use fib_sssp::Error;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Decrease(usize, u32),
    Extract,
}

const MAX_ITEMS: usize = 64;

/// With `distinct` set, the low bits of every key encode its item, so no two
/// items ever share a key and every queue pops in the same order.
fn op_strategy(n: usize, distinct: bool) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..n, 0_u32..1_000).prop_map(move |(item, key)| {
            if distinct {
                Op::Decrease(item, key * MAX_ITEMS as u32 + item as u32)
            } else {
                Op::Decrease(item, key)
            }
        }),
        1 => Just(Op::Extract),
    ]
}

fn scenario_with(distinct: bool) -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1_usize..MAX_ITEMS).prop_flat_map(move |n| {
        (Just(n), prop::collection::vec(op_strategy(n, distinct), 0..400))
    })
}

fn scenario() -> impl Strategy<Value = (usize, Vec<Op>)> {
    scenario_with(false)
}

/// Replays `ops` on any queue and on an array model, comparing as it goes
fn replay<Q: IndexedPriorityQueue<u32>>(
    queue: &mut Q,
    n: usize,
    ops: &[Op],
    mut after_each: impl FnMut(&Q) -> Result<(), TestCaseError>,
) -> Result<Vec<(usize, u32)>, TestCaseError> {
    let mut model: Vec<Option<u32>> = vec![None; n];
    let mut extracted = vec![false; n];
    let mut popped = Vec::new();

    for op in ops {
        match *op {
            Op::Decrease(item, key) => {
                let current = model[item].unwrap_or(u32::MAX);
                let result = queue.decrease_key(item, key);
                if key >= current {
                    prop_assert!(matches!(result, Ok(false)));
                } else if extracted[item] {
                    prop_assert!(matches!(result, Err(Error::AlreadyExtracted(i)) if i == item));
                } else {
                    prop_assert!(matches!(result, Ok(true)));
                    model[item] = Some(key);
                }
                prop_assert_eq!(queue.key(item), Some(model[item].unwrap_or(u32::MAX)));
            }
            Op::Extract => {
                let live_min = (0..n)
                    .filter(|&i| !extracted[i])
                    .filter_map(|i| model[i])
                    .min();
                match (queue.extract_min(), live_min) {
                    (Ok((item, key)), Some(min)) => {
                        prop_assert_eq!(key, min);
                        prop_assert_eq!(model[item], Some(key));
                        prop_assert!(!extracted[item]);
                        extracted[item] = true;
                        popped.push((item, key));
                    }
                    (Err(Error::EmptyHeap), None) => {}
                    (got, expected) => {
                        return Err(TestCaseError::fail(format!(
                            "extract_min gave {:?}, model min {:?}",
                            got, expected
                        )));
                    }
                }
            }
        }

        let live = (0..n).filter(|&i| !extracted[i] && model[i].is_some()).count();
        prop_assert_eq!(queue.len(), live);
        after_each(queue)?;
    }

    Ok(popped)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fibonacci_heap_matches_model((n, ops) in scenario()) {
        let mut heap = FibonacciHeap::new(n);
        replay(&mut heap, n, &ops, |heap| {
            heap.validate().map_err(|e| TestCaseError::fail(e.to_string()))
        })?;
    }

    #[test]
    fn all_queues_pop_in_the_same_order((n, ops) in scenario_with(true)) {
        let fib = replay(&mut FibonacciHeap::new(n), n, &ops, |_| Ok(()))?;
        let bin = replay(&mut LazyBinaryHeap::new(n), n, &ops, |_| Ok(()))?;
        let naive = replay(&mut LinearScanQueue::new(n), n, &ops, |_| Ok(()))?;
        prop_assert_eq!(&fib, &bin);
        prop_assert_eq!(&fib, &naive);
    }

    #[test]
    fn every_queue_matches_the_model_on_tied_keys((n, ops) in scenario()) {
        replay(&mut LazyBinaryHeap::new(n), n, &ops, |_| Ok(()))?;
        replay(&mut LinearScanQueue::new(n), n, &ops, |_| Ok(()))?;
    }

    #[test]
    fn drain_is_sorted_and_exhaustive(
        keys in prop::collection::vec(0_u64..10_000, 1..300),
        lowered in prop::collection::vec((any::<prop::sample::Index>(), 0_u64..10_000), 0..300),
    ) {
        let n = keys.len();
        let mut heap = FibonacciHeap::new(n);
        let mut expected = keys.clone();
        for (item, &key) in keys.iter().enumerate() {
            heap.decrease_key(item, key).unwrap();
        }
        for (index, key) in lowered {
            let item = index.index(n);
            heap.decrease_key(item, key).unwrap();
            expected[item] = expected[item].min(key);
        }

        let mut seen = vec![false; n];
        let mut last = 0;
        for _ in 0..n {
            let (item, key) = heap.extract_min().unwrap();
            prop_assert!(key >= last);
            prop_assert_eq!(key, expected[item]);
            prop_assert!(!seen[item]);
            seen[item] = true;
            last = key;
        }
        prop_assert!(heap.is_empty());
        prop_assert!(matches!(heap.extract_min(), Err(Error::EmptyHeap)));
    }
}

#[test]
fn extraction_after_empty_is_never_a_silent_repeat() {
    let mut heap: FibonacciHeap<u32> = FibonacciHeap::new(3);
    for (item, key) in [(0, 5), (1, 2), (2, 9)] {
        heap.decrease_key(item, key).unwrap();
    }
    let order: Vec<usize> = (0..3).map(|_| heap.extract_min().unwrap().0).collect();
    assert_eq!(order, vec![1, 0, 2]);
    for _ in 0..3 {
        assert!(matches!(heap.extract_min(), Err(Error::EmptyHeap)));
    }
    assert!((0..3).all(|item| heap.state(item) == Some(NodeState::Extracted)));
}

#[test]
fn tied_keys_may_pop_in_different_orders() {
    // both items tie at 234; whichever pops first is final, so lowering item 0
    // afterwards is either a key update or an error depending on the queue
    let ops = [
        Op::Decrease(1, 234),
        Op::Decrease(0, 234),
        Op::Extract,
        Op::Decrease(0, 0),
        Op::Decrease(0, 0),
        Op::Extract,
    ];
    let fib = replay(&mut FibonacciHeap::new(2), 2, &ops, |heap| {
        heap.validate().map_err(|e| TestCaseError::fail(e.to_string()))
    })
    .unwrap();
    let bin = replay(&mut LazyBinaryHeap::new(2), 2, &ops, |_| Ok(())).unwrap();
    let naive = replay(&mut LinearScanQueue::new(2), 2, &ops, |_| Ok(())).unwrap();

    for popped in [&fib, &bin, &naive] {
        assert_eq!(popped.len(), 2);
        assert_eq!(popped[0].1, 234);
        assert_ne!(popped[0].0, popped[1].0);
    }
    // the binary heap and the scan both break ties on the lowest id
    assert_eq!(bin, vec![(0, 234), (1, 234)]);
    assert_eq!(bin, naive);
}

#[test]
fn long_decrease_chains_keep_the_degree_bound() {
    // repeatedly consolidate, then cut deep nodes so that marks accumulate
    let n = 2_000;
    let mut heap: FibonacciHeap<u64> = FibonacciHeap::new(n);
    for item in 0..n {
        heap.decrease_key(item, 1_000_000 + item as u64).unwrap();
    }
    let mut next_key = 999_999;
    for round in 0..n / 4 {
        heap.extract_min().unwrap();
        for item in (round * 7 % n..n).step_by(11) {
            if heap.state(item) == Some(NodeState::Queued) {
                heap.decrease_key(item, next_key).unwrap();
                next_key -= 1;
            }
        }
        if round % 25 == 0 {
            heap.validate().unwrap();
        }
    }
    heap.validate().unwrap();

    let stats = heap.stats();
    assert!(stats.links <= stats.inserts + stats.cuts + stats.promotions);
    assert!(stats.cascading_cuts <= stats.marks);
    assert!(stats.marks <= stats.cuts - stats.cascading_cuts);
    assert!(stats.cuts > 0);
}
