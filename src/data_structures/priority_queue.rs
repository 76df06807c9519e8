use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue for shortest-path frontiers.
///
/// Decrease-key is expressed as insert-new-entry: stale duplicates for the
/// same vertex may coexist in the heap and are skipped by the consumer once
/// the vertex is finalized (lazy deletion). Ties on equal keys break on the
/// vertex value, which keeps extraction order fully deterministic.
#[derive(Debug, Default)]
pub struct MinHeap<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, counting stale duplicates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an entry for `vertex` with the given key
    pub fn push(&mut self, vertex: V, key: P) {
        self.heap.push(Reverse((key, vertex)));
    }

    /// Removes and returns the entry with the smallest key
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((key, vertex))| (vertex, key))
    }
}
