use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    priority: u32,
    /// Number of entries pushed before this one, breaks ties between equal priorities.
    seq: u64,
    node: usize
}

/// Min-priority queue of search nodes (given by their indices).
///
/// Among nodes with equal priorities, the one pushed first is popped first,
/// so the order of expansions is fully determined by the order of pushes.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    pushed: u64
}

impl Frontier {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, priority: u32, node: usize) {
        self.heap.push(Reverse(Entry { priority, seq: self.pushed, node }));
        self.pushed += 1;
    }

    /// Removes and returns the node with the lowest priority, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    #[inline] pub fn len(&self) -> usize { self.heap.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.heap.is_empty() }
}
