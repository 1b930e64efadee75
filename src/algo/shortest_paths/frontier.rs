use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Weight, Weighted};

/// Dequeue on an empty frontier.
///
/// The search loop checks emptiness before dequeuing, so this should not
/// happen in normal circumstances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dequeue from an empty frontier")]
pub struct EmptyFrontierError;

/// Min-priority queue driving the search.
///
/// Elements are dequeued in ascending order of priority. Among elements with
/// equal priority, the one enqueued first is dequeued first. There is no
/// decrease-key operation: an element enqueued again with a better priority
/// stays in the queue with its old priority as well.
pub trait Frontier<T, W> {
    fn enqueue(&mut self, element: T, priority: W);
    fn dequeue(&mut self) -> Result<T, EmptyFrontierError>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
}

/// Frontier implementation selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierKind {
    /// [`SortedFrontier`], linear insertion into a sorted sequence.
    Sorted,
    /// [`HeapFrontier`], logarithmic insertion into a binary heap.
    #[default]
    Heap,
}

impl FromStr for FrontierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" => Ok(FrontierKind::Sorted),
            "heap" => Ok(FrontierKind::Heap),
            other => Err(format!(
                "unknown frontier: {other} (expected: sorted or heap)"
            )),
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrontierKind::Sorted => "sorted",
            FrontierKind::Heap => "heap",
        })
    }
}

/// Sequence kept sorted by priority on every insertion.
#[derive(Debug, Clone)]
pub struct SortedFrontier<T, W> {
    items: VecDeque<(T, W)>,
}

impl<T, W> SortedFrontier<T, W> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T, W> Default for SortedFrontier<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W: Weight> Frontier<T, W> for SortedFrontier<T, W> {
    fn enqueue(&mut self, element: T, priority: W) {
        // Insert before the first strictly greater priority, that is, after
        // all equal ones.
        let at = self.items.partition_point(|(_, p)| !(*p > priority));
        self.items.insert(at, (element, priority));
    }

    fn dequeue(&mut self) -> Result<T, EmptyFrontierError> {
        self.items
            .pop_front()
            .map(|(element, _)| element)
            .ok_or(EmptyFrontierError)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Binary heap keyed by priority and then by insertion sequence number.
pub struct HeapFrontier<T, W: Weight> {
    heap: BinaryHeap<Reverse<Weighted<T, (W::Ord, u64)>>>,
    seq: u64,
}

impl<T, W: Weight> HeapFrontier<T, W> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }
}

impl<T, W: Weight> Default for HeapFrontier<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W: Weight> Frontier<T, W> for HeapFrontier<T, W> {
    fn enqueue(&mut self, element: T, priority: W) {
        self.heap
            .push(Reverse(Weighted(element, (priority.into(), self.seq))));
        self.seq += 1;
    }

    fn dequeue(&mut self) -> Result<T, EmptyFrontierError> {
        self.heap
            .pop()
            .map(|Reverse(Weighted(element, _))| element)
            .ok_or(EmptyFrontierError)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
