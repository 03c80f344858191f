use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::types::GridPoint;

/// Priority queue plus bookkeeping for one search direction.
///
/// Heap entries are ordered by priority, then by insertion sequence, so
/// equal-cost candidates are expanded first-in first-out.
pub(super) struct Frontier {
    heap: BinaryHeap<(Reverse<u64>, Reverse<u64>, GridPoint)>,
    dist: HashMap<GridPoint, u64>,
    parent: HashMap<GridPoint, GridPoint>,
    settled: HashSet<GridPoint>,
    seq: u64,
}

impl Frontier {
    pub(super) fn new(root: GridPoint, priority: u64) -> Self {
        let mut frontier = Self {
            heap: BinaryHeap::new(),
            dist: HashMap::new(),
            parent: HashMap::new(),
            settled: HashSet::new(),
            seq: 0,
        };
        frontier.dist.insert(root, 0);
        frontier.push(priority, root);
        frontier
    }

    fn push(&mut self, priority: u64, point: GridPoint) {
        self.heap.push((Reverse(priority), Reverse(self.seq), point));
        self.seq += 1;
    }

    /// Lowest priority among points not yet settled.
    pub(super) fn peek_priority(&mut self) -> Option<u64> {
        while let Some(&(Reverse(priority), _, point)) = self.heap.peek() {
            if !self.settled.contains(&point) {
                return Some(priority);
            }
            self.heap.pop();
        }
        None
    }

    /// Settles the next point and returns it with its distance from the root.
    pub(super) fn pop(&mut self) -> Option<(u64, GridPoint)> {
        while let Some((_, _, point)) = self.heap.pop() {
            if self.settled.insert(point) {
                let dist = self.dist.get(&point).copied()?;
                return Some((dist, point));
            }
        }
        None
    }

    /// Records `to` as reached through `from` if `dist` improves on what is
    /// known. Settled points are final.
    pub(super) fn relax(&mut self, from: GridPoint, to: GridPoint, dist: u64, priority: u64) -> bool {
        if self.settled.contains(&to) {
            return false;
        }
        match self.dist.entry(to) {
            Entry::Occupied(known) if *known.get() <= dist => return false,
            Entry::Occupied(mut known) => {
                known.insert(dist);
            }
            Entry::Vacant(slot) => {
                slot.insert(dist);
            }
        }
        self.parent.insert(to, from);
        self.push(priority, to);
        true
    }

    pub(super) fn dist(&self, point: GridPoint) -> Option<u64> {
        self.dist.get(&point).copied()
    }

    pub(super) fn settled_count(&self) -> usize {
        self.settled.len()
    }

    /// Points from the root to `point`, root first.
    pub(super) fn trace(&self, point: GridPoint) -> Vec<GridPoint> {
        let mut points = vec![point];
        let mut current = point;
        while let Some(&prev) = self.parent.get(&current) {
            points.push(prev);
            current = prev;
        }
        points.reverse();
        points
    }
}

pub(super) fn over_limit(settled: usize, limit: Option<usize>) -> bool {
    limit.is_some_and(|limit| settled > limit)
}
