//! Segment tree. O(n) preprocessing, O(log n) query.
//!
//! The tree is stored in heap layout: the root is node 0 and covers `[0, n-1]`,
//! the children of node `i` are `2i+1` and `2i+2`. A node covering `[lo, hi]`
//! splits at `mid = lo + (hi - lo) / 2`; its first child covers `[lo, mid]`
//! and its second child `[mid + 1, hi]`. The leaves are the single elements.
use crate::bit_length;
use crate::comparator::{Comparator, Less};
use crate::error::{check_range, Result, RmqError};
use crate::range_minimum_query::RangeMinimumQuery;

#[derive(Debug, Clone)]
pub struct SegmentTreeRangeMinimumQuery<'a, T, C = Less> {
    data: &'a [T],
    // None for the slots no node maps to.
    tree: Vec<Option<usize>>,
    comparator: C,
}

impl<'a, T: PartialOrd> SegmentTreeRangeMinimumQuery<'a, T, Less> {
    pub fn new(input: &'a [T]) -> Self {
        Self::with_comparator(input, Less)
    }
}

impl<'a, T, C: Comparator<T>> SegmentTreeRangeMinimumQuery<'a, T, C> {
    /// Build the tree by recursive halving.
    /// An empty input gives an empty tree that rejects every query.
    pub fn with_comparator(input: &'a [T], comparator: C) -> Self {
        let tree = match bit_length::log2ceil(input.len()) {
            // 2^ceil(log2(n)) leaves are enough for n elements.
            Some(depth) => {
                let mut tree = vec![None; (1 << (depth + 1)) - 1];
                build(input, &comparator, &mut tree, 0, 0, input.len() - 1);
                tree
            }
            None => vec![],
        };
        log::debug!(
            "built segment tree over {} elements with {} nodes",
            input.len(),
            tree.len()
        );
        Self {
            data: input,
            tree,
            comparator,
        }
    }
    pub fn try_with_comparator(input: &'a [T], comparator: C) -> Result<Self> {
        if input.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        Ok(Self::with_comparator(input, comparator))
    }
    /// The backing array in heap layout.
    pub fn nodes(&self) -> &[Option<usize>] {
        &self.tree
    }
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
    /// `None` if `[lo, hi]` (the range of `node`) misses `[left, right]`.
    fn descend(
        &self,
        node: usize,
        lo: usize,
        hi: usize,
        left: usize,
        right: usize,
    ) -> Result<Option<usize>> {
        if hi < left || right < lo || lo > hi || left > right {
            return Ok(None);
        }
        if left <= lo && hi <= right {
            let best = self.tree.get(node).copied().flatten();
            debug_assert!(best.is_some(), "segment tree node {} is not built", node);
            return best.map(Some).ok_or(RmqError::InternalInconsistency {
                node,
                size: self.tree.len(),
            });
        }
        let mid = lo + (hi - lo) / 2;
        let former = self.descend(2 * node + 1, lo, mid, left, right)?;
        let latter = self.descend(2 * node + 2, mid + 1, hi, left, right)?;
        Ok(match (former, latter) {
            (Some(former), Some(latter)) => Some(self.comparator.pick(self.data, former, latter)),
            (former, None) => former,
            (None, latter) => latter,
        })
    }
}

/// Fill the subtree rooted at `node`, which covers `[lo, hi]`, and return its extremal index.
fn build<T, C: Comparator<T>>(
    input: &[T],
    comparator: &C,
    tree: &mut [Option<usize>],
    node: usize,
    lo: usize,
    hi: usize,
) -> Option<usize> {
    if lo > hi {
        return None;
    }
    debug_assert!(node < tree.len(), "node {} out of {}", node, tree.len());
    let best = if lo == hi {
        lo
    } else {
        let mid = lo + (hi - lo) / 2;
        let former = build(input, comparator, tree, 2 * node + 1, lo, mid);
        let latter = build(input, comparator, tree, 2 * node + 2, mid + 1, hi);
        match (former, latter) {
            (Some(former), Some(latter)) => comparator.pick(input, former, latter),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => return None,
        }
    };
    log::trace!("{:02}: [{}, {}] = {}", node, lo, hi, best);
    tree[node] = Some(best);
    Some(best)
}

impl<'a, T, C: Comparator<T>> RangeMinimumQuery for SegmentTreeRangeMinimumQuery<'a, T, C> {
    fn query(&self, left: usize, right: usize) -> Result<usize> {
        check_range(left, right, self.data.len())?;
        let found = self.descend(0, 0, self.data.len() - 1, left, right)?;
        // A valid range always overlaps the root.
        found.ok_or(RmqError::InternalInconsistency {
            node: 0,
            size: self.tree.len(),
        })
    }
    fn len(&self) -> usize {
        self.data.len()
    }
    fn heap_bytes(&self) -> usize {
        self.tree.capacity() * std::mem::size_of::<Option<usize>>()
    }
}
