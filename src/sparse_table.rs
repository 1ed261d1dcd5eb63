//! Sparse table. O(n log n) preprocessing, O(1) query.
use crate::bit_length;
use crate::comparator::{Comparator, Less};
use crate::error::{check_range, Result, RmqError};
use crate::range_minimum_query::RangeMinimumQuery;

/// `table[k][i]` is the index of the extremal element of `data[i..i + 2^k]`.
/// Level `k` holds `n - 2^k + 1` entries, for `k` in `0..=floor(log2(n))`.
#[derive(Debug, Clone)]
pub struct SparseTableRangeMinimumQuery<'a, T, C = Less> {
    data: &'a [T],
    table: Vec<Vec<usize>>,
    comparator: C,
}

impl<'a, T: PartialOrd> SparseTableRangeMinimumQuery<'a, T, Less> {
    pub fn new(input: &'a [T]) -> Self {
        Self::with_comparator(input, Less)
    }
}

impl<'a, T, C: Comparator<T>> SparseTableRangeMinimumQuery<'a, T, C> {
    /// Build the table bottom-up. An empty input gives an empty table that rejects every query.
    pub fn with_comparator(input: &'a [T], comparator: C) -> Self {
        let len = input.len();
        let logn = match bit_length::log2(len) {
            Some(lg) => lg as usize,
            None => {
                return Self {
                    data: input,
                    table: vec![],
                    comparator,
                }
            }
        };
        let mut table: Vec<Vec<usize>> = Vec::with_capacity(logn + 1);
        table.push((0..len).collect());
        for k in 1..=logn {
            let half = 1 << (k - 1);
            let prev = &table[k - 1];
            let level: Vec<usize> = (0..len - (1 << k) + 1)
                .map(|i| comparator.pick(input, prev[i], prev[i + half]))
                .collect();
            log::trace!("sparse table level {}: {:?}", k, level);
            table.push(level);
        }
        log::debug!(
            "built sparse table over {} elements with {} levels",
            len,
            table.len()
        );
        Self {
            data: input,
            table,
            comparator,
        }
    }
    pub fn try_with_comparator(input: &'a [T], comparator: C) -> Result<Self> {
        if input.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        Ok(Self::with_comparator(input, comparator))
    }
    /// Number of levels, `floor(log2(n)) + 1`, or zero for an empty input.
    pub fn levels(&self) -> usize {
        self.table.len()
    }
    pub fn level(&self, k: usize) -> Option<&[usize]> {
        self.table.get(k).map(|level| level.as_slice())
    }
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<'a, T, C: Comparator<T>> RangeMinimumQuery for SparseTableRangeMinimumQuery<'a, T, C> {
    fn query(&self, left: usize, right: usize) -> Result<usize> {
        check_range(left, right, self.data.len())?;
        let k = match bit_length::log2(right - left + 1) {
            Some(lg) => lg as usize,
            None => {
                return Err(RmqError::InvalidRange {
                    left,
                    right,
                    len: self.len(),
                })
            }
        };
        // Two windows of length 2^k covering [left, right]. They may overlap.
        let former = self.table[k][left];
        let latter = self.table[k][right + 1 - (1 << k)];
        Ok(self.comparator.pick(self.data, former, latter))
    }
    fn len(&self) -> usize {
        self.data.len()
    }
    fn heap_bytes(&self) -> usize {
        self.table
            .iter()
            .map(|level| level.capacity() * std::mem::size_of::<usize>())
            .sum::<usize>()
            + self.table.capacity() * std::mem::size_of::<Vec<usize>>()
    }
}
