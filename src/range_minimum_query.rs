//! Range minimum query on an ordered array H.
//!
//! All ranges are zero-based and inclusive on both ends: `query(left, right)`
//! looks at `H[left..=right]` and returns the index of its extremal element.
//! Which element is extremal is decided by a [`Comparator`]; ties go to the leftmost index.
use crate::comparator::{Comparator, Less};
use crate::error::{check_range, Result, RmqError};

pub trait RangeMinimumQuery {
    /// Index of the extremal element in `[left, right]`.
    fn query(&self, left: usize, right: usize) -> Result<usize>;
    /// Length of the underlying sequence.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Index of the extremal element of the whole sequence.
    fn extremum(&self) -> Result<usize> {
        match self.len() {
            0 => Err(RmqError::InvalidRange {
                left: 0,
                right: 0,
                len: 0,
            }),
            len => self.query(0, len - 1),
        }
    }
    /// Bytes of precomputed index storage held on the heap.
    fn heap_bytes(&self) -> usize {
        0
    }
}

/// Scan `values[left..=right]` and return the first extremal index.
/// O(right - left + 1) time, no extra space.
pub fn naive_query<T, C: Comparator<T>>(
    values: &[T],
    left: usize,
    right: usize,
    comparator: &C,
) -> Result<usize> {
    check_range(left, right, values.len())?;
    Ok((left + 1..=right).fold(left, |best, i| comparator.pick(values, best, i)))
}

/// The linear scan wrapped as a structure. No preprocessing.
/// Used as the ground truth for the other structures.
#[derive(Debug, Clone)]
pub struct NaiveRangeMinimumQuery<'a, T, C = Less> {
    data: &'a [T],
    comparator: C,
}

impl<'a, T: PartialOrd> NaiveRangeMinimumQuery<'a, T, Less> {
    pub fn new(input: &'a [T]) -> Self {
        Self::with_comparator(input, Less)
    }
}

impl<'a, T, C: Comparator<T>> NaiveRangeMinimumQuery<'a, T, C> {
    pub fn with_comparator(input: &'a [T], comparator: C) -> Self {
        Self {
            data: input,
            comparator,
        }
    }
    pub fn try_with_comparator(input: &'a [T], comparator: C) -> Result<Self> {
        if input.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        Ok(Self::with_comparator(input, comparator))
    }
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<'a, T, C: Comparator<T>> RangeMinimumQuery for NaiveRangeMinimumQuery<'a, T, C> {
    fn query(&self, left: usize, right: usize) -> Result<usize> {
        naive_query(self.data, left, right, &self.comparator)
    }
    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Greater;
    #[test]
    fn small_example() {
        let input = vec![5, 2, 8, 1, 9, 3];
        let rmq = NaiveRangeMinimumQuery::new(&input);
        assert_eq!(rmq.query(0, 5), Ok(3));
        assert_eq!(rmq.query(1, 2), Ok(1));
        assert_eq!(rmq.query(4, 5), Ok(5));
        assert_eq!(rmq.query(2, 2), Ok(2));
        assert_eq!(rmq.extremum(), Ok(3));
    }
    #[test]
    fn first_occurrence_wins() {
        let input = vec![4, 1, 7, 1, 1, 7];
        assert_eq!(naive_query(&input, 0, 5, &Less), Ok(1));
        assert_eq!(naive_query(&input, 2, 5, &Less), Ok(3));
        assert_eq!(naive_query(&input, 0, 5, &Greater), Ok(2));
        assert_eq!(naive_query(&input, 3, 5, &Greater), Ok(5));
    }
    #[test]
    fn rejects_bad_ranges() {
        let input = vec![42];
        let rmq = NaiveRangeMinimumQuery::new(&input);
        assert_eq!(rmq.query(0, 0), Ok(0));
        assert!(rmq.query(0, 1).is_err());
        assert!(rmq.query(1, 0).is_err());
        let empty: Vec<i32> = vec![];
        let rmq = NaiveRangeMinimumQuery::new(&empty);
        assert!(rmq.is_empty());
        assert!(rmq.query(0, 0).is_err());
        assert!(rmq.extremum().is_err());
        assert_eq!(
            NaiveRangeMinimumQuery::try_with_comparator(&empty, Less).err(),
            Some(RmqError::EmptyInput)
        );
    }
}
