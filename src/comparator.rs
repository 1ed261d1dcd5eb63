//! Ordering predicates deciding which element of a range is "extremal".
//!
//! A comparator answers `precedes(a, b)`: is `a` strictly more extremal than `b`?
//! It must be a strict weak order. `Less` gives range minimum queries,
//! `Greater` range maximum queries, and any `Fn(&T, &T) -> bool` closure works as well.

/// Strict weak order over `T`.
pub trait Comparator<T> {
    fn precedes(&self, a: &T, b: &T) -> bool;
    /// Pick the better of two indices into `values`.
    /// On ties, `first` wins. Every structure in this crate goes through this method,
    /// so all of them return the leftmost extremal index.
    #[inline]
    fn pick(&self, values: &[T], first: usize, second: usize) -> usize {
        if self.precedes(&values[second], &values[first]) {
            second
        } else {
            first
        }
    }
    /// Neither element precedes the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.precedes(a, b) && !self.precedes(b, a)
    }
}

/// Range minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Less;

/// Range maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greater;

impl<T: PartialOrd> Comparator<T> for Less {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd> Comparator<T> for Greater {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn pick_prefers_first_on_ties() {
        let values = vec![3, 1, 1, 3];
        assert_eq!(Less.pick(&values, 1, 2), 1);
        assert_eq!(Less.pick(&values, 0, 1), 1);
        assert_eq!(Greater.pick(&values, 0, 3), 0);
        assert_eq!(Greater.pick(&values, 1, 3), 3);
    }
    #[test]
    fn closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        let words = vec!["abc", "de", "fgh", "ij"];
        assert_eq!(by_len.pick(&words, 0, 1), 1);
        assert_eq!(by_len.pick(&words, 1, 3), 1);
        assert!(by_len.equivalent(&words[0], &words[2]));
        assert!(!Less.equivalent(&1, &2));
    }
}
