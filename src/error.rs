//! Errors reported by range query structures.
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RmqError {
    /// A strict build was requested over a zero-length sequence.
    #[error("cannot build a range query structure over an empty sequence")]
    EmptyInput,
    /// `left > right`, or the range does not fit in `[0, len - 1]`.
    #[error("invalid query range [{left}, {right}] for a sequence of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
    /// A cross-validation run was configured without any strategy to compare.
    #[error("no strategy selected for validation")]
    NoStrategy,
    /// A tree node fell outside the backing array. Only a construction bug can cause this.
    #[error("node {node} is outside the backing array of {size} nodes")]
    InternalInconsistency { node: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, RmqError>;

/// Accept `[left, right]` only if `left <= right < len`.
pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<()> {
    if left <= right && right < len {
        Ok(())
    } else {
        Err(RmqError::InvalidRange { left, right, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn ranges() {
        assert!(check_range(0, 0, 1).is_ok());
        assert!(check_range(2, 5, 6).is_ok());
        assert_eq!(
            check_range(0, 1, 1),
            Err(RmqError::InvalidRange {
                left: 0,
                right: 1,
                len: 1
            })
        );
        assert!(check_range(3, 2, 6).is_err());
        assert!(check_range(0, 0, 0).is_err());
        assert!(check_range(usize::MAX, usize::MAX, 4).is_err());
    }
    #[test]
    fn message() {
        assert_eq!(
            RmqError::NoStrategy.to_string(),
            "no strategy selected for validation"
        );
        let err = RmqError::InvalidRange {
            left: 4,
            right: 2,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid query range [4, 2] for a sequence of length 3"
        );
    }
}
